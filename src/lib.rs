//! This library converts between the common ways of writing down a 3D rotation: direction cosine
//! matrices (DCMs), axis-angle pairs, and Euler angles in any of the twelve valid axis sequences.
//! It also carries the handful of vector helpers those conversions lean on, like normalization,
//! skew-symmetric (cross product) matrices and projection onto a plane.
//!
//! Vectors and matrices are [`nalgebra`] types ([`Vector3`] and [`Matrix3`]), and angles are
//! [`uom`] [`Angle`](uom::si::f64::Angle)s so that degrees and radians cannot be mixed up. Loosely
//! shaped input (slices, arrays, row vectors) becomes a [`Vector3`] through [`col_vec`], which is
//! the one place where the shape is checked.
//!
//! There are two matrix senses in play, and the [`math`] module explains how they relate:
//! [`calc_dcm`] rotates vectors, while [`rot_mat`] and everything in [`euler`] rotate frames.
//!
//! # Examples
//!
//! Say a spacecraft's attitude is known as a 3-2-1 (yaw, pitch, roll) body sequence and we want
//! the single rotation that takes it there from its reference frame:
//!
//! ```
//! use angutils::{dcm_to_axis_angle, dcm_to_euler, euler_to_dcm, Convention, EulerSequence};
//! use approx::assert_abs_diff_eq;
//! use uom::si::angle::{degree, radian};
//! use uom::si::f64::Angle;
//!
//! let ypr = EulerSequence::try_from([3, 2, 1]).expect("3-2-1 is a valid sequence");
//! let angles = [30., 10., -5.].map(Angle::new::<degree>);
//!
//! // the frame rotation described by those angles
//! let dcm = euler_to_dcm(ypr, angles, Convention::Body);
//!
//! // as one rotation about one axis
//! let axis_angle = dcm_to_axis_angle(&dcm);
//! println!("{axis_angle}");
//!
//! // and back again
//! let recovered = dcm_to_euler(&dcm, ypr, Convention::Body);
//! for (got, want) in recovered.into_iter().zip(angles) {
//!     assert_abs_diff_eq!(got.get::<radian>(), want.get::<radian>(), epsilon = 1e-12);
//! }
//! ```
//!
//! Integer axis indices, as they appear in config files and older tooling, are validated on the
//! way in:
//!
//! ```
//! use angutils::{Error, EulerSequence};
//!
//! assert_eq!(EulerSequence::try_from([1, 1, 2]), Err(Error::DegenerateSequence([1, 1, 2])));
//! assert_eq!(EulerSequence::try_from([3, 4, 3]), Err(Error::InvalidAxis(4)));
//! ```

mod axes;
mod error;
mod util;
mod vectors;

pub mod euler;
pub mod math;

/// A 3-element column vector of `f64`.
pub type Vector3 = nalgebra::Vector3<f64>;

/// A 3×3 matrix of `f64`.
pub type Matrix3 = nalgebra::Matrix3<f64>;

pub use axes::{Axis, Convention, EulerSequence};
pub use error::{Error, Result};
pub use euler::{dcm_to_euler, euler_to_dcm};
pub use math::{calc_ang, calc_dcm, dcm_to_axis_angle, rot_mat, AxisAngle};
pub use vectors::{col_vec, mat3, proj_plane, skew, vnorm, VectorLike};
