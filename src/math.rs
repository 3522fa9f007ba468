//! Elementary rotations, the axis-angle ⇄ DCM pair, and signed angles between vectors.
//!
//! Two matrix senses meet here, and it pays to keep them apart:
//!
//! - [`calc_dcm`] is _active_: `calc_dcm(n, θ) * v` is `v` rotated by θ about `n` following the
//!   [right-hand rule][rhrot].
//! - [`rot_mat`] is _passive_: `rot_mat(axis, θ) * v` gives the components of a fixed `v` in a
//!   frame that has been rotated by θ about `axis`.
//!
//! The two are transposes of each other for a single coordinate axis:
//!
//! ```
//! use angutils::{calc_dcm, rot_mat, Axis};
//! use approx::assert_abs_diff_eq;
//! use uom::si::{angle::radian, f64::Angle};
//!
//! let theta = Angle::new::<radian>(0.5);
//! for axis in [Axis::X, Axis::Y, Axis::Z] {
//!     assert_abs_diff_eq!(
//!         calc_dcm(&axis.unit_vector(), theta).transpose(),
//!         rot_mat(axis, theta),
//!         epsilon = 1e-15
//!     );
//! }
//! ```
//!
//! [rhrot]: https://en.wikipedia.org/wiki/Right-hand_rule#Rotations

use crate::axes::Axis;
use crate::util::{angle, clamp_unit, into_signed_range, radians};
use crate::vectors::{proj_plane, skew, vnorm};
use crate::{Matrix3, Vector3};
use nalgebra::Matrix3xX;
use std::fmt::{self, Display, Formatter};
use uom::si::angle::radian;
use uom::si::f64::Angle;

#[cfg(any(test, feature = "approx"))]
use approx::{AbsDiffEq, RelativeEq};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Below this cosine the rotation axis is read from the symmetric part of the DCM instead of its
/// skew-symmetric part, whose magnitude (2·sin θ) vanishes as θ approaches π.
const SYMMETRIC_AXIS_BELOW_COS: f64 = -0.5;

/// A rotation expressed as a unit axis and an angle about it.
///
/// Values produced by [`dcm_to_axis_angle`] are canonical: the angle lies in [0, π], with the axis
/// flipped to compensate when the rotation was originally described by an angle beyond π.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AxisAngle {
    axis: Vector3,
    angle: Angle,
}

impl AxisAngle {
    /// Pairs a rotation axis with an angle. The axis is normalized, so it must not be zero.
    #[must_use]
    pub fn new(axis: &Vector3, angle: impl Into<Angle>) -> Self {
        Self {
            axis: vnorm(axis),
            angle: angle.into(),
        }
    }

    /// The unit rotation axis.
    #[must_use]
    pub fn axis(&self) -> Vector3 {
        self.axis
    }

    /// The (right-handed) rotation angle about [`AxisAngle::axis`].
    #[must_use]
    pub fn angle(&self) -> Angle {
        self.angle
    }

    /// The DCM that performs this rotation; see [`calc_dcm`].
    #[must_use]
    pub fn to_dcm(&self) -> Matrix3 {
        calc_dcm(&self.axis, self.angle)
    }
}

impl Display for AxisAngle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} rad about [{}, {}, {}]",
            self.angle.get::<radian>(),
            self.axis.x,
            self.axis.y,
            self.axis.z
        )
    }
}

#[cfg(any(test, feature = "approx"))]
impl AbsDiffEq<Self> for AxisAngle {
    type Epsilon = <f64 as AbsDiffEq>::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        Vector3::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.axis.abs_diff_eq(&other.axis, epsilon)
            && self
                .angle
                .get::<radian>()
                .abs_diff_eq(&other.angle.get::<radian>(), epsilon)
    }
}

#[cfg(any(test, feature = "approx"))]
impl RelativeEq for AxisAngle {
    fn default_max_relative() -> Self::Epsilon {
        Vector3::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.axis.relative_eq(&other.axis, epsilon, max_relative)
            && self.angle.get::<radian>().relative_eq(
                &other.angle.get::<radian>(),
                epsilon,
                max_relative,
            )
    }
}

/// The passive rotation matrix for a right-handed rotation by `angle` about a coordinate axis.
///
/// For [`Axis::Z`] this is
///
/// ```text
/// |  cos θ  sin θ  0 |
/// | -sin θ  cos θ  0 |
/// |    0      0    1 |
/// ```
///
/// so a 90° rotation takes `[1, 0, 0]` to `[0, -1, 0]`: the vector stays put while the frame turns
/// underneath it.
#[doc(alias = "rotMat")]
#[must_use]
pub fn rot_mat(axis: Axis, angle: impl Into<Angle>) -> Matrix3 {
    let (s, c) = radians(angle).sin_cos();
    match axis {
        Axis::X => Matrix3::new(
            1., 0., 0., //
            0., c, s, //
            0., -s, c,
        ),
        Axis::Y => Matrix3::new(
            c, 0., -s, //
            0., 1., 0., //
            s, 0., c,
        ),
        Axis::Z => Matrix3::new(
            c, s, 0., //
            -s, c, 0., //
            0., 0., 1.,
        ),
    }
}

/// The DCM that rotates vectors by `angle` about `axis` ([Rodrigues' rotation formula]):
///
/// ```text
/// DCM = I·cos θ + [n]ₓ·sin θ + n·nᵀ·(1 - cos θ)
/// ```
///
/// `axis` is normalized first, so it need not be unit length (but must not be zero). A zero
/// `angle` gives exactly the identity.
///
/// ```
/// use angutils::{calc_dcm, Vector3};
/// use approx::assert_relative_eq;
/// use uom::si::{angle::degree, f64::Angle};
///
/// let dcm = calc_dcm(&Vector3::z(), Angle::new::<degree>(90.));
/// assert_relative_eq!(dcm * Vector3::x(), Vector3::y(), epsilon = 1e-15);
/// ```
///
/// [Rodrigues' rotation formula]: https://en.wikipedia.org/wiki/Rodrigues%27_rotation_formula
#[doc(alias = "calcDCM")]
#[must_use]
pub fn calc_dcm(axis: &Vector3, angle: impl Into<Angle>) -> Matrix3 {
    let n = vnorm(axis);
    let (s, c) = radians(angle).sin_cos();
    Matrix3::identity() * c + skew(&n) * s + n * n.transpose() * (1. - c)
}

/// Recovers the rotation axis and angle of a DCM; the inverse of [`calc_dcm`].
///
/// The angle is always in [0, π]. A DCM built from an angle θ > π about `n` comes back as
/// `2π - θ` about `-n`, which is the same rotation. For the identity the axis is meaningless;
/// `[1, 0, 0]` is reported.
///
/// Accuracy is best for mid-range angles. Within a few degrees of 0 the axis is poorly determined
/// (it is the direction of a vanishingly small vector), and near π it is read from the symmetric
/// part of the matrix, which trades a little precision for stability.
#[doc(alias = "DCM2axang")]
#[must_use]
pub fn dcm_to_axis_angle(dcm: &Matrix3) -> AxisAngle {
    // 2·sin θ·n
    let w = Vector3::new(
        dcm[(2, 1)] - dcm[(1, 2)],
        dcm[(0, 2)] - dcm[(2, 0)],
        dcm[(1, 0)] - dcm[(0, 1)],
    );
    let w_norm = w.norm();
    let cos = clamp_unit((dcm.trace() - 1.) / 2.);
    let theta = (w_norm / 2.).atan2(cos);

    let axis = if cos > SYMMETRIC_AXIS_BELOW_COS {
        if w_norm > 0. {
            w / w_norm
        } else {
            log::trace!("DCM is the identity; reporting the default rotation axis");
            Vector3::x()
        }
    } else {
        log::trace!("rotation angle {theta} rad is close to π; using the symmetric part of the DCM");
        // (DCM + DCMᵀ)/2 - cos θ·I = (1 - cos θ)·n·nᵀ
        let outer = dcm.symmetric_part() - Matrix3::identity() * cos;
        let k = outer.diagonal().imax();
        let scale = (outer[(k, k)] * (1. - cos)).max(0.).sqrt();
        let axis = vnorm(&(outer.column(k) / scale));
        if axis.dot(&w) < 0. {
            -axis
        } else {
            axis
        }
    };

    AxisAngle {
        axis,
        angle: angle(theta),
    }
}

/// The signed angle θ, in (-π, π], by which `x` must be rotated about `z` to line up with `y`.
///
/// That is, for unit `x` orthogonal to `z`, `calc_ang(x, &(calc_dcm(z, θ) * x), z)` is θ. Only
/// the components of `x` and `y` in the plane orthogonal to `z` matter, and none of the three
/// need be unit length. Neither `z` nor the in-plane parts of `x` and `y` may be zero.
///
/// ```
/// use angutils::{calc_ang, Vector3};
/// use approx::assert_relative_eq;
/// use uom::si::angle::degree;
///
/// let theta = calc_ang(&Vector3::x(), &Vector3::new(0., -2., 5.), &Vector3::z());
/// assert_relative_eq!(theta.get::<degree>(), -90.);
/// ```
#[doc(alias = "calcang")]
#[must_use]
pub fn calc_ang(x: &Vector3, y: &Vector3, z: &Vector3) -> Angle {
    let z = vnorm(z);
    let in_plane = proj_plane(&Matrix3xX::from_columns(&[*x, *y]), &z);
    let (x, y) = (in_plane.column(0), in_plane.column(1));

    let sin = x.cross(&y).dot(&z);
    let cos = x.dot(&y);
    angle(into_signed_range(sin.atan2(cos)))
}
