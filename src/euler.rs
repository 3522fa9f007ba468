//! Euler angles ⇄ DCM for any valid [`EulerSequence`] and either [`Convention`].
//!
//! Angles are composed from the passive [`rot_mat`] matrices. For a sequence `s₁-s₂-s₃` with
//! angles `a₁, a₂, a₃`:
//!
//! ```text
//! body:  DCM = R(s₃, a₃) · R(s₂, a₂) · R(s₁, a₁)
//! space: DCM = R(s₁, a₁) · R(s₂, a₂) · R(s₃, a₃)
//! ```
//!
//! Decomposition always succeeds. When the middle rotation lines up the first and last axes
//! ([gimbal lock]) the split between the outer angles is arbitrary; one valid split is returned,
//! and recomposing it reproduces the DCM even though it may not reproduce the original angles.
//!
//! ```
//! use angutils::{dcm_to_euler, euler_to_dcm, Convention, EulerSequence};
//! use approx::assert_abs_diff_eq;
//! use uom::si::{angle::radian, f64::Angle};
//!
//! let zxz = EulerSequence::try_from([3, 1, 3]).unwrap();
//! let angles = [0.1, 0.2, 0.3].map(Angle::new::<radian>);
//!
//! let dcm = euler_to_dcm(zxz, angles, Convention::Body);
//! let recovered = dcm_to_euler(&dcm, zxz, Convention::Body);
//! assert_abs_diff_eq!(euler_to_dcm(zxz, recovered, Convention::Body), dcm, epsilon = 1e-15);
//! ```
//!
//! [gimbal lock]: https://en.wikipedia.org/wiki/Gimbal_lock

use crate::axes::{Axis, Convention, EulerSequence};
use crate::math::rot_mat;
use crate::util::{angle, into_signed_range};
use crate::Matrix3;
use uom::si::f64::Angle;

/// How close to zero the "row partner" norm of the decomposition may get before the outer angles
/// are treated as coupled.
const GIMBAL_LOCK_TOLERANCE: f64 = 4. * f64::EPSILON;

/// Composes three elementary rotations into a DCM.
///
/// `angles[i]` is the rotation about `sequence.axes()[i]`. See the [module docs](self) for how
/// `convention` orders the product.
#[doc(alias = "EulerAng2DCM")]
#[must_use]
pub fn euler_to_dcm(sequence: EulerSequence, angles: [Angle; 3], convention: Convention) -> Matrix3 {
    let [r1, r2, r3] = {
        let axes = sequence.axes();
        [0, 1, 2].map(|i| rot_mat(axes[i], angles[i]))
    };
    match convention {
        Convention::Body => r3 * r2 * r1,
        Convention::Space => r1 * r2 * r3,
    }
}

/// Splits a DCM into the three angles of `sequence` under `convention`; the inverse of
/// [`euler_to_dcm`].
///
/// Every angle is in (-π, π]. For proper Euler sequences (eg, 3-1-3) the middle angle is either in
/// (-π, 0] or exactly π, under both conventions; for Tait-Bryan sequences (eg, 3-2-1) it is in
/// [-π/2, π/2].
#[doc(alias = "DCM2EulerAng")]
#[must_use]
pub fn dcm_to_euler(dcm: &Matrix3, sequence: EulerSequence, convention: Convention) -> [Angle; 3] {
    let [s1, s2, s3] = sequence.axes();
    // Passive rotations are active ones by the negated angle, so
    //
    //   space: DCM = A(s₁, -a₁) · A(s₂, -a₂) · A(s₃, -a₃)
    //   body:  DCM = A(s₃, -a₃) · A(s₂, -a₂) · A(s₁, -a₁)
    //
    // and both reduce to splitting a product of three active rotations.
    let angles = match convention {
        Convention::Space => {
            let [alpha, beta, gamma] = split_active(dcm, s1, s2, s3);
            [-alpha, -beta, -gamma]
        }
        Convention::Body => {
            let [alpha, beta, gamma] = split_active(dcm, s3, s2, s1);
            [-gamma, -beta, -alpha]
        }
    };
    angles.map(|a| angle(into_signed_range(a)))
}

/// Finds `[α, β, γ]` such that `q = A(i, α) · A(j, β) · A(k, γ)`, where `A` is the active
/// (vector-rotating) elementary rotation, ie, the transpose of [`rot_mat`].
///
/// Every angle comes out of `atan2`, never `asin`/`acos`: the middle angle is measured against the
/// norm of its row partners, which stays well conditioned right up to gimbal lock.
fn split_active(q: &Matrix3, first: Axis, middle: Axis, last: Axis) -> [f64; 3] {
    let (i, j) = (first.index(), middle.index());
    // the axis not used by the first two rotations; equal to `last` for Tait-Bryan sequences
    let k = 3 - i - j;
    // +1 when (i, j, k) is a cyclic permutation of (x, y, z), -1 otherwise
    let parity = if (j + 3 - i) % 3 == 1 { 1. } else { -1. };

    if first == last {
        // proper Euler: q[i][i] = cos β
        let sin_beta = q[(i, j)].hypot(q[(i, k)]);
        let beta = sin_beta.atan2(q[(i, i)]);
        if sin_beta > GIMBAL_LOCK_TOLERANCE {
            let alpha = q[(j, i)].atan2(-parity * q[(k, i)]);
            let gamma = q[(i, j)].atan2(parity * q[(i, k)]);
            [alpha, beta, gamma]
        } else {
            log::debug!(
                "gimbal lock splitting {}-{}-{}: middle angle {beta} rad; pinning the last angle to zero",
                first,
                middle,
                last
            );
            let alpha = (parity * q[(k, j)]).atan2(q[(j, j)]);
            [alpha, beta, 0.]
        }
    } else {
        // Tait-Bryan: q[i][k] = ±sin β
        let cos_beta = q[(i, i)].hypot(q[(i, j)]);
        let sin_beta = parity * q[(i, k)];
        let beta = sin_beta.atan2(cos_beta);
        if cos_beta > GIMBAL_LOCK_TOLERANCE {
            let alpha = (-parity * q[(j, k)]).atan2(q[(k, k)]);
            let gamma = (-parity * q[(i, j)]).atan2(q[(i, i)]);
            [alpha, beta, gamma]
        } else {
            log::debug!(
                "gimbal lock splitting {}-{}-{}: middle angle {beta} rad; pinning the last angle to zero",
                first,
                middle,
                last
            );
            let alpha = (sin_beta * q[(j, i)]).atan2(q[(j, j)]);
            [alpha, beta, 0.]
        }
    }
}
