use std::f64::consts::{PI, TAU};
use uom::si::angle::radian;
use uom::si::f64::Angle;

/// Maps an angle in [-π, π] (as produced by `atan2`) to (-π, π].
///
/// Only -π itself moves, and values already in range come back bit-for-bit. Anything further out
/// is shifted by a single full turn.
pub(crate) fn into_signed_range(angle: f64) -> f64 {
    if angle <= -PI {
        angle + TAU
    } else if angle > PI {
        angle - TAU
    } else {
        angle
    }
}

/// Clamps a cosine or sine recovered from matrix entries into the domain of `acos`/`asin`.
pub(crate) fn clamp_unit(value: f64) -> f64 {
    value.clamp(-1., 1.)
}

pub(crate) fn radians(angle: impl Into<Angle>) -> f64 {
    angle.into().get::<radian>()
}

pub(crate) fn angle(radians: f64) -> Angle {
    Angle::new::<radian>(radians)
}

#[cfg(test)]
mod tests {
    use super::{angle, clamp_unit, into_signed_range, radians};
    use rstest::rstest;
    use std::f64::consts::{FRAC_PI_2, PI};
    use uom::si::angle::degree;
    use uom::si::f64::Angle;

    #[rstest]
    #[case(0., 0.)]
    #[case(FRAC_PI_2, FRAC_PI_2)]
    #[case(-FRAC_PI_2, -FRAC_PI_2)]
    #[case(PI, PI)]
    #[case(-PI, PI)]
    #[case(-0.3, -0.3)]
    fn signed_range(#[case] input: f64, #[case] expected: f64) {
        assert_eq!(into_signed_range(input), expected);
    }

    #[test]
    fn signed_range_leaves_in_range_values_untouched() {
        let x = -0.123_456_789_012_345_67;
        assert_eq!(into_signed_range(x).to_bits(), x.to_bits());
    }

    #[rstest]
    #[case(1. + f64::EPSILON, 1.)]
    #[case(-1. - f64::EPSILON, -1.)]
    #[case(0.5, 0.5)]
    fn clamps_to_unit_interval(#[case] input: f64, #[case] expected: f64) {
        assert_eq!(clamp_unit(input), expected);
    }

    #[test]
    fn radian_conversions_are_lossless() {
        assert_eq!(radians(angle(0.1)), 0.1);
        approx::assert_relative_eq!(radians(Angle::new::<degree>(180.)), PI);
    }
}
