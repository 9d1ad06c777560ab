use std::f64::consts::TAU;

/// Beyond this many turns the angle is reduced with `rem_euclid` before folding.
const MAX_FOLD_TURNS: f64 = 4.0;

/// Wraps an angle into `[0, 2π)`.
///
/// Full turns are added while the angle is negative and subtracted while it is
/// at or above `2π`, so an angle a hair below zero lands on exactly `0.0`
/// rather than on `2π`. Angles more than a few turns out are first reduced
/// with [`f64::rem_euclid`], which keeps the same upward wrap for negative
/// input and bounds the folding to a handful of iterations.
///
/// Non-finite input is returned unchanged.
#[must_use]
pub fn wrap_angle(mut angle: f64) -> f64 {
    if !angle.is_finite() {
        return angle;
    }
    if angle.abs() > MAX_FOLD_TURNS * TAU {
        angle = angle.rem_euclid(TAU);
    }
    while angle < 0.0 {
        angle += TAU;
    }
    while angle >= TAU {
        angle -= TAU;
    }
    angle
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    #[allow(clippy::float_cmp)]
    fn in_range_angles_are_untouched() {
        for angle in [0.0, 1.0, PI, TAU - 1e-9] {
            assert_eq!(wrap_angle(angle), angle);
        }
    }

    #[test]
    fn negative_angles_wrap_upward() {
        assert_relative_eq!(wrap_angle(-PI / 2.0), 1.5 * PI, epsilon = 1e-12);
        assert_relative_eq!(wrap_angle(-3.0 * TAU - 1.0), TAU - 1.0, epsilon = 1e-12);
    }

    #[test]
    fn large_angles_wrap_downward() {
        assert_relative_eq!(wrap_angle(TAU + 0.5), 0.5, epsilon = 1e-12);
        assert_relative_eq!(wrap_angle(5.0 * TAU + 2.0), 2.0, epsilon = 1e-12);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn full_turn_maps_to_zero() {
        assert_eq!(wrap_angle(TAU), 0.0);
        assert_eq!(wrap_angle(-TAU), 0.0);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn tiny_negative_angle_never_lands_on_full_turn() {
        // -1e-18 + 2π rounds to exactly 2π, which must fold back to 0.
        let wrapped = wrap_angle(-1e-18);
        assert!((0.0..TAU).contains(&wrapped));
        assert_eq!(wrapped, 0.0);
    }

    #[test]
    fn many_turns_match_repeated_folding() {
        assert_relative_eq!(wrap_angle(100.0 * TAU + 1.0), 1.0, epsilon = 1e-9);
        assert_relative_eq!(wrap_angle(-100.0 * TAU - 1.0), TAU - 1.0, epsilon = 1e-9);
    }

    #[test]
    fn huge_angles_land_in_range() {
        for angle in [1e17, -1e17, 1e300, -1e300, f64::MAX, f64::MIN] {
            let wrapped = wrap_angle(angle);
            assert!((0.0..TAU).contains(&wrapped), "{angle} wrapped to {wrapped}");
        }
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn non_finite_passes_through() {
        assert!(wrap_angle(f64::NAN).is_nan());
        assert_eq!(wrap_angle(f64::INFINITY), f64::INFINITY);
    }
}
