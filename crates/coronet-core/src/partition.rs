//! Disk area-partition engine.
//!
//! Converts between a linear cut distance and the fraction of a disk's area
//! enclosed by that cut. This is what makes band heights inside a circular
//! node represent *areas* rather than raw heights: a band near the disk's
//! edge must be taller than one near the middle to enclose the same area.
//!
//! # Overview
//!
//! - [`area_fraction`]: fraction of a disk of radius `r` lying within
//!   distance `h` of one edge, measured along the cut axis.
//! - [`height_for_fraction`]: the numeric inverse, solved by bisection.
//!
//! Both functions saturate at their boundaries rather than erroring:
//! fractions clamp to `[0, 1]` and heights to `[0, 2r]`. Interior values are
//! exact to floating-point precision (forward) or bisection tolerance
//! (inverse).

use std::f32::consts::PI;

/// Number of bisection iterations used by [`height_for_fraction`].
///
/// The search interval is `[0, 2r]`, so the result is accurate to
/// `2r / 2^30`, far below any rendering tolerance.
const BISECTION_ITERATIONS: u32 = 30;

/// Returns the fraction of a disk's area lying within distance `h` of one
/// edge, along the cut axis.
///
/// Uses the closed-form circular-segment area with the substitution
/// `u = h/r - 1`. Saturates to `0.0` for `h <= 0` and `1.0` for `h >= 2r`.
/// Assumes `r > 0`; validated [`Disk`](crate::draw::Disk) values are the
/// only in-tree callers.
pub fn area_fraction(h: f32, r: f32) -> f32 {
    if h <= 0.0 {
        return 0.0;
    }
    if h >= 2.0 * r {
        return 1.0;
    }

    let u = h / r - 1.0;
    0.5 + (u.asin() + u * (1.0 - u * u).sqrt()) / PI
}

/// Returns the cut distance `h` at which [`area_fraction`] reaches the given
/// fraction, for a disk of radius `r`.
///
/// The area function has no closed-form inverse, so interior values are
/// solved by bisection over `[0, 2r]` with a fixed iteration count.
/// Saturates to `0.0` for `fraction <= 0` and `2r` for `fraction >= 1`.
pub fn height_for_fraction(fraction: f32, r: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 2.0 * r;
    }

    let mut low = 0.0_f32;
    let mut high = 2.0 * r;
    for _ in 0..BISECTION_ITERATIONS {
        let mid = (low + high) / 2.0;
        if area_fraction(mid, r) < fraction {
            low = mid;
        } else {
            high = mid;
        }
    }

    (low + high) / 2.0
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_area_fraction_boundaries() {
        let r = 10.0;
        assert_eq!(area_fraction(0.0, r), 0.0);
        assert_eq!(area_fraction(-5.0, r), 0.0);
        assert_eq!(area_fraction(2.0 * r, r), 1.0);
        assert_eq!(area_fraction(3.0 * r, r), 1.0);
    }

    #[test]
    fn test_area_fraction_halfway() {
        // A cut through the center splits the disk in half, for any radius.
        for r in [0.5, 1.0, 10.0, 250.0] {
            assert_approx_eq!(f32, area_fraction(r, r), 0.5, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_area_fraction_quarter_height_is_less_than_quarter_area() {
        // Near the edge the disk is narrow, so a quarter of the height
        // encloses less than a quarter of the area.
        let r = 10.0;
        let fraction = area_fraction(r / 2.0, r);
        assert!(fraction < 0.25, "got {fraction}");
        assert!(fraction > 0.0);
    }

    #[test]
    fn test_height_for_fraction_boundaries() {
        let r = 10.0;
        assert_eq!(height_for_fraction(0.0, r), 0.0);
        assert_eq!(height_for_fraction(-0.5, r), 0.0);
        assert_eq!(height_for_fraction(1.0, r), 2.0 * r);
        assert_eq!(height_for_fraction(1.5, r), 2.0 * r);
    }

    #[test]
    fn test_height_for_fraction_halfway() {
        let r = 7.0;
        assert_approx_eq!(f32, height_for_fraction(0.5, r), r, epsilon = 1e-3);
    }

    #[test]
    fn test_round_trip_known_values() {
        let r = 10.0;
        for fraction in [0.05, 0.1, 0.25, 0.3, 0.5, 0.7, 0.9, 0.99] {
            let h = height_for_fraction(fraction, r);
            assert_approx_eq!(f32, area_fraction(h, r), fraction, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_symmetry() {
        let r = 10.0;
        for h in [0.0, 1.0, 3.0, 5.0, 10.0, 14.0, 19.0, 20.0] {
            let sum = area_fraction(h, r) + area_fraction(2.0 * r - h, r);
            assert_approx_eq!(f32, sum, 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_monotonic_in_h() {
        let r = 10.0;
        let mut previous = 0.0;
        let mut h = 0.0;
        while h <= 2.0 * r {
            let fraction = area_fraction(h, r);
            assert!(
                fraction >= previous,
                "area_fraction not monotonic at h={h}: {fraction} < {previous}"
            );
            previous = fraction;
            h += 0.25;
        }
    }
}
