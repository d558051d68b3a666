//! Tick labels for angles, expressed as multiples of π.

use std::f64::consts::PI;

/// Absolute tolerance of [`is_close`].
pub const ABS_TOLERANCE: f64 = 1e-8;
/// Relative tolerance of [`is_close`].
pub const REL_TOLERANCE: f64 = 1e-5;

/// Return `true` if `a` is within [`ABS_TOLERANCE`] plus
/// [`REL_TOLERANCE`] times `|b|` of the reference value `b`.  The test
/// is not symmetric; close to zero only the absolute bound matters.
pub fn is_close(a: f64, b: f64) -> bool {
    (a - b).abs() <= ABS_TOLERANCE + REL_TOLERANCE * b.abs()
}

/// Label the tick `value` as a multiple of π.
///
/// Integer multiples are written without a decimal point and the unit
/// factor is omitted; other values are rounded to one decimal.
///
/// # Example
///
/// ```
/// use std::f64::consts::PI;
/// use gridlines_demo::angle::pi_label;
/// assert_eq!(pi_label(0.), "0");
/// assert_eq!(pi_label(-PI), "-π");
/// assert_eq!(pi_label(2. * PI), "2π");
/// assert_eq!(pi_label(PI / 2.), "0.5π");
/// ```
pub fn pi_label(value: f64) -> String {
    let k = value / PI;
    if k.is_nan() {
        return "nanπ".to_string();
    }
    // Infinities end up in the decimal branch.
    if k.is_finite() {
        if is_close(k, 0.) {
            return "0".to_string();
        }
        let n = k.round();
        if is_close(k, n) {
            return if n == 1. {
                "π".to_string()
            } else if n == -1. {
                "-π".to_string()
            } else {
                format!("{n:.0}π")
            };
        }
    }
    format!("{k:.1}π")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero() {
        assert_eq!(pi_label(0.), "0");
        assert_eq!(pi_label(-0.), "0");
        assert_eq!(pi_label(1e-9), "0");
        assert_eq!(pi_label(-2e-8), "0");
    }

    #[test]
    fn unit_multiples() {
        assert_eq!(pi_label(PI), "π");
        assert_eq!(pi_label(-PI), "-π");
        assert_eq!(pi_label(PI * (1. + 1e-7)), "π");
        // Within 1e-8 + 1e-5 of 1, although beyond 1e-5 relative.
        assert_eq!(pi_label((1. + 1.0005e-5) * PI), "π");
        assert_eq!(pi_label((1. + 1.002e-5) * PI), "1.0π");
    }

    #[test]
    fn integer_multiples() {
        assert_eq!(pi_label(2. * PI), "2π");
        assert_eq!(pi_label(-3. * PI), "-3π");
        assert_eq!(pi_label(-2. * PI), "-2π");
        assert_eq!(pi_label(10. * PI), "10π");
        assert_eq!(pi_label(1e6 * PI), "1000000π");
    }

    #[test]
    fn fractional_multiples() {
        assert_eq!(pi_label(0.5 * PI), "0.5π");
        assert_eq!(pi_label(-0.5 * PI), "-0.5π");
        assert_eq!(pi_label(1.2 * PI), "1.2π");
        assert_eq!(pi_label(-1.5 * PI), "-1.5π");
        // Far enough from 2 to miss the integer branch.
        assert_eq!(pi_label(1.999 * PI), "2.0π");
    }

    #[test]
    fn accumulated_locator_steps() {
        // Ticks built by repeatedly adding π/4, as a locator would.
        let mut v = -2. * PI;
        let mut labels = vec![];
        for _ in 0 ..= 16 {
            labels.push(pi_label(v));
            v += PI / 4.;
        }
        let integers: Vec<_> = labels.iter().step_by(4).cloned().collect();
        assert_eq!(integers, ["-2π", "-π", "0", "π", "2π"]);
        assert_eq!(labels[6], "-0.5π");
        assert_eq!(labels[10], "0.5π");
        assert_eq!(labels[14], "1.5π");
    }

    #[test]
    fn non_finite() {
        assert_eq!(pi_label(f64::NAN), "nanπ");
        assert_eq!(pi_label(f64::INFINITY), "infπ");
        assert_eq!(pi_label(f64::NEG_INFINITY), "-infπ");
    }

    #[test]
    fn closeness() {
        assert!(is_close(0., 5e-9));
        assert!(!is_close(0., 1e-7));
        assert!(is_close(1000., 1000.005));
        assert!(!is_close(1., 1.001));
        assert!(is_close(1. + 1.0005e-5, 1.));
    }
}
