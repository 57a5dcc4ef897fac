/// Rounds `value` to `precision` decimal places.
///
/// The value is scaled by `10^precision`, rounded to the nearest integer and scaled back.
/// Ties are rounded away from zero (`f64::round`), so `round_to(-0.005, 2)` is `-0.01`.
/// A negative `precision` rounds to tens, hundreds, etc. NaN and infinities pass through.
///
/// When `10^precision` overflows, underflows to zero or scales `value` past `f64::MAX`, there is
/// no representable scaled value and `value` is returned unchanged.
pub fn round_to(value: f64, precision: i32) -> f64 {
    let divisor = 10f64.powi(precision);
    let scaled = value * divisor;

    if !scaled.is_finite() || divisor == 0.0 {
        return value;
    }
    scaled.round() / divisor
}

/// Adds decimal rounding to `f64`.
pub trait RoundTo {
    fn round_to(self, precision: i32) -> Self;
}

impl RoundTo for f64 {
    fn round_to(self, precision: i32) -> f64 {
        round_to(self, precision)
    }
}

//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_places() {
        assert_eq!(round_to(3.14159, 2), 3.14);
    }

    #[test]
    fn tie_away_from_zero() {
        assert_eq!(round_to(-0.005, 2), -0.01);
        assert_eq!(round_to(0.5, 0), 1.0);
        assert_eq!(round_to(-2.5, 0), -3.0);
    }

    #[test]
    fn zero_places() {
        assert_eq!(round_to(1234.4, 0), 1234.0);
    }

    #[test]
    fn non_finite_passes_through() {
        assert!(round_to(std::f64::NAN, 3).is_nan());
        assert_eq!(round_to(std::f64::INFINITY, 3), std::f64::INFINITY);
    }

    #[test]
    fn scale_out_of_range() {
        assert_eq!(round_to(0.0, 400), 0.0);
        assert_eq!(round_to(1e300, 10), 1e300);
        assert_eq!(round_to(2.5, -400), 2.5);
        assert_eq!(round_to(-7.25, 400), -7.25);
    }

    #[test]
    fn extension_trait() {
        assert_eq!(2.71828.round_to(3), 2.718);
        assert_eq!(0.1f64.round_to(5), 0.1);
    }
}
