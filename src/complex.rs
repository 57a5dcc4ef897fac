use std::fmt;
use std::fmt::Write;
use std::ops::Add;
use std::ops::Div;
use std::ops::Mul;
use std::ops::Neg;
use std::ops::Sub;
use crate::rounding;

/// A complex number stored in rectangular form.
///
/// Values are never mutated by the arithmetic operators, every operation returns a new
/// `ComplexNumber`. Non-finite components propagate following IEEE-754 rules, nothing is
/// validated or trapped.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ComplexNumber {
    pub real: f64,
    pub imag: f64,
}

impl ComplexNumber {
    pub const ZERO: ComplexNumber = ComplexNumber { real: 0.0, imag: 0.0 };
    pub const ONE: ComplexNumber = ComplexNumber { real: 1.0, imag: 0.0 };
    pub const I: ComplexNumber = ComplexNumber { real: 0.0, imag: 1.0 };

    pub fn new(real: f64, imag: f64) -> ComplexNumber {
        ComplexNumber { real, imag }
    }

    /// Creates a complex number from its modulus and argument (in radians).
    ///
    /// A negative `modulus` is accepted and points the opposite way, i.e. the result is the same
    /// as `from_polar(-modulus, arg + PI)`.
    pub fn from_polar(modulus: f64, arg: f64) -> ComplexNumber {
        trace!("from_polar(modulus = {}, arg = {})", modulus, arg);
        ComplexNumber::new(modulus * arg.cos(), modulus * arg.sin())
    }

    pub fn from_real<T: ToReal>(real: T) -> ComplexNumber {
        ComplexNumber::new(real.to_real(), 0.0)
    }

    pub fn from_imag<T: ToReal>(imag: T) -> ComplexNumber {
        ComplexNumber::new(0.0, imag.to_real())
    }

    /// The reflection of this number across the real axis.
    pub fn conjugate(&self) -> ComplexNumber {
        ComplexNumber::new(self.real, -self.imag)
    }

    /// The distance from the origin, `sqrt(real^2 + imag^2)`.
    pub fn modulus(&self) -> f64 {
        self.norm_sqr().sqrt()
    }

    pub fn norm_sqr(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    /// The angle from the positive real axis in radians, in the range `[-PI, PI]`.
    ///
    /// This is `imag.atan2(real)` so it is defined on the imaginary axis. The argument of zero
    /// is `0`, or `PI` / `-PI` when the real part is `-0.0`.
    pub fn arg(&self) -> f64 {
        self.imag.atan2(self.real)
    }

    /// Returns `(modulus, arg)`.
    pub fn to_polar(&self) -> (f64, f64) {
        (self.modulus(), self.arg())
    }

    pub fn negative(&self) -> ComplexNumber {
        -*self
    }

    pub fn scale(&self, k: f64) -> ComplexNumber {
        *self * k
    }

    pub fn reciprocal(&self) -> ComplexNumber {
        ComplexNumber::ONE / *self
    }

    /// Raises this number to a real power using De Moivre's theorem.
    ///
    /// Only the principal value is returned for non-integer exponents.
    pub fn power(&self, k: f64) -> ComplexNumber {
        let (r, theta) = self.to_polar();
        trace!("power: r = {}, theta = {}, k = {}", r, theta, k);
        let rk = r.powf(k);
        ComplexNumber::new(rk * (k * theta).cos(), rk * (k * theta).sin())
    }

    /// Rounds both parts to `precision` decimal places, see `rounding::round_to`.
    pub fn round_to(&self, precision: i32) -> ComplexNumber {
        ComplexNumber::new(
            rounding::round_to(self.real, precision),
            rounding::round_to(self.imag, precision),
        )
    }

    pub fn is_finite(&self) -> bool {
        self.real.is_finite() && self.imag.is_finite()
    }

    pub fn is_nan(&self) -> bool {
        self.real.is_nan() || self.imag.is_nan()
    }

    /// Renders the number as a string, the same as `to_string()`.
    pub fn display(&self) -> String {
        self.to_string()
    }
}

/// Conversion of a primitive number into the `f64` used for each part of a `ComplexNumber`.
///
/// This is an `as f64` cast. Integers wider than 53 bits are rounded to the nearest `f64`, so
/// `i64`, `u64`, `isize`, `usize`, `i128` and `u128` values beyond `2^53` lose precision.
pub trait ToReal {
    fn to_real(self) -> f64;
}

macro_rules! from_real {
    ($($t:ty)*) => {$(
        impl ToReal for $t {
            fn to_real(self) -> f64 {
                self as f64
            }
        }

        impl From<$t> for ComplexNumber {
            fn from(real: $t) -> ComplexNumber {
                ComplexNumber::from_real(real)
            }
        }
    )*};
}

from_real!(f64 f32 i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);

impl From<(f64, f64)> for ComplexNumber {
    fn from((real, imag): (f64, f64)) -> ComplexNumber {
        ComplexNumber::new(real, imag)
    }
}

//--------------------------------------------------------------------------------------------------

/// Implements an operator for borrowed operands by copying them into the by-value impl.
macro_rules! forward_ref_binop {
    (impl $imp:ident, $method:ident for $t:ty, $u:ty) => {
        impl<'a> $imp<$u> for &'a $t {
            type Output = <$t as $imp<$u>>::Output;

            fn $method(self, other: $u) -> Self::Output {
                $imp::$method(*self, other)
            }
        }

        impl<'a> $imp<&'a $u> for $t {
            type Output = <$t as $imp<$u>>::Output;

            fn $method(self, other: &'a $u) -> Self::Output {
                $imp::$method(self, *other)
            }
        }

        impl<'a, 'b> $imp<&'a $u> for &'b $t {
            type Output = <$t as $imp<$u>>::Output;

            fn $method(self, other: &'a $u) -> Self::Output {
                $imp::$method(*self, *other)
            }
        }
    };
}

impl Add for ComplexNumber {
    type Output = ComplexNumber;

    fn add(self, other: ComplexNumber) -> ComplexNumber {
        ComplexNumber::new(self.real + other.real, self.imag + other.imag)
    }
}

// subtraction and negation go through scalar multiplication by -1 so that `x - y` is
// bit-for-bit the same as `x + y * -1.0`
impl Sub for ComplexNumber {
    type Output = ComplexNumber;

    fn sub(self, other: ComplexNumber) -> ComplexNumber {
        self + other * -1.0
    }
}

impl Neg for ComplexNumber {
    type Output = ComplexNumber;

    fn neg(self) -> ComplexNumber {
        self * -1.0
    }
}

impl<'a> Neg for &'a ComplexNumber {
    type Output = ComplexNumber;

    fn neg(self) -> ComplexNumber {
        -*self
    }
}

impl Mul for ComplexNumber {
    type Output = ComplexNumber;

    fn mul(self, other: ComplexNumber) -> ComplexNumber {
        let (a, b) = (self.real, self.imag);
        let (c, d) = (other.real, other.imag);
        ComplexNumber::new(a * c - b * d, a * d + b * c)
    }
}

impl Mul<f64> for ComplexNumber {
    type Output = ComplexNumber;

    fn mul(self, k: f64) -> ComplexNumber {
        ComplexNumber::new(self.real * k, self.imag * k)
    }
}

impl Mul<ComplexNumber> for f64 {
    type Output = ComplexNumber;

    fn mul(self, other: ComplexNumber) -> ComplexNumber {
        other * self
    }
}

impl Div for ComplexNumber {
    type Output = ComplexNumber;

    fn div(self, other: ComplexNumber) -> ComplexNumber {
        let (a, b) = (self.real, self.imag);
        let (c, d) = (other.real, other.imag);
        ComplexNumber::new(a * c + b * d, b * c - a * d) / (c * c + d * d)
    }
}

// division by a scalar multiplies by the reciprocal, dividing by zero gives infinite or NaN parts
impl Div<f64> for ComplexNumber {
    type Output = ComplexNumber;

    fn div(self, k: f64) -> ComplexNumber {
        if k == 0.0 {
            debug!("dividing {:?} by zero, result will not be finite", self);
        }
        self * (1.0 / k)
    }
}

forward_ref_binop!(impl Add, add for ComplexNumber, ComplexNumber);
forward_ref_binop!(impl Sub, sub for ComplexNumber, ComplexNumber);
forward_ref_binop!(impl Mul, mul for ComplexNumber, ComplexNumber);
forward_ref_binop!(impl Mul, mul for ComplexNumber, f64);
forward_ref_binop!(impl Div, div for ComplexNumber, ComplexNumber);
forward_ref_binop!(impl Div, div for ComplexNumber, f64);

//--------------------------------------------------------------------------------------------------

fn format_part(value: f64, precision: Option<usize>) -> String {
    match precision {
        Some(precision) => format!("{:.*}", precision, value),
        None => value.to_string(),
    }
}

// `Formatter::pad` would truncate to the precision, so width, fill and alignment are applied here
fn pad(f: &mut fmt::Formatter, rendered: &str) -> fmt::Result {
    let len = rendered.chars().count();
    let padding = match f.width() {
        Some(width) if width > len => width - len,
        _ => return f.write_str(rendered),
    };
    let (before, after) = match f.align() {
        Some(fmt::Alignment::Right) => (padding, 0),
        Some(fmt::Alignment::Center) => (padding / 2, padding - padding / 2),
        _ => (0, padding),
    };
    let fill = f.fill();

    for _ in 0..before {
        f.write_char(fill)?;
    }
    f.write_str(rendered)?;

    for _ in 0..after {
        f.write_char(fill)?;
    }
    Ok(())
}

/// Renders `<imag>i` when the real part is zero, `<real>` when the imaginary part is zero and
/// `<real> +/- <|imag|>i` otherwise. A precision in the format string applies to both parts,
/// width, fill and alignment apply to the whole number (left aligned by default).
impl fmt::Display for ComplexNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let precision = f.precision();
        let rendered = if self.real == 0.0 {
            format!("{}i", format_part(self.imag, precision))
        } else if self.imag == 0.0 {
            format_part(self.real, precision)
        } else {
            format!("{} {} {}i",
                    format_part(self.real, precision),
                    if self.imag < 0.0 { "-" } else { "+" },
                    format_part(self.imag.abs(), precision))
        };
        pad(f, &rendered)
    }
}

//--------------------------------------------------------------------------------------------------
