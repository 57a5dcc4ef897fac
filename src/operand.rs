use crate::complex::ComplexNumber;

/// The right-hand side of a multiplication or division, either another complex number or a
/// real scalar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    Complex(ComplexNumber),
    Scalar(f64),
}

impl From<ComplexNumber> for Operand {
    fn from(c: ComplexNumber) -> Operand {
        Operand::Complex(c)
    }
}

impl From<f64> for Operand {
    fn from(k: f64) -> Operand {
        Operand::Scalar(k)
    }
}

impl From<f32> for Operand {
    fn from(k: f32) -> Operand {
        Operand::Scalar(k.into())
    }
}

impl From<i32> for Operand {
    fn from(k: i32) -> Operand {
        Operand::Scalar(k.into())
    }
}

impl ComplexNumber {
    /// Multiplies by a complex number or a scalar, choosing the rule from the operand.
    pub fn multiply<T: Into<Operand>>(&self, rhs: T) -> ComplexNumber {
        match rhs.into() {
            Operand::Complex(c) => *self * c,
            Operand::Scalar(k) => *self * k,
        }
    }

    /// Divides by a complex number or a scalar. Scalar division multiplies by `1 / k`.
    pub fn divide<T: Into<Operand>>(&self, rhs: T) -> ComplexNumber {
        match rhs.into() {
            Operand::Complex(c) => *self / c,
            Operand::Scalar(k) => *self / k,
        }
    }
}

//--------------------------------------------------------------------------------------------------
