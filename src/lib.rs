//! A complex number value type with rectangular and polar construction, arithmetic operators,
//! De Moivre powers and a human readable `Display`.
//!
//! ```
//! use complex_number::ComplexNumber;
//!
//! let z = ComplexNumber::new(1.0, 1.0) * ComplexNumber::new(2.0, -3.0);
//! assert_eq!(z.to_string(), "5 - 1i");
//! ```
#[macro_use]
extern crate log;
#[cfg(test)]
extern crate env_logger;
#[cfg(test)]
#[macro_use]
extern crate float_cmp;
#[cfg(test)]
extern crate threadpool;

mod complex;
mod operand;
mod rounding;

pub use complex::ComplexNumber;
pub use complex::ToReal;
pub use operand::Operand;
pub use rounding::round_to;
pub use rounding::RoundTo;
