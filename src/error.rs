//! Errors of the checked rational operations.
//!
//! The operators on [crate::Rational] never fail. Only the `checked_*` variants report errors.

use core::fmt;
use thiserror::Error;

/// The rational operation that failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Sub,
    Mul,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::Add => "addition",
            Operation::Sub => "subtraction",
            Operation::Mul => "multiplication",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// An intermediate product or the final sum didn't fit into the integer type.
    #[error("integer overflow in rational {op}")]
    Overflow { op: Operation },
}
