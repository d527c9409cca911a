//! Errors raised while building or operating on scalars.

use thiserror::Error;

/// Errors that can occur when constructing or operating on a [`crate::Scalar`].
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ScalarError {
    /// The text is not a decimal number.
    #[error("cannot parse {input:?} as a decimal number")]
    Parse {
        /// The rejected input.
        input: String,
    },

    /// NaN or an infinity was offered as a coordinate or constant.
    #[error("non-finite value {0} cannot be represented exactly")]
    NonFinite(f64),

    /// Division by a value within tolerance of zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Square root of a negative value.
    #[error("square root of negative value {0}")]
    NegativeSqrt(String),
}
