//! Error types for the ozone-filter crate.

/// Error raised while evaluating an [`Expression`](crate::Expression).
///
/// The map library treats a feature whose filter fails to evaluate as
/// filtered out; [`Expression::matches`](crate::Expression::matches) does the
/// same.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvalError {
    /// An operator received an operand of the wrong type.
    #[error("'{op}' expected {expected}, found {found}")]
    TypeMismatch {
        /// Operator name as it appears in the JSON form.
        op: &'static str,
        /// Expected operand type.
        expected: &'static str,
        /// Actual operand type.
        found: &'static str,
    },

    /// `to-number` could not convert a string.
    #[error("could not convert {value:?} to a number")]
    NotANumber {
        /// The string that failed to convert.
        value: String,
    },
}
