use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ArrayError {
    #[error("RangeError: invalid array length {value}")]
    #[diagnostic(
        code(holey::invalid_length),
        help("an array length is an integer between 0 and 4294967295")
    )]
    InvalidLength { value: f64 },

    #[error("TypeError: {message}")]
    #[diagnostic(code(holey::type_error))]
    TypeError { message: String },

    #[error("invalid storage policy: {reason}")]
    #[diagnostic(code(holey::invalid_policy))]
    InvalidPolicy { reason: String },
}

impl ArrayError {
    pub fn type_error(message: impl Into<String>) -> Self {
        Self::TypeError {
            message: message.into(),
        }
    }
}
