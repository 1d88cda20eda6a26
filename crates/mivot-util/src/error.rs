use thiserror::Error;

/// Failure to convert a raw cell into the type declared by a `dmtype`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CastError {
    #[error("cannot cast {value} to {dmtype}: not a number")]
    InvalidNumber { value: String, dmtype: String },

    #[error("cannot cast {value} to {dmtype}: not an integer")]
    InvalidInteger { value: String, dmtype: String },
}
