use mivot_util::CastError;
use thiserror::Error;

/// Errors raised while building or updating MIVOT instances.
#[derive(Error, Debug)]
pub enum MivotError {
    #[error(transparent)]
    Cast(#[from] CastError),

    #[error("`{key}` has no sibling dmtype to cast with")]
    MissingDmtype { key: String },

    #[error("column `{0}` is not in the row")]
    MissingColumn(String),

    #[error("expected an object under `{key}`, found {found}")]
    UnexpectedShape { key: String, found: &'static str },

    #[error("prototype feature `{0}` is not activated")]
    FeatureNotActivated(String),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// JSON kind of `value`, for error messages.
pub(crate) fn kind_of(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
