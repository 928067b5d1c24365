use thiserror::Error;

/// Why a plain structure could not be read as a [`ResourceState`](crate::ResourceState).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum StateError {
    #[error("resource state must be a JSON object")]
    NotAnObject,

    #[error("resource state is missing field `{field}`")]
    MissingField { field: String },

    #[error("resource state field `{field}` must be {expected}")]
    InvalidField {
        field: String,
        expected: &'static str,
    },
}
