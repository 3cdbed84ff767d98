use crate::payload::Boundary;
use thiserror::Error;

/// Errors raised while validating, encoding or decoding a payload.
#[derive(Debug, Error)]
pub enum PayloadError {
    /// A required field held no value at a wire boundary.
    #[error("required field `{field}` is missing {boundary}")]
    RequiredFieldMissing {
        field: &'static str,
        boundary: Boundary,
    },

    /// The body was not valid JSON for the target payload type.
    #[error("JSON payload error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported content type `{0}`")]
    UnsupportedContentType(String),
}

impl PayloadError {
    /// The wire name of the missing field, if this is a requiredness failure.
    pub fn missing_field(&self) -> Option<&'static str> {
        match self {
            PayloadError::RequiredFieldMissing { field, .. } => Some(field),
            _ => None,
        }
    }

    pub fn boundary(&self) -> Option<Boundary> {
        match self {
            PayloadError::RequiredFieldMissing { boundary, .. } => Some(*boundary),
            _ => None,
        }
    }
}
