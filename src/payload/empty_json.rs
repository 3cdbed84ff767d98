use super::{FieldSpec, Payload};
use serde::{Deserialize, Serialize};

/// The payload of a command that carries no data.
///
/// Serializes as `{}`; deserializes from `{}`, from any object (unknown keys
/// are ignored) and, through [`Utf8JsonSerializer`](crate::Utf8JsonSerializer),
/// from an empty body.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct EmptyJson {}

impl Payload for EmptyJson {
    const FIELDS: &'static [FieldSpec<Self>] = &[];
}
