mod boundary;
mod empty_json;
mod field_spec;
mod required;

pub use boundary::Boundary;
pub use empty_json::EmptyJson;
pub use field_spec::{FieldSpec, Requirement};
pub use required::Required;

use crate::error::PayloadError;
use serde::{Serialize, de::DeserializeOwned};

/// A data record exchanged as the request or response body of a command.
///
/// Implementors declare their fields once in [`Payload::FIELDS`]; validation
/// is derived from that table. [`validate`](Payload::validate) only looks at
/// this payload's own fields. Payloads that hold other payloads override
/// [`validate_nested`](Payload::validate_nested) so that
/// [`validate_deep`](Payload::validate_deep), which the serializers run at
/// both boundaries, reaches every level.
pub trait Payload: Serialize + DeserializeOwned + 'static {
    /// The declared fields, in wire order.
    const FIELDS: &'static [FieldSpec<Self>];

    /// Fails with [`PayloadError::RequiredFieldMissing`] naming the first
    /// required field that holds no value.
    fn validate(&self, boundary: Boundary) -> Result<(), PayloadError> {
        match Self::FIELDS.iter().find(|field| field.is_missing_from(self)) {
            Some(field) => {
                tracing::debug!(
                    "Payload `{}` is missing required field `{}` {}",
                    std::any::type_name::<Self>(),
                    field.wire_name,
                    boundary
                );
                Err(PayloadError::RequiredFieldMissing {
                    field: field.wire_name,
                    boundary,
                })
            }
            None => Ok(()),
        }
    }

    /// Validates the payloads held by this one. Leaf payloads keep the
    /// default, which checks nothing.
    ///
    /// ```rust,ignore
    /// fn validate_nested(&self, boundary: Boundary) -> Result<(), PayloadError> {
    ///     validate_each(self.position.get(), boundary)?;
    ///     validate_each(&self.speed, boundary)
    /// }
    /// ```
    fn validate_nested(&self, boundary: Boundary) -> Result<(), PayloadError> {
        let _ = boundary;
        Ok(())
    }

    /// Validates this payload, then everything nested inside it.
    fn validate_deep(&self, boundary: Boundary) -> Result<(), PayloadError> {
        self.validate(boundary)?;
        self.validate_nested(boundary)
    }

    /// Every required field that holds no value, in declared order.
    fn missing_required_fields(&self) -> Vec<&'static str> {
        Self::FIELDS
            .iter()
            .filter(|field| field.is_missing_from(self))
            .map(|field| field.wire_name)
            .collect()
    }

    /// Looks up a field declaration by its wire name.
    fn field(wire_name: &str) -> Option<&'static FieldSpec<Self>> {
        Self::FIELDS
            .iter()
            .find(|field| field.wire_name == wire_name)
    }
}

/// Runs [`Payload::validate_deep`] on every item, stopping at the first
/// failure. Accepts `Option<&P>`, `&Option<P>` and `&Vec<P>` alike.
pub fn validate_each<'a, P, I>(items: I, boundary: Boundary) -> Result<(), PayloadError>
where
    P: Payload,
    I: IntoIterator<Item = &'a P>,
{
    items
        .into_iter()
        .try_for_each(|item| item.validate_deep(boundary))
}
