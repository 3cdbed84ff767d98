use std::fmt;

/// Whether a payload field must be present at the wire boundary.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Requirement {
    Required,
    Optional,
}

/// One row of a payload's field table: the declared wire name, its
/// requirement, and an accessor reporting whether the field currently holds a
/// value.
///
/// Tables are declared as associated constants, e.g.
///
/// ```rust
/// use cmdwire::{FieldSpec, Payload, Required};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct RemovePreset {
///     #[serde(rename = "PresetToken", default)]
///     preset_token: Required<String>,
///     #[serde(rename = "Comment", default, skip_serializing_if = "Option::is_none")]
///     comment: Option<String>,
/// }
///
/// impl Payload for RemovePreset {
///     const FIELDS: &'static [FieldSpec<Self>] = &[
///         FieldSpec::required("PresetToken", |p: &Self| p.preset_token.is_present()),
///         FieldSpec::optional("Comment", |p: &Self| p.comment.is_some()),
///     ];
/// }
/// ```
pub struct FieldSpec<P> {
    /// The case-sensitive JSON property name.
    pub wire_name: &'static str,
    pub requirement: Requirement,
    pub is_present: fn(&P) -> bool,
}

impl<P> FieldSpec<P> {
    pub const fn required(wire_name: &'static str, is_present: fn(&P) -> bool) -> Self {
        Self {
            wire_name,
            requirement: Requirement::Required,
            is_present,
        }
    }

    pub const fn optional(wire_name: &'static str, is_present: fn(&P) -> bool) -> Self {
        Self {
            wire_name,
            requirement: Requirement::Optional,
            is_present,
        }
    }

    #[inline]
    pub fn is_required(&self) -> bool {
        self.requirement == Requirement::Required
    }

    /// Returns `true` if this field is required and `payload` does not hold it.
    #[inline]
    pub fn is_missing_from(&self, payload: &P) -> bool {
        self.is_required() && !(self.is_present)(payload)
    }
}

// Manual impls: deriving would needlessly bound `P`.
impl<P> Clone for FieldSpec<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for FieldSpec<P> {}

impl<P> fmt::Debug for FieldSpec<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSpec")
            .field("wire_name", &self.wire_name)
            .field("requirement", &self.requirement)
            .finish()
    }
}
