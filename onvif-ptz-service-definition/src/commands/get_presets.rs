use crate::{
    macros::{command_payload, json_command},
    objects::Preset,
};
use cmdwire::{Boundary, FieldSpec, Payload, PayloadError, Required, validate_each};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetPresets {
    #[serde(rename = "ProfileToken", default)]
    pub profile_token: Required<String>,
}

impl GetPresets {
    pub fn new(profile_token: impl Into<String>) -> Self {
        Self {
            profile_token: Required::new(profile_token.into()),
        }
    }
}

impl Payload for GetPresets {
    const FIELDS: &'static [FieldSpec<Self>] = &[FieldSpec::required(
        "ProfileToken",
        |p: &Self| p.profile_token.is_present(),
    )];
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetPresetsResponse {
    /// Absent when the profile has no presets.
    #[serde(rename = "Preset", default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<Vec<Preset>>,
}

impl GetPresetsResponse {
    pub fn new(presets: Vec<Preset>) -> Self {
        Self {
            preset: (!presets.is_empty()).then_some(presets),
        }
    }

    pub fn presets(&self) -> &[Preset] {
        self.preset.as_deref().unwrap_or_default()
    }
}

impl Payload for GetPresetsResponse {
    const FIELDS: &'static [FieldSpec<Self>] =
        &[FieldSpec::optional("Preset", |p: &Self| p.preset.is_some())];

    fn validate_nested(&self, boundary: Boundary) -> Result<(), PayloadError> {
        validate_each(self.preset.iter().flatten(), boundary)
    }
}

command_payload! {
    GetPresetsRequestPayload { "GetPresets" => get_presets: GetPresets }
}

command_payload! {
    GetPresetsResponsePayload { "GetPresetsResponse" => get_presets_response: GetPresetsResponse }
}

json_command! {
    GetPresetsCommand, "GetPresets", GetPresetsRequestPayload => GetPresetsResponsePayload
}
