use crate::macros::{command_payload, json_command};
use cmdwire::{FieldSpec, Payload, Required};
use serde::{Deserialize, Serialize};

/// Stores the current position as a preset. Without a `PresetToken` a new
/// preset is created; with one, that preset is overwritten.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetPreset {
    #[serde(rename = "ProfileToken", default)]
    pub profile_token: Required<String>,

    #[serde(rename = "PresetName", default, skip_serializing_if = "Option::is_none")]
    pub preset_name: Option<String>,

    #[serde(rename = "PresetToken", default, skip_serializing_if = "Option::is_none")]
    pub preset_token: Option<String>,
}

impl SetPreset {
    pub fn new(profile_token: impl Into<String>) -> Self {
        Self {
            profile_token: Required::new(profile_token.into()),
            ..Self::default()
        }
    }

    pub fn with_preset_name(mut self, preset_name: impl Into<String>) -> Self {
        self.preset_name = Some(preset_name.into());
        self
    }

    pub fn with_preset_token(mut self, preset_token: impl Into<String>) -> Self {
        self.preset_token = Some(preset_token.into());
        self
    }
}

impl Payload for SetPreset {
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::required("ProfileToken", |p: &Self| p.profile_token.is_present()),
        FieldSpec::optional("PresetName", |p: &Self| p.preset_name.is_some()),
        FieldSpec::optional("PresetToken", |p: &Self| p.preset_token.is_some()),
    ];
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetPresetResponse {
    #[serde(rename = "PresetToken", default)]
    pub preset_token: Required<String>,
}

impl SetPresetResponse {
    pub fn new(preset_token: impl Into<String>) -> Self {
        Self {
            preset_token: Required::new(preset_token.into()),
        }
    }
}

impl Payload for SetPresetResponse {
    const FIELDS: &'static [FieldSpec<Self>] = &[FieldSpec::required(
        "PresetToken",
        |p: &Self| p.preset_token.is_present(),
    )];
}

command_payload! {
    SetPresetRequestPayload { "SetPreset" => set_preset: SetPreset }
}

command_payload! {
    SetPresetResponsePayload { "SetPresetResponse" => set_preset_response: SetPresetResponse }
}

json_command! {
    SetPresetCommand, "SetPreset", SetPresetRequestPayload => SetPresetResponsePayload
}
