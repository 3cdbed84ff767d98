use crate::macros::{command_payload, json_command};
use cmdwire::{EmptyJson, FieldSpec, Payload, Required};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemovePreset {
    #[serde(rename = "ProfileToken", default)]
    pub profile_token: Required<String>,

    #[serde(rename = "PresetToken", default)]
    pub preset_token: Required<String>,
}

impl RemovePreset {
    pub fn new(profile_token: impl Into<String>, preset_token: impl Into<String>) -> Self {
        Self {
            profile_token: Required::new(profile_token.into()),
            preset_token: Required::new(preset_token.into()),
        }
    }
}

impl Payload for RemovePreset {
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::required("ProfileToken", |p: &Self| p.profile_token.is_present()),
        FieldSpec::required("PresetToken", |p: &Self| p.preset_token.is_present()),
    ];
}

command_payload! {
    RemovePresetRequestPayload { "RemovePreset" => remove_preset: RemovePreset }
}

json_command! {
    RemovePresetCommand, "RemovePreset", RemovePresetRequestPayload => EmptyJson
}
