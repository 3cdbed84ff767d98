use crate::macros::{command_payload, json_command};
use cmdwire::{EmptyJson, FieldSpec, Payload, Required};
use serde::{Deserialize, Serialize};

/// Halts movement. An axis flag left unset counts as `true`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    #[serde(rename = "ProfileToken", default)]
    pub profile_token: Required<String>,

    #[serde(rename = "PanTilt", default, skip_serializing_if = "Option::is_none")]
    pub pan_tilt: Option<bool>,

    #[serde(rename = "Zoom", default, skip_serializing_if = "Option::is_none")]
    pub zoom: Option<bool>,
}

impl Stop {
    pub fn new(profile_token: impl Into<String>) -> Self {
        Self {
            profile_token: Required::new(profile_token.into()),
            pan_tilt: None,
            zoom: None,
        }
    }

    pub fn with_pan_tilt(mut self, pan_tilt: bool) -> Self {
        self.pan_tilt = Some(pan_tilt);
        self
    }

    pub fn with_zoom(mut self, zoom: bool) -> Self {
        self.zoom = Some(zoom);
        self
    }

    pub fn stops_pan_tilt(&self) -> bool {
        self.pan_tilt.unwrap_or(true)
    }

    pub fn stops_zoom(&self) -> bool {
        self.zoom.unwrap_or(true)
    }
}

impl Payload for Stop {
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::required("ProfileToken", |p: &Self| p.profile_token.is_present()),
        FieldSpec::optional("PanTilt", |p: &Self| p.pan_tilt.is_some()),
        FieldSpec::optional("Zoom", |p: &Self| p.zoom.is_some()),
    ];
}

command_payload! {
    StopRequestPayload { "Stop" => stop: Stop }
}

json_command! {
    StopCommand, "Stop", StopRequestPayload => EmptyJson
}
