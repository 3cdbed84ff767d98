use crate::{
    macros::{command_payload, json_command},
    objects::PtzSpeed,
};
use cmdwire::{Boundary, EmptyJson, FieldSpec, Payload, PayloadError, Required, validate_each};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GotoHomePosition {
    #[serde(rename = "ProfileToken", default)]
    pub profile_token: Required<String>,

    #[serde(rename = "Speed", default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<PtzSpeed>,
}

impl GotoHomePosition {
    pub fn new(profile_token: impl Into<String>) -> Self {
        Self {
            profile_token: Required::new(profile_token.into()),
            speed: None,
        }
    }

    pub fn with_speed(mut self, speed: PtzSpeed) -> Self {
        self.speed = Some(speed);
        self
    }
}

impl Payload for GotoHomePosition {
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::required("ProfileToken", |p: &Self| p.profile_token.is_present()),
        FieldSpec::optional("Speed", |p: &Self| p.speed.is_some()),
    ];

    fn validate_nested(&self, boundary: Boundary) -> Result<(), PayloadError> {
        validate_each(&self.speed, boundary)
    }
}

command_payload! {
    GotoHomePositionRequestPayload { "GotoHomePosition" => goto_home_position: GotoHomePosition }
}

json_command! {
    GotoHomePositionCommand, "GotoHomePosition", GotoHomePositionRequestPayload => EmptyJson
}
