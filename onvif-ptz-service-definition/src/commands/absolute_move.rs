use crate::{
    macros::{command_payload, json_command},
    objects::{PtzSpeed, PtzVector},
};
use cmdwire::{Boundary, EmptyJson, FieldSpec, Payload, PayloadError, Required, validate_each};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AbsoluteMove {
    #[serde(rename = "ProfileToken", default)]
    pub profile_token: Required<String>,

    /// Target position.
    #[serde(rename = "Position", default)]
    pub position: Required<PtzVector>,

    #[serde(rename = "Speed", default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<PtzSpeed>,
}

impl AbsoluteMove {
    pub fn new(profile_token: impl Into<String>, position: PtzVector) -> Self {
        Self {
            profile_token: Required::new(profile_token.into()),
            position: Required::new(position),
            speed: None,
        }
    }

    pub fn with_speed(mut self, speed: PtzSpeed) -> Self {
        self.speed = Some(speed);
        self
    }
}

impl Payload for AbsoluteMove {
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::required("ProfileToken", |p: &Self| p.profile_token.is_present()),
        FieldSpec::required("Position", |p: &Self| p.position.is_present()),
        FieldSpec::optional("Speed", |p: &Self| p.speed.is_some()),
    ];

    fn validate_nested(&self, boundary: Boundary) -> Result<(), PayloadError> {
        validate_each(self.position.get(), boundary)?;
        validate_each(&self.speed, boundary)
    }
}

command_payload! {
    AbsoluteMoveRequestPayload { "AbsoluteMove" => absolute_move: AbsoluteMove }
}

json_command! {
    AbsoluteMoveCommand, "AbsoluteMove", AbsoluteMoveRequestPayload => EmptyJson
}
