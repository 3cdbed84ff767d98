use crate::{
    macros::{command_payload, json_command},
    objects::{PtzSpeed, PtzVector},
};
use cmdwire::{Boundary, EmptyJson, FieldSpec, Payload, PayloadError, Required, validate_each};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelativeMove {
    #[serde(rename = "ProfileToken", default)]
    pub profile_token: Required<String>,

    /// Offset from the current position.
    #[serde(rename = "Translation", default)]
    pub translation: Required<PtzVector>,

    #[serde(rename = "Speed", default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<PtzSpeed>,
}

impl RelativeMove {
    pub fn new(profile_token: impl Into<String>, translation: PtzVector) -> Self {
        Self {
            profile_token: Required::new(profile_token.into()),
            translation: Required::new(translation),
            speed: None,
        }
    }

    pub fn with_speed(mut self, speed: PtzSpeed) -> Self {
        self.speed = Some(speed);
        self
    }
}

impl Payload for RelativeMove {
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::required("ProfileToken", |p: &Self| p.profile_token.is_present()),
        FieldSpec::required("Translation", |p: &Self| p.translation.is_present()),
        FieldSpec::optional("Speed", |p: &Self| p.speed.is_some()),
    ];

    fn validate_nested(&self, boundary: Boundary) -> Result<(), PayloadError> {
        validate_each(self.translation.get(), boundary)?;
        validate_each(&self.speed, boundary)
    }
}

command_payload! {
    RelativeMoveRequestPayload { "RelativeMove" => relative_move: RelativeMove }
}

json_command! {
    RelativeMoveCommand, "RelativeMove", RelativeMoveRequestPayload => EmptyJson
}
