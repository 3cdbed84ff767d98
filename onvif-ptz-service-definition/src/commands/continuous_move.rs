use crate::{
    macros::{command_payload, json_command},
    objects::PtzSpeed,
};
use cmdwire::{Boundary, EmptyJson, FieldSpec, Payload, PayloadError, Required, validate_each};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContinuousMove {
    #[serde(rename = "ProfileToken", default)]
    pub profile_token: Required<String>,

    #[serde(rename = "Velocity", default)]
    pub velocity: Required<PtzSpeed>,

    /// An `xs:duration` after which the movement stops on its own.
    #[serde(rename = "Timeout", default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,
}

impl ContinuousMove {
    pub fn new(profile_token: impl Into<String>, velocity: PtzSpeed) -> Self {
        Self {
            profile_token: Required::new(profile_token.into()),
            velocity: Required::new(velocity),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: impl Into<String>) -> Self {
        self.timeout = Some(timeout.into());
        self
    }
}

impl Payload for ContinuousMove {
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::required("ProfileToken", |p: &Self| p.profile_token.is_present()),
        FieldSpec::required("Velocity", |p: &Self| p.velocity.is_present()),
        FieldSpec::optional("Timeout", |p: &Self| p.timeout.is_some()),
    ];

    fn validate_nested(&self, boundary: Boundary) -> Result<(), PayloadError> {
        validate_each(self.velocity.get(), boundary)
    }
}

command_payload! {
    ContinuousMoveRequestPayload { "ContinuousMove" => continuous_move: ContinuousMove }
}

json_command! {
    ContinuousMoveCommand, "ContinuousMove", ContinuousMoveRequestPayload => EmptyJson
}
