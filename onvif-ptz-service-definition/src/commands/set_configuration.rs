use crate::{
    macros::{command_payload, json_command},
    objects::PtzConfiguration,
};
use cmdwire::{Boundary, EmptyJson, FieldSpec, Payload, PayloadError, validate_each};
use serde::{Deserialize, Serialize};

/// Both fields are optional; a request with neither serializes as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetConfiguration {
    #[serde(rename = "PTZConfiguration", default, skip_serializing_if = "Option::is_none")]
    pub ptz_configuration: Option<PtzConfiguration>,

    /// Keep the configuration across reboots.
    #[serde(rename = "ForcePersistence", default, skip_serializing_if = "Option::is_none")]
    pub force_persistence: Option<bool>,
}

impl SetConfiguration {
    pub fn new(ptz_configuration: PtzConfiguration) -> Self {
        Self {
            ptz_configuration: Some(ptz_configuration),
            force_persistence: None,
        }
    }

    pub fn with_force_persistence(mut self, force_persistence: bool) -> Self {
        self.force_persistence = Some(force_persistence);
        self
    }
}

impl Payload for SetConfiguration {
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec::optional("PTZConfiguration", |p: &Self| p.ptz_configuration.is_some()),
        FieldSpec::optional("ForcePersistence", |p: &Self| p.force_persistence.is_some()),
    ];

    fn validate_nested(&self, boundary: Boundary) -> Result<(), PayloadError> {
        validate_each(&self.ptz_configuration, boundary)
    }
}

command_payload! {
    SetConfigurationRequestPayload { "SetConfiguration" => set_configuration: SetConfiguration }
}

json_command! {
    SetConfigurationCommand, "SetConfiguration", SetConfigurationRequestPayload => EmptyJson
}
