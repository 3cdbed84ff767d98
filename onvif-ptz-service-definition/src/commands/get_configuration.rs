use crate::{
    macros::{command_payload, json_command},
    objects::PtzConfiguration,
};
use cmdwire::{Boundary, FieldSpec, Payload, PayloadError, Required, validate_each};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetConfiguration {
    #[serde(rename = "PTZConfigurationToken", default)]
    pub ptz_configuration_token: Required<String>,
}

impl GetConfiguration {
    pub fn new(ptz_configuration_token: impl Into<String>) -> Self {
        Self {
            ptz_configuration_token: Required::new(ptz_configuration_token.into()),
        }
    }
}

impl Payload for GetConfiguration {
    const FIELDS: &'static [FieldSpec<Self>] = &[FieldSpec::required(
        "PTZConfigurationToken",
        |p: &Self| p.ptz_configuration_token.is_present(),
    )];
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetConfigurationResponse {
    #[serde(rename = "PTZConfiguration", default)]
    pub ptz_configuration: Required<PtzConfiguration>,
}

impl GetConfigurationResponse {
    pub fn new(ptz_configuration: PtzConfiguration) -> Self {
        Self {
            ptz_configuration: Required::new(ptz_configuration),
        }
    }
}

impl Payload for GetConfigurationResponse {
    const FIELDS: &'static [FieldSpec<Self>] = &[FieldSpec::required(
        "PTZConfiguration",
        |p: &Self| p.ptz_configuration.is_present(),
    )];

    fn validate_nested(&self, boundary: Boundary) -> Result<(), PayloadError> {
        validate_each(self.ptz_configuration.get(), boundary)
    }
}

command_payload! {
    GetConfigurationRequestPayload { "GetConfiguration" => get_configuration: GetConfiguration }
}

command_payload! {
    GetConfigurationResponsePayload {
        "GetConfigurationResponse" => get_configuration_response: GetConfigurationResponse
    }
}

json_command! {
    GetConfigurationCommand,
    "GetConfiguration",
    GetConfigurationRequestPayload => GetConfigurationResponsePayload
}
