use crate::{
    macros::{command_payload, json_command},
    objects::PtzStatus,
};
use cmdwire::{Boundary, FieldSpec, Payload, PayloadError, Required, validate_each};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetStatus {
    #[serde(rename = "ProfileToken", default)]
    pub profile_token: Required<String>,
}

impl GetStatus {
    pub fn new(profile_token: impl Into<String>) -> Self {
        Self {
            profile_token: Required::new(profile_token.into()),
        }
    }
}

impl Payload for GetStatus {
    const FIELDS: &'static [FieldSpec<Self>] = &[FieldSpec::required(
        "ProfileToken",
        |p: &Self| p.profile_token.is_present(),
    )];
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetStatusResponse {
    #[serde(rename = "PTZStatus", default)]
    pub ptz_status: Required<PtzStatus>,
}

impl GetStatusResponse {
    pub fn new(ptz_status: PtzStatus) -> Self {
        Self {
            ptz_status: Required::new(ptz_status),
        }
    }
}

impl Payload for GetStatusResponse {
    const FIELDS: &'static [FieldSpec<Self>] = &[FieldSpec::required(
        "PTZStatus",
        |p: &Self| p.ptz_status.is_present(),
    )];

    fn validate_nested(&self, boundary: Boundary) -> Result<(), PayloadError> {
        validate_each(self.ptz_status.get(), boundary)
    }
}

command_payload! {
    GetStatusRequestPayload { "GetStatus" => get_status: GetStatus }
}

command_payload! {
    GetStatusResponsePayload { "GetStatusResponse" => get_status_response: GetStatusResponse }
}

json_command! {
    /// Reads the current position, move status and device time.
    GetStatusCommand, "GetStatus", GetStatusRequestPayload => GetStatusResponsePayload
}
