use super::PayloadSerializer;
use crate::{
    constants::JSON_CONTENT_TYPE,
    error::PayloadError,
    payload::{Boundary, Payload},
};

/// Encodes payloads as UTF-8 JSON objects.
///
/// An empty body decodes as `{}`: [`EmptyJson`](crate::EmptyJson) accepts it,
/// and payloads with required fields report the first one as missing.
#[derive(Debug, Copy, Clone, Default)]
pub struct Utf8JsonSerializer;

impl PayloadSerializer for Utf8JsonSerializer {
    const CONTENT_TYPE: &'static str = JSON_CONTENT_TYPE;

    fn serialize<P: Payload>(payload: &P) -> Result<Vec<u8>, PayloadError> {
        payload.validate_deep(Boundary::Outbound)?;
        Ok(serde_json::to_vec(payload)?)
    }

    fn deserialize<P: Payload>(bytes: &[u8]) -> Result<P, PayloadError> {
        let body: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
            b"{}"
        } else {
            bytes
        };

        let payload: P = serde_json::from_slice(body)?;
        payload.validate_deep(Boundary::Inbound)?;
        Ok(payload)
    }
}
