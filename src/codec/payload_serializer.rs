use crate::{error::PayloadError, payload::Payload};

/// The capability to turn payloads into wire bytes and back.
///
/// Implementations must run [`Payload::validate_deep`] on both paths:
/// outbound before encoding, inbound after decoding.
pub trait PayloadSerializer: Send + Sync + 'static {
    /// The content type written alongside encoded payloads.
    const CONTENT_TYPE: &'static str;

    fn serialize<P: Payload>(payload: &P) -> Result<Vec<u8>, PayloadError>;

    fn deserialize<P: Payload>(bytes: &[u8]) -> Result<P, PayloadError>;

    /// Whether a message declaring `content_type` can be decoded. A message
    /// without a content type is accepted.
    fn accepts(content_type: Option<&str>) -> bool {
        content_type.is_none_or(|content_type| content_type == Self::CONTENT_TYPE)
    }
}
