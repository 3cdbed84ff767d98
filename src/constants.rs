/// Content type produced and accepted by [`Utf8JsonSerializer`](crate::Utf8JsonSerializer).
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// The default upper bound, in bytes, on a single command payload.
///
/// Executors reject larger request bodies before attempting to decode them.
pub const DEFAULT_MAX_PAYLOAD_SIZE: usize = 1024 * 256;
