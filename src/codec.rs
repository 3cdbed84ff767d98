mod payload_serializer;
mod utf8_json_serializer;

pub use payload_serializer::PayloadSerializer;
pub use utf8_json_serializer::Utf8JsonSerializer;
