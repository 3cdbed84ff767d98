use crate::command_id_hash;
use cmdwire::{Payload, PayloadError, PayloadSerializer};

/// Binds a command name to its request and response payload types.
///
/// One zero-sized type implements this per command of an interface. Executors
/// use it to decode requests and encode responses for a handler; invokers use
/// it to do the reverse. All four codec methods route through
/// [`CommandBinding::Serializer`], so required fields are checked on every
/// crossing.
///
/// ```rust
/// use cmdwire::{EmptyJson, Utf8JsonSerializer};
/// use cmdwire_service::CommandBinding;
///
/// pub struct Reboot;
///
/// impl CommandBinding for Reboot {
///     const COMMAND_NAME: &'static str = "Reboot";
///     type Request = EmptyJson;
///     type Response = EmptyJson;
///     type Serializer = Utf8JsonSerializer;
/// }
///
/// assert_eq!(Reboot::COMMAND_ID, cmdwire_service::command_id!("Reboot"));
/// ```
pub trait CommandBinding {
    /// The command name, unique within its interface.
    const COMMAND_NAME: &'static str;

    /// Routing key derived from [`Self::COMMAND_NAME`].
    const COMMAND_ID: u64 = command_id_hash(Self::COMMAND_NAME);

    type Request: Payload + Send + Sync;

    type Response: Payload + Send + Sync;

    type Serializer: PayloadSerializer;

    fn encode_request(request: &Self::Request) -> Result<Vec<u8>, PayloadError> {
        Self::Serializer::serialize(request)
    }

    fn decode_request(bytes: &[u8]) -> Result<Self::Request, PayloadError> {
        Self::Serializer::deserialize(bytes)
    }

    fn encode_response(response: &Self::Response) -> Result<Vec<u8>, PayloadError> {
        Self::Serializer::serialize(response)
    }

    fn decode_response(bytes: &[u8]) -> Result<Self::Response, PayloadError> {
        Self::Serializer::deserialize(bytes)
    }
}
