use crate::{CommandBinding, CommandStatus};
use cmdwire::{PayloadError, PayloadSerializer, utils::increment_u32_id};

/// An inbound or outbound command invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandRequest {
    pub command_name: String,

    /// Echoed back in the matching [`CommandResponse`].
    pub correlation_id: u32,

    /// Identifies the calling client, for logging.
    pub invoker_id: Option<String>,

    /// When present, must match the content type of the bound serializer.
    pub content_type: Option<String>,

    pub payload: Vec<u8>,
}

impl CommandRequest {
    /// Creates a request with a fresh correlation id.
    pub fn new(command_name: impl Into<String>, payload: Vec<u8>) -> Self {
        Self {
            command_name: command_name.into(),
            correlation_id: increment_u32_id(),
            invoker_id: None,
            content_type: None,
            payload,
        }
    }

    /// Encodes `request` for binding `B`, validating its required fields.
    pub fn for_binding<B: CommandBinding>(request: &B::Request) -> Result<Self, PayloadError> {
        let payload = B::encode_request(request)?;
        Ok(Self::new(B::COMMAND_NAME, payload)
            .with_content_type(<B::Serializer as PayloadSerializer>::CONTENT_TYPE))
    }

    pub fn with_invoker_id(mut self, invoker_id: impl Into<String>) -> Self {
        self.invoker_id = Some(invoker_id.into());
        self
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn with_correlation_id(mut self, correlation_id: u32) -> Self {
        self.correlation_id = correlation_id;
        self
    }
}

/// The executor's reply to a [`CommandRequest`].
#[derive(Debug, Clone, PartialEq)]
pub struct CommandResponse {
    pub command_name: String,
    pub correlation_id: u32,

    /// A [`CommandStatus`] code. Kept raw so that unknown codes from newer
    /// peers survive until the caller interprets them.
    pub status: u16,

    pub status_message: Option<String>,
    pub content_type: Option<String>,

    /// The encoded response payload on success; an application error payload
    /// (possibly empty) otherwise.
    pub payload: Vec<u8>,
}

impl CommandResponse {
    pub fn success(
        command_name: impl Into<String>,
        correlation_id: u32,
        content_type: &str,
        payload: Vec<u8>,
    ) -> Self {
        Self {
            command_name: command_name.into(),
            correlation_id,
            status: CommandStatus::Ok.code(),
            status_message: None,
            content_type: Some(content_type.to_owned()),
            payload,
        }
    }

    pub fn failure(
        command_name: impl Into<String>,
        correlation_id: u32,
        status: CommandStatus,
        status_message: impl Into<String>,
    ) -> Self {
        Self {
            command_name: command_name.into(),
            correlation_id,
            status: status.code(),
            status_message: Some(status_message.into()),
            content_type: None,
            payload: Vec::new(),
        }
    }

    pub fn with_payload(mut self, payload: Vec<u8>) -> Self {
        self.payload = payload;
        self
    }

    /// The interpreted status, or `None` for a code this build does not know.
    pub fn command_status(&self) -> Option<CommandStatus> {
        CommandStatus::try_from(self.status).ok()
    }

    pub fn is_success(&self) -> bool {
        self.command_status().is_some_and(CommandStatus::is_success)
    }
}
