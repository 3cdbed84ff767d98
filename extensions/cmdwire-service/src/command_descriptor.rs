use crate::{CommandBinding, command_id_hash};
use cmdwire::PayloadSerializer;
use std::any::type_name;

/// Static description of a registered command.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct CommandDescriptor {
    pub command_name: &'static str,
    pub command_id: u64,
    pub request_type: &'static str,
    pub response_type: &'static str,
    pub content_type: &'static str,
}

impl CommandDescriptor {
    pub fn of<B: CommandBinding>() -> Self {
        Self {
            command_name: B::COMMAND_NAME,
            command_id: B::COMMAND_ID,
            request_type: type_name::<B::Request>(),
            response_type: type_name::<B::Response>(),
            content_type: <B::Serializer as PayloadSerializer>::CONTENT_TYPE,
        }
    }

    /// Describes a command whose handler works on undecoded bytes.
    pub fn raw(command_name: &'static str, content_type: &'static str) -> Self {
        Self {
            command_name,
            command_id: command_id_hash(command_name),
            request_type: "bytes",
            response_type: "bytes",
            content_type,
        }
    }
}
