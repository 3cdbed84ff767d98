use cmdwire::PayloadError;
use cmdwire_service::CommandStatus;
use std::io;
use thiserror::Error;

/// Errors that can occur during a command invocation, from the caller's side.
#[derive(Debug, Error)]
pub enum CommandInvokerError {
    /// A transport-level or I/O error occurred while sending or awaiting the call.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The request could not be encoded, or the response could not be decoded.
    /// Outbound failures happen before anything is sent.
    #[error("payload error: {0}")]
    Payload(#[from] PayloadError),

    /// The executor answered with a non-success status.
    #[error("remote executor returned {status:?}: {}", .message.as_deref().unwrap_or("no message"))]
    Remote {
        status: CommandStatus,
        message: Option<String>,
        /// Application error payload, if the handler supplied one.
        payload: Vec<u8>,
    },

    #[error("remote executor returned unknown status code {0}")]
    UnknownStatus(u16),

    #[error("response correlation id {actual} does not match request {expected}")]
    CorrelationMismatch { expected: u32, actual: u32 },
}

impl CommandInvokerError {
    /// The remote status, if the executor produced one.
    pub fn status(&self) -> Option<CommandStatus> {
        match self {
            CommandInvokerError::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}
