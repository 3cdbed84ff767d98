use crate::error::CommandInvokerError;
use cmdwire::PayloadError;
use cmdwire_service::{CommandRequest, CommandResponse, CommandStatus};
use std::io;

/// Defines a generic capability for invoking commands.
///
/// Anything that can carry a [`CommandRequest`] to an executor and bring back
/// its [`CommandResponse`] (a broker client, a socket, or an in-process
/// loopback) implements [`send_request`](Self::send_request) and gains typed
/// invocation through [`InvokeCommand`](crate::InvokeCommand).
#[async_trait::async_trait]
pub trait CommandInvokerInterface: Send + Sync {
    // --- METHODS TO BE IMPLEMENTED BY THE STRUCT ---

    /// Identifies this client in outgoing requests.
    fn invoker_id(&self) -> &str;

    /// Delivers `request` and waits for its response.
    async fn send_request(&self, request: CommandRequest) -> Result<CommandResponse, io::Error>;

    // --- METHODS PROVIDED AUTOMATICALLY BY THE TRAIT ---

    /// Invokes `command_name` with an already-encoded payload and returns the
    /// encoded response payload.
    async fn invoke_raw(
        &self,
        command_name: &str,
        content_type: &str,
        payload: Vec<u8>,
    ) -> Result<Vec<u8>, CommandInvokerError> {
        let request = CommandRequest::new(command_name, payload)
            .with_content_type(content_type)
            .with_invoker_id(self.invoker_id());
        let correlation_id = request.correlation_id;

        let response = self.send_request(request).await?;

        if response.correlation_id != correlation_id {
            return Err(CommandInvokerError::CorrelationMismatch {
                expected: correlation_id,
                actual: response.correlation_id,
            });
        }

        let status = CommandStatus::try_from(response.status)
            .map_err(|_| CommandInvokerError::UnknownStatus(response.status))?;

        if status.is_success() {
            match response.content_type {
                Some(actual) if actual != content_type => {
                    Err(PayloadError::UnsupportedContentType(actual).into())
                }
                _ => Ok(response.payload),
            }
        } else {
            tracing::debug!(
                "Command `{}` ({}) failed remotely with {:?}",
                command_name,
                correlation_id,
                status
            );
            Err(CommandInvokerError::Remote {
                status,
                message: response.status_message,
                payload: response.payload,
            })
        }
    }
}
