use cmdwire::PayloadError;
use cmdwire_service::CommandStatus;
use std::time::Duration;
use thiserror::Error;

/// The error type returned by command handlers.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum CommandExecutorError {
    #[error("a handler for command `{command_name}` is already registered (as `{existing}`)")]
    DuplicateCommand {
        command_name: String,
        existing: &'static str,
    },
}

/// A domain-level rejection raised by a handler.
///
/// Returned to the invoker with [`CommandStatus::UnprocessableContent`] and
/// `payload` as the response body. Any other handler error is reported as
/// [`CommandStatus::InternalServerError`] with an empty body.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ApplicationError {
    pub message: String,
    pub payload: Vec<u8>,
}

impl ApplicationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            payload: Vec::new(),
        }
    }

    pub fn with_payload(mut self, payload: Vec<u8>) -> Self {
        self.payload = payload;
        self
    }
}

/// Why a single command execution did not produce a response payload.
#[derive(Debug, Error)]
pub enum CommandFailure {
    #[error("invalid request payload: {0}")]
    InvalidRequest(PayloadError),

    #[error("invalid response payload: {0}")]
    InvalidResponse(PayloadError),

    #[error("{0}")]
    Application(ApplicationError),

    #[error("handler failed: {0}")]
    Handler(HandlerError),

    #[error("execution exceeded {0:?}")]
    TimedOut(Duration),
}

impl CommandFailure {
    /// Classifies an error returned by a typed handler.
    ///
    /// A [`PayloadError`] raised by the handler itself (e.g. from validating a
    /// nested object) counts as an invalid request.
    pub fn from_handler_error(err: HandlerError) -> Self {
        let err = match err.downcast::<ApplicationError>() {
            Ok(application_error) => return CommandFailure::Application(*application_error),
            Err(err) => err,
        };
        match err.downcast::<PayloadError>() {
            Ok(payload_error) => CommandFailure::InvalidRequest(*payload_error),
            Err(err) => CommandFailure::Handler(err),
        }
    }

    pub fn status(&self) -> CommandStatus {
        match self {
            CommandFailure::InvalidRequest(_) => CommandStatus::BadRequest,
            CommandFailure::InvalidResponse(_) => CommandStatus::InternalServerError,
            CommandFailure::Application(_) => CommandStatus::UnprocessableContent,
            CommandFailure::Handler(_) => CommandStatus::InternalServerError,
            CommandFailure::TimedOut(_) => CommandStatus::RequestTimeout,
        }
    }
}
