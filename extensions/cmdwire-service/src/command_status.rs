use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Outcome of a command execution, carried in every [`CommandResponse`](crate::CommandResponse).
///
/// Codes follow HTTP semantics.
#[repr(u16)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, TryFromPrimitive, IntoPrimitive)]
pub enum CommandStatus {
    Ok = 200,
    /// The request payload was malformed or missed a required field.
    BadRequest = 400,
    /// No handler is registered under the requested command name.
    NotFound = 404,
    RequestTimeout = 408,
    PayloadTooLarge = 413,
    UnsupportedMediaType = 415,
    /// The handler rejected the request with an application error.
    UnprocessableContent = 422,
    /// The handler failed, or produced a response that failed validation.
    InternalServerError = 500,
}

impl CommandStatus {
    #[inline]
    pub fn code(self) -> u16 {
        self.into()
    }

    #[inline]
    pub fn is_success(self) -> bool {
        self == CommandStatus::Ok
    }
}
