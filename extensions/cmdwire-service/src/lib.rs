mod command_binding;
pub use command_binding::*;
mod command_descriptor;
pub use command_descriptor::*;
mod command_request_response;
pub use command_request_response::*;
mod command_status;
pub use command_status::*;
mod macros;
pub use macros::*;
