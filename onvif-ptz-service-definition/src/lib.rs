//! The ONVIF PTZ interface (`dtmi:onvif:ptz;1`) as cmdwire payloads and
//! command bindings.
//!
//! Each command has a request object wrapped under its own name
//! (`{"GetStatus": {...}}`), a response payload, and a zero-sized binding
//! type (`GetStatusCommand`) usable with both the invoker and the executor.

mod macros;

pub mod commands;
pub mod dispatch;
pub mod objects;

pub use commands::*;
pub use dispatch::{PtzCommand, PtzService, UnknownPtzCommand, register_ptz_service};

/// The DTDL interface these bindings implement.
pub const INTERFACE_ID: &str = "dtmi:onvif:ptz;1";
