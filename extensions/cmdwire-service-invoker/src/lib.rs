mod invoker_interface;
pub use invoker_interface::*;

mod invoke_command;
pub use invoke_command::*;

pub mod error;
