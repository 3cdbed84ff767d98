mod config;
pub use config::*;

mod executor;
pub use executor::*;

mod executor_interface;
pub use executor_interface::*;

pub mod error;

mod loopback;
pub use loopback::*;

mod with_handlers_trait;
pub use with_handlers_trait::*;
