mod absolute_move;
pub use absolute_move::*;

mod continuous_move;
pub use continuous_move::*;

mod get_configuration;
pub use get_configuration::*;

mod get_presets;
pub use get_presets::*;

mod get_status;
pub use get_status::*;

mod goto_home_position;
pub use goto_home_position::*;

mod goto_preset;
pub use goto_preset::*;

mod relative_move;
pub use relative_move::*;

mod remove_preset;
pub use remove_preset::*;

mod set_configuration;
pub use set_configuration::*;

mod set_preset;
pub use set_preset::*;

mod stop;
pub use stop::*;
