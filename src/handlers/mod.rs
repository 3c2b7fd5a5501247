// Handlers module

pub mod access;
pub mod providers;
pub mod user_config;

pub use access::can_change_keys_handler;
pub use providers::list_providers_handler;
pub use user_config::{get_user_config_handler, save_user_config_handler};
