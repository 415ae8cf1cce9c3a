mod loader;
mod model;

pub use loader::{DEFAULT_CONFIG_NAME, config_template, load_config, save_config};
pub use model::Config;
