pub mod config;
pub mod tracker;

pub use config::{Config, config_path, load_config, load_config_from, save_config, save_config_to};
pub use tracker::TrackerConfig;
