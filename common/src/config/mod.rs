mod config_manager;
mod config_serializer;
mod config_store;
mod game_config;
mod validate;

pub use config_manager::ConfigManager;
pub use config_serializer::{ConfigSerializer, YamlConfigSerializer};
pub use config_store::{ConfigStore, FileConfigStore};
pub use game_config::{DEFAULT_COMPUTER_DELAY_MS, GameConfig};
pub use validate::Validate;
