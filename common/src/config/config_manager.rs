use std::path::PathBuf;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use super::{ConfigSerializer, ConfigStore, FileConfigStore, Validate, YamlConfigSerializer};

/// Loads a validated config once and serves cached copies afterwards.
/// A store with no content yields `TConfig::default()`.
pub struct ConfigManager<TConfig, TStore = FileConfigStore, TSerializer = YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TStore: ConfigStore,
    TSerializer: ConfigSerializer<TConfig>,
{
    store: TStore,
    serializer: TSerializer,
    cached: Mutex<Option<TConfig>>,
}

impl<TConfig> ConfigManager<TConfig, FileConfigStore, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(path: impl Into<PathBuf>) -> Self {
        Self::new(FileConfigStore::new(path), YamlConfigSerializer)
    }
}

impl<TConfig, TStore, TSerializer> ConfigManager<TConfig, TStore, TSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TStore: ConfigStore,
    TSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(store: TStore, serializer: TSerializer) -> Self {
        Self {
            store,
            serializer,
            cached: Mutex::new(None),
        }
    }

    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut cached = self
            .cached
            .lock()
            .map_err(|_| "Config cache lock poisoned".to_string())?;

        if let Some(config) = cached.as_ref() {
            return Ok(config.clone());
        }

        let Some(content) = self.store.load()? else {
            return Ok(TConfig::default());
        };

        let config = self.serializer.deserialize(&content)?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *cached = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let content = self.serializer.serialize(config)?;
        self.store.store(&content)?;

        let mut cached = self
            .cached
            .lock()
            .map_err(|_| "Config cache lock poisoned".to_string())?;
        *cached = Some(config.clone());
        Ok(())
    }
}
