use std::io::ErrorKind;
use std::path::PathBuf;

/// Raw storage for a config document. `Ok(None)` from `load` means nothing is stored yet.
pub trait ConfigStore {
    fn load(&self) -> Result<Option<String>, String>;
    fn store(&self, content: &str) -> Result<(), String>;
}

pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Result<Option<String>, String> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(format!(
                "Failed to read config file {}: {}",
                self.path.display(),
                err
            )),
        }
    }

    fn store(&self, content: &str) -> Result<(), String> {
        std::fs::write(&self.path, content).map_err(|e| {
            format!("Failed to write config file {}: {}", self.path.display(), e)
        })
    }
}
