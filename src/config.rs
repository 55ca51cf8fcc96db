use std::{fmt::Debug, fs, path::Path};

use serde::Deserialize;

use crate::{
    error::{ConfigError, QueueError},
    queue::BoundedQueue,
};

pub const DEFAULT_CAPACITY: usize = 16;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct QueueConfig {
    pub capacity: usize,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl QueueConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::NotPositive("capacity"));
        }

        Ok(())
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;

        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        Self::from_toml_str(&read_config(path)?)
    }

    pub fn build<T>(&self, default_value: T) -> Result<BoundedQueue<T>, QueueError>
    where
        T: Clone + Debug,
    {
        BoundedQueue::new(self.capacity, default_value)
    }
}

pub fn read_config(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })
}
