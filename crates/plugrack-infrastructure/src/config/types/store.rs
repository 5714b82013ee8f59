//! Definition store configuration types

use crate::constants::DEFAULT_DATA_DIR;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Definition store backends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreBackend {
    /// Volatile, lost on exit
    Memory,
    /// One JSON document per provider kind under `data_dir`
    #[default]
    JsonFile,
}

/// Definition store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Backend to use
    pub backend: StoreBackend,
    /// Directory holding JSON stores
    pub data_dir: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}

impl StoreConfig {
    /// In-memory store, for tests
    pub fn memory() -> Self {
        Self {
            backend: StoreBackend::Memory,
            ..Default::default()
        }
    }

    /// JSON file store under `data_dir`
    pub fn json_file(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            backend: StoreBackend::JsonFile,
            data_dir: data_dir.into(),
        }
    }
}
