pub mod add;
pub mod clear;
pub mod delete;
pub mod emotions;
pub mod init;
pub mod list;
pub mod lookup;
pub mod show;
pub mod update;

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::config::AppConfig;
use melodium_local::{FileKeyValueStore, MemoryStore};

/// 打开当前作用域下的记忆存储
pub(crate) struct Session {
    pub config: AppConfig,
    pub scope: &'static str,
    pub data_path: PathBuf,
    pub store: MemoryStore<FileKeyValueStore>,
}

impl Session {
    pub fn open(force_local: bool, force_global: bool) -> Result<Self> {
        let config = AppConfig::load_with_scope(force_local, force_global)?;
        let scope = AppConfig::get_scope_name(force_local, force_global);
        config.ensure_dirs()?;

        let data_path = config.get_data_path();
        let backend = FileKeyValueStore::open(&data_path).with_context(|| {
            format!("Failed to open storage at: {}", data_path.display())
        })?;

        Ok(Self {
            config,
            scope,
            data_path,
            store: MemoryStore::new(backend),
        })
    }
}
