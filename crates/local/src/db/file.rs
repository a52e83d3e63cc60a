use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use melodium_types::{KeyValueStore, StorageError, StorageResult};

/// 存储文件名
pub const STORAGE_FILE: &str = "storage.json";

/// 基于单个 JSON 文件的键值存储
///
/// 文件内容是一个 `{ key: value }` 对象，每次写入整体重写
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    path: PathBuf,
}

impl FileKeyValueStore {
    /// 在数据目录下打开存储（目录不存在时创建）
    pub fn open(data_dir: &Path) -> StorageResult<Self> {
        std::fs::create_dir_all(data_dir)?;
        let path = data_dir.join(STORAGE_FILE);
        tracing::debug!("Opened key-value store at: {}", path.display());
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> StorageResult<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content).map_err(|e| StorageError::Corrupt {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// 写入时读取现有条目；容器文件损坏则从空表重建
    fn entries_for_write(&self) -> StorageResult<BTreeMap<String, String>> {
        match self.read_entries() {
            Err(StorageError::Corrupt { path, reason }) => {
                tracing::warn!("Replacing corrupt storage file {}: {}", path, reason);
                Ok(BTreeMap::new())
            }
            other => other,
        }
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> StorageResult<()> {
        let content = serde_json::to_string_pretty(entries)?;

        // 先写临时文件再 rename，避免写一半留下损坏文件
        let tmp_path = self.path.with_extension("json.tmp");
        std::fs::write(&tmp_path, content)?;
        std::fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.read_entries()?.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> StorageResult<()> {
        let mut entries = self.entries_for_write()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn remove_item(&mut self, key: &str) -> StorageResult<()> {
        let mut entries = self.entries_for_write()?;
        if entries.remove(key).is_some() {
            self.write_entries(&entries)?;
        }
        Ok(())
    }
}
