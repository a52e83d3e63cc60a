use std::collections::HashMap;

use melodium_types::{KeyValueStore, StorageError, StorageResult};

/// 内存键值存储，主要用于测试
#[derive(Debug, Default, Clone)]
pub struct InMemoryKeyValueStore {
    entries: HashMap<String, String>,
    fail_writes: bool,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 模拟配额已满 / 存储被禁用：之后的写入全部失败
    pub fn with_failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    fn check_writable(&self) -> StorageResult<()> {
        if self.fail_writes {
            return Err(StorageError::Unavailable("quota exceeded".to_string()));
        }
        Ok(())
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.check_writable()?;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> StorageResult<()> {
        self.check_writable()?;
        self.entries.remove(key);
        Ok(())
    }
}
