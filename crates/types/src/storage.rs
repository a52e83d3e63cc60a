use thiserror::Error;

/// 存储层错误
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Corrupt storage file {path}: {reason}")]
    Corrupt { path: String, reason: String },

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// 同步键值存储的统一接口（对应浏览器 localStorage）
///
/// 任何存储实现（文件、内存）都应该实现这个 trait
pub trait KeyValueStore {
    /// 读取 key 对应的值，不存在时返回 `None`
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;

    /// 写入 key，覆盖原值
    fn set_item(&mut self, key: &str, value: &str) -> StorageResult<()>;

    /// 删除 key，不存在时不报错
    fn remove_item(&mut self, key: &str) -> StorageResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> StorageResult<()> {
        (**self).remove_item(key)
    }
}
