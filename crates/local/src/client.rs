use chrono::Utc;

use melodium_types::{KeyValueStore, Memory, MemoryDraft, MemoryPatch};

use crate::id::generate_id;

/// 记忆列表存放的固定 key
pub const STORAGE_KEY: &str = "melodium_memories";

/// 记忆存储
///
/// 整个列表序列化后存放在一个 key 下。每个公开操作都从底层存储重新读取，
/// 修改后整体写回，不在内存中缓存列表。
///
/// 所有存储错误都在这里被吸收：记录日志，读取降级为空列表，写入降级为 no-op。
pub struct MemoryStore<S: KeyValueStore> {
    backend: S,
}

impl<S: KeyValueStore> MemoryStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn into_backend(self) -> S {
        self.backend
    }

    /// 读取全部记忆（最新的在前）
    pub fn load(&self) -> Vec<Memory> {
        let raw = match self.backend.get_item(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::error!("Failed to load memories: {}", e);
                return Vec::new();
            }
        };

        let entries = match serde_json::from_str::<Vec<serde_json::Value>>(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::error!("Failed to parse stored memories: {}", e);
                return Vec::new();
            }
        };

        // 单条记录损坏时跳过，其余记录照常读取
        entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match serde_json::from_value::<Memory>(entry) {
                Ok(memory) => Some(memory),
                Err(e) => {
                    tracing::warn!("Skipping unreadable memory at index {}: {}", index, e);
                    None
                }
            })
            .collect()
    }

    /// 整体写回，失败只记录日志
    pub fn save(&mut self, memories: &[Memory]) {
        let raw = match serde_json::to_string(memories) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::error!("Failed to serialize memories: {}", e);
                return;
            }
        };

        if let Err(e) = self.backend.set_item(STORAGE_KEY, &raw) {
            tracing::error!("Failed to save memories: {}", e);
        }
    }

    /// 创建记忆：分配 id 与创建时间，插入到列表头部
    ///
    /// 不做校验，校验由调用方负责
    pub fn create(&mut self, draft: MemoryDraft) -> Memory {
        let now = Utc::now();
        let memory = Memory::from_draft(generate_id(now), now, draft);

        let mut memories = self.load();
        memories.insert(0, memory.clone());
        self.save(&memories);

        tracing::debug!("Created memory {} ({} total)", memory.id, memories.len());
        memory
    }

    /// 按 id 浅合并更新，找不到时返回 `None`
    pub fn update(&mut self, id: &str, patch: MemoryPatch) -> Option<Memory> {
        let mut memories = self.load();
        let memory = memories.iter_mut().find(|m| m.id == id)?;
        memory.apply(patch);
        let updated = memory.clone();

        self.save(&memories);
        tracing::debug!("Updated memory {}", id);
        Some(updated)
    }

    /// 按 id 删除，id 不存在时不是错误
    ///
    /// 返回是否真的删除了记录
    pub fn delete(&mut self, id: &str) -> bool {
        let memories = self.load();
        let before = memories.len();
        let filtered: Vec<Memory> = memories.into_iter().filter(|m| m.id != id).collect();
        let removed = filtered.len() != before;

        self.save(&filtered);
        if removed {
            tracing::debug!("Deleted memory {}", id);
        }
        removed
    }

    pub fn find_by_id(&self, id: &str) -> Option<Memory> {
        self.load().into_iter().find(|m| m.id == id)
    }

    pub fn count(&self) -> usize {
        self.load().len()
    }

    /// 清空所有记忆
    pub fn clear(&mut self) {
        if let Err(e) = self.backend.remove_item(STORAGE_KEY) {
            tracing::error!("Failed to clear memories: {}", e);
        }
    }
}
