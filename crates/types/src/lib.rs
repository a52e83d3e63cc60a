//! Melodium Types - records and storage trait shared by all crates
//!
//! No heavy dependencies: the store and the CLI both build on these.

mod emotion;
mod models;
mod storage;

pub use emotion::{emotion_keys, Emotion, EmotionInfo, EmotionParseError, EMOTION_DICTIONARY};
pub use models::{dedup_tags, Memory, MemoryDraft, MemoryPatch};
pub use storage::{KeyValueStore, StorageError, StorageResult};
