use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::emotion::Emotion;

/// 核心记忆数据结构：一段回忆 + 一首歌
///
/// 字段以 camelCase 序列化，存储格式与浏览器版本保持一致
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Memory {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub youtube_url: String,
    pub emotion: Emotion,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub song_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist_name: Option<String>,
    #[serde(default)]
    pub sub_emotions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// 创建记忆时由调用方提供的数据（不含 id / createdAt）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryDraft {
    pub youtube_url: String,
    pub emotion: Emotion,
    #[serde(default)]
    pub song_title: Option<String>,
    #[serde(default)]
    pub artist_name: Option<String>,
    #[serde(default)]
    pub sub_emotions: Vec<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl MemoryDraft {
    pub fn new(youtube_url: impl Into<String>, emotion: Emotion) -> Self {
        Self {
            youtube_url: youtube_url.into(),
            emotion,
            song_title: None,
            artist_name: None,
            sub_emotions: Vec::new(),
            note: None,
            tags: Vec::new(),
        }
    }

    /// 追加标签，重复的忽略
    pub fn add_tag(&mut self, tag: impl Into<String>) {
        push_unique(&mut self.tags, tag.into());
    }
}

/// 部分更新：`None` 保留原值，`Some` 覆盖
///
/// 可选字段为 `Option<Option<_>>`，`Some(None)` 表示清空。
/// id 与 created_at 不在其中，因此不可修改
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryPatch {
    pub youtube_url: Option<String>,
    pub emotion: Option<Emotion>,
    pub song_title: Option<Option<String>>,
    pub artist_name: Option<Option<String>>,
    pub sub_emotions: Option<Vec<String>>,
    pub note: Option<Option<String>>,
    pub tags: Option<Vec<String>>,
}

impl MemoryPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Memory {
    /// 由草稿构建记忆，标签去重
    pub fn from_draft(id: String, created_at: DateTime<Utc>, draft: MemoryDraft) -> Self {
        Self {
            id,
            created_at,
            youtube_url: draft.youtube_url,
            emotion: draft.emotion,
            song_title: draft.song_title,
            artist_name: draft.artist_name,
            sub_emotions: draft.sub_emotions,
            note: draft.note,
            tags: dedup_tags(draft.tags),
        }
    }

    /// 浅合并：补丁中给出的字段覆盖原值
    pub fn apply(&mut self, patch: MemoryPatch) {
        if let Some(url) = patch.youtube_url {
            self.youtube_url = url;
        }
        if let Some(emotion) = patch.emotion {
            self.emotion = emotion;
        }
        if let Some(title) = patch.song_title {
            self.song_title = title;
        }
        if let Some(artist) = patch.artist_name {
            self.artist_name = artist;
        }
        if let Some(subs) = patch.sub_emotions {
            self.sub_emotions = subs;
        }
        if let Some(note) = patch.note {
            self.note = note;
        }
        if let Some(tags) = patch.tags {
            self.tags = dedup_tags(tags);
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// 保持插入顺序去重
pub fn dedup_tags(tags: Vec<String>) -> Vec<String> {
    let mut out = Vec::with_capacity(tags.len());
    for tag in tags {
        push_unique(&mut out, tag);
    }
    out
}

fn push_unique(tags: &mut Vec<String>, tag: String) {
    let tag = tag.trim();
    if !tag.is_empty() && !tags.iter().any(|t| t == tag) {
        tags.push(tag.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Memory {
        let mut draft = MemoryDraft::new("https://youtu.be/abc123", Emotion::Joyful);
        draft.tags = vec!["summer".into(), "road trip".into(), "summer".into()];
        Memory::from_draft("id1".into(), Utc::now(), draft)
    }

    #[test]
    fn test_from_draft_dedups_tags() {
        let memory = sample();
        assert_eq!(memory.tags, vec!["summer", "road trip"]);
        assert!(memory.has_tag("road trip"));
    }

    #[test]
    fn test_add_tag_ignores_duplicates_and_blanks() {
        let mut draft = MemoryDraft::new("u", Emotion::Sad);
        draft.add_tag("rain");
        draft.add_tag(" rain ");
        draft.add_tag("  ");
        draft.add_tag("night");
        assert_eq!(draft.tags, vec!["rain", "night"]);
    }

    #[test]
    fn test_apply_patch_is_shallow_merge() {
        let mut memory = sample();
        let original = memory.clone();

        memory.apply(MemoryPatch {
            emotion: Some(Emotion::Nostalgic),
            song_title: Some(Some("Holocene".into())),
            ..Default::default()
        });

        assert_eq!(memory.id, original.id);
        assert_eq!(memory.created_at, original.created_at);
        assert_eq!(memory.youtube_url, original.youtube_url);
        assert_eq!(memory.emotion, Emotion::Nostalgic);
        assert_eq!(memory.song_title.as_deref(), Some("Holocene"));
        assert_eq!(memory.tags, original.tags);
    }

    #[test]
    fn test_apply_patch_clears_optional_fields() {
        let mut memory = sample();
        memory.note = Some("first listen".into());
        memory.artist_name = Some("Bon Iver".into());

        memory.apply(MemoryPatch {
            note: Some(None),
            ..Default::default()
        });

        assert_eq!(memory.note, None);
        assert_eq!(memory.artist_name.as_deref(), Some("Bon Iver"));
    }

    #[test]
    fn test_serialized_shape_is_camel_case() {
        let memory = sample();
        let value = serde_json::to_value(&memory).unwrap();
        assert_eq!(value["youtubeUrl"], "https://youtu.be/abc123");
        assert_eq!(value["emotion"], "joyful");
        assert!(value.get("createdAt").is_some());
        assert!(value.get("songTitle").is_none());

        let back: Memory = serde_json::from_value(value).unwrap();
        assert_eq!(back, memory);
    }

    #[test]
    fn test_empty_patch() {
        assert!(MemoryPatch::default().is_empty());
        let patch = MemoryPatch {
            note: Some(None),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }
}
