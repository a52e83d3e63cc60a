use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// 情绪分类（封闭枚举，序列化为小写 key）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Joyful,
    Sad,
    Nostalgic,
    Peaceful,
    Energetic,
    Romantic,
    Reflective,
    Excited,
}

/// 情绪的展示描述
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmotionInfo {
    pub emotion: Emotion,
    pub key: &'static str,
    pub label: &'static str,
    /// 卡片背景样式
    pub background: &'static str,
    /// 强调色样式
    pub accent: &'static str,
}

/// 情绪字典，顺序即展示顺序
pub static EMOTION_DICTIONARY: [EmotionInfo; 8] = [
    EmotionInfo {
        emotion: Emotion::Joyful,
        key: "joyful",
        label: "Joyful",
        background: "bg-gradient-to-br from-yellow-100 via-orange-50 to-amber-100",
        accent: "bg-yellow-500 text-white",
    },
    EmotionInfo {
        emotion: Emotion::Sad,
        key: "sad",
        label: "Sad",
        background: "bg-gradient-to-br from-blue-100 via-slate-50 to-indigo-100",
        accent: "bg-blue-500 text-white",
    },
    EmotionInfo {
        emotion: Emotion::Nostalgic,
        key: "nostalgic",
        label: "Nostalgic",
        background: "bg-gradient-to-br from-purple-100 via-violet-50 to-indigo-100",
        accent: "bg-purple-500 text-white",
    },
    EmotionInfo {
        emotion: Emotion::Peaceful,
        key: "peaceful",
        label: "Peaceful",
        background: "bg-gradient-to-br from-teal-100 via-emerald-50 to-green-100",
        accent: "bg-teal-500 text-white",
    },
    EmotionInfo {
        emotion: Emotion::Energetic,
        key: "energetic",
        label: "Energetic",
        background: "bg-gradient-to-br from-orange-100 via-red-50 to-pink-100",
        accent: "bg-orange-500 text-white",
    },
    EmotionInfo {
        emotion: Emotion::Romantic,
        key: "romantic",
        label: "Romantic",
        background: "bg-gradient-to-br from-pink-100 via-rose-50 to-red-100",
        accent: "bg-pink-500 text-white",
    },
    EmotionInfo {
        emotion: Emotion::Reflective,
        key: "reflective",
        label: "Reflective",
        background: "bg-gradient-to-br from-gray-100 via-slate-50 to-stone-100",
        accent: "bg-gray-500 text-white",
    },
    EmotionInfo {
        emotion: Emotion::Excited,
        key: "excited",
        label: "Excited",
        background: "bg-gradient-to-br from-red-100 via-orange-50 to-yellow-100",
        accent: "bg-red-500 text-white",
    },
];

impl Emotion {
    /// 所有情绪（与字典顺序一致）
    pub fn all() -> impl Iterator<Item = Emotion> {
        EMOTION_DICTIONARY.iter().map(|info| info.emotion)
    }

    pub fn info(self) -> &'static EmotionInfo {
        // 字典按枚举声明顺序排列
        &EMOTION_DICTIONARY[self as usize]
    }

    pub fn key(self) -> &'static str {
        self.info().key
    }

    pub fn label(self) -> &'static str {
        self.info().label
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown emotion '{0}', expected one of: {keys}", keys = emotion_keys().join(", "))]
pub struct EmotionParseError(pub String);

impl FromStr for Emotion {
    type Err = EmotionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        EMOTION_DICTIONARY
            .iter()
            .find(|info| info.key == key)
            .map(|info| info.emotion)
            .ok_or_else(|| EmotionParseError(s.to_string()))
    }
}

/// 字典中全部情绪 key
pub fn emotion_keys() -> Vec<&'static str> {
    EMOTION_DICTIONARY.iter().map(|info| info.key).collect()
}
