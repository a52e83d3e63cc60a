//! Provider Traits

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// 歌曲元数据
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoMetadata {
    pub title: String,
    pub author: String,
    pub video_id: String,
}

/// 元数据 Provider Trait
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// 解析链接的歌名与歌手
    ///
    /// 链接无法识别时返回 `None`；查询失败时返回占位值，不会报错
    async fn resolve_metadata(&self, url: &str) -> Option<VideoMetadata>;
}
