use std::time::Duration;

/// 公开的 oEmbed 元数据接口
pub const DEFAULT_OEMBED_ENDPOINT: &str = "https://www.youtube.com/oembed";

/// Provider 配置
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub endpoint: String,
    pub timeout: Duration,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_OEMBED_ENDPOINT.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}
