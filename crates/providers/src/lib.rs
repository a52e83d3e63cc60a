mod config;
mod traits;
pub mod youtube;

pub use config::{ProviderConfig, DEFAULT_OEMBED_ENDPOINT};
pub use traits::{MetadataProvider, VideoMetadata};

/// 创建元数据 Provider
pub fn create_metadata_provider(
    config: &ProviderConfig,
) -> anyhow::Result<Box<dyn MetadataProvider>> {
    Ok(Box::new(youtube::OEmbedClient::new(config)?))
}
