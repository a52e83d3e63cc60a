use anyhow::Result;
use futures::future::join_all;

use crate::config::AppConfig;
use crate::ui::Output;
use melodium_providers::youtube::fallback_metadata;
use melodium_providers::{create_metadata_provider, VideoMetadata};

/// 查询一个或多个链接的歌曲信息（并发请求，各自独立失败）
pub async fn lookup(urls: Vec<String>, force_local: bool, force_global: bool) -> Result<()> {
    let output = Output::new();

    let config = AppConfig::load_with_scope(force_local, force_global)?;
    let provider = create_metadata_provider(&config.provider_config())?;

    output.status("Looking up", &format!("{} link(s)", urls.len()));
    eprintln!();

    let results = join_all(urls.iter().map(|url| provider.resolve_metadata(url))).await;

    for (i, (url, result)) in urls.iter().zip(results).enumerate() {
        match result {
            Some(metadata) => output.metadata(url, &metadata),
            None => output.note(&format!("not a YouTube link: {}", url)),
        }
        if i < urls.len() - 1 {
            println!();
        }
    }

    Ok(())
}

/// 用查询结果补全缺失的歌名 / 歌手，已有值不覆盖
///
/// 占位结果（查询失败）不写入，返回是否写入了内容
pub(crate) fn fill_missing(
    song_title: &mut Option<String>,
    artist_name: &mut Option<String>,
    metadata: &VideoMetadata,
) -> bool {
    if *metadata == fallback_metadata(&metadata.video_id) {
        return false;
    }

    let mut filled = false;
    if song_title.is_none() {
        *song_title = Some(metadata.title.clone());
        filled = true;
    }
    if artist_name.is_none() {
        *artist_name = Some(metadata.author.clone());
        filled = true;
    }
    filled
}
