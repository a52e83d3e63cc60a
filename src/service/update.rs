use anyhow::{Context, Result};

use super::add::non_empty;
use super::lookup::fill_missing;
use super::Session;
use crate::ui::Output;
use melodium_providers::create_metadata_provider;
use melodium_providers::youtube::{extract_video_id, watch_url};
use melodium_types::{dedup_tags, Emotion, MemoryPatch};

pub struct UpdateOptions {
    pub id: String,
    pub url: Option<String>,
    pub emotion: Option<Emotion>,
    pub sub_emotions: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub note: Option<String>,
    pub song: Option<String>,
    pub artist: Option<String>,
    pub lookup: bool,
    pub force_local: bool,
    pub force_global: bool,
}

pub async fn update(options: UpdateOptions) -> Result<()> {
    let output = Output::new();

    let mut session = Session::open(options.force_local, options.force_global)?;
    output.storage_info(&session.data_path, session.store.count());

    let id = options.id.clone();
    let lookup = options.lookup;
    let mut patch = build_patch(options);

    if let Some(url) = &patch.youtube_url {
        if extract_video_id(url).is_none() {
            anyhow::bail!("Not a recognized YouTube URL: {}", url);
        }
    }

    // 查找要更新的记忆
    output.status("Finding", &format!("memory {}", id));
    let existing = session
        .store
        .find_by_id(&id)
        .with_context(|| format!("Memory not found with ID: {}", id))?;

    if lookup {
        let url = patch
            .youtube_url
            .clone()
            .unwrap_or_else(|| existing.youtube_url.clone());

        if let Some(video_id) = extract_video_id(&url) {
            output.status("Looking up", &watch_url(&video_id));
            let provider = create_metadata_provider(&session.config.provider_config())?;
            if let Some(metadata) = provider.resolve_metadata(&url).await {
                let mut song = patch.song_title.clone().flatten();
                let mut artist = patch.artist_name.clone().flatten();
                if fill_missing(&mut song, &mut artist, &metadata) {
                    patch.song_title = Some(song);
                    patch.artist_name = Some(artist);
                } else {
                    output.note("song details unavailable, keeping current ones");
                }
            }
        }
    }

    if patch.is_empty() {
        anyhow::bail!("Nothing to update, pass at least one field to change");
    }

    output.status("Updating", &format!("memory {}", id));
    let memory = session
        .store
        .update(&id, patch)
        .with_context(|| format!("Memory not found with ID: {}", id))?;
    eprintln!();

    output.memory_detail(&memory);
    output.finish("update", session.scope);

    Ok(())
}

/// 由命令行参数构建补丁：未提供的字段保持原值，传空串清空可选字段
fn build_patch(options: UpdateOptions) -> MemoryPatch {
    MemoryPatch {
        youtube_url: non_empty(options.url),
        emotion: options.emotion,
        song_title: clearable(options.song),
        artist_name: clearable(options.artist),
        sub_emotions: options.sub_emotions.map(dedup_tags),
        note: clearable(options.note),
        tags: options.tags.map(dedup_tags),
    }
}

fn clearable(value: Option<String>) -> Option<Option<String>> {
    value.map(|v| non_empty(Some(v)))
}
