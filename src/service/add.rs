use anyhow::{Context, Result};
use console::Term;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;

use super::lookup::fill_missing;
use super::Session;
use crate::ui::Output;
use melodium_providers::create_metadata_provider;
use melodium_providers::youtube::{extract_video_id, watch_url};
use melodium_types::{dedup_tags, Emotion, MemoryDraft, EMOTION_DICTIONARY};

pub struct AddOptions {
    pub url: String,
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

pub async fn add(options: AddOptions) -> Result<()> {
    let output = Output::new();

    let mut session = Session::open(options.force_local, options.force_global)?;
    output.storage_info(&session.data_path, session.store.count());

    let url = options.url.trim().to_string();
    let video_id = extract_video_id(&url)
        .with_context(|| format!("Not a recognized YouTube URL: {}", url))?;

    let emotion = match options.emotion {
        Some(emotion) => emotion,
        None => pick_emotion()?,
    };

    let mut draft = build_draft(
        url,
        emotion,
        options.sub_emotions,
        options.tags,
        options.note,
        options.song,
        options.artist,
    );

    let wants_lookup = options.lookup || session.config.auto_lookup;
    if wants_lookup && (draft.song_title.is_none() || draft.artist_name.is_none()) {
        output.status("Looking up", &watch_url(&video_id));
        let provider = create_metadata_provider(&session.config.provider_config())?;

        if let Some(metadata) = provider.resolve_metadata(&draft.youtube_url).await {
            if !fill_missing(&mut draft.song_title, &mut draft.artist_name, &metadata) {
                output.note("song details unavailable, saving without them");
            }
        }
    }

    output.status("Creating", "memory");
    let memory = session.store.create(draft);
    eprintln!();

    output.memory_detail(&memory);
    output.finish("add", session.scope);

    Ok(())
}

/// 交互式选择情绪（非终端环境下要求通过 --emotion 指定）
fn pick_emotion() -> Result<Emotion> {
    if !Term::stderr().is_term() {
        anyhow::bail!("Missing --emotion (one of: {})", emotion_list());
    }

    let labels: Vec<&str> = EMOTION_DICTIONARY.iter().map(|info| info.label).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("How does this song make you feel?")
        .items(&labels)
        .default(0)
        .interact_opt()?
        .context("No emotion selected")?;

    Ok(EMOTION_DICTIONARY[selection].emotion)
}

fn emotion_list() -> String {
    melodium_types::emotion_keys().join(", ")
}

/// 由命令行参数构建草稿：去掉首尾空白，空字符串视为未提供
pub(crate) fn build_draft(
    url: String,
    emotion: Emotion,
    sub_emotions: Option<Vec<String>>,
    tags: Option<Vec<String>>,
    note: Option<String>,
    song: Option<String>,
    artist: Option<String>,
) -> MemoryDraft {
    let mut draft = MemoryDraft::new(url, emotion);
    draft.sub_emotions = dedup_tags(sub_emotions.unwrap_or_default());
    for tag in tags.unwrap_or_default() {
        draft.add_tag(tag);
    }
    draft.note = non_empty(note);
    draft.song_title = non_empty(song);
    draft.artist_name = non_empty(artist);
    draft
}

pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_draft_cleans_input() {
        let draft = build_draft(
            "https://youtu.be/abc123".to_string(),
            Emotion::Joyful,
            Some(vec!["hopeful".into(), "hopeful".into()]),
            Some(vec!["summer".into(), " summer ".into(), "beach".into()]),
            Some("  ".into()),
            Some(" Holocene ".into()),
            None,
        );

        assert_eq!(draft.youtube_url, "https://youtu.be/abc123");
        assert_eq!(draft.emotion, Emotion::Joyful);
        assert_eq!(draft.sub_emotions, vec!["hopeful"]);
        assert_eq!(draft.tags, vec!["summer", "beach"]);
        assert_eq!(draft.note, None);
        assert_eq!(draft.song_title.as_deref(), Some("Holocene"));
        assert_eq!(draft.artist_name, None);
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some(" ".into())), None);
        assert_eq!(non_empty(Some(" x ".into())).as_deref(), Some("x"));
    }
}
