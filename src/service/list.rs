use anyhow::{Context, Result};

use super::Session;
use crate::ui::Output;
use melodium_types::{Emotion, Memory};

pub async fn list(
    emotion: Option<Emotion>,
    tag: Option<String>,
    json: bool,
    force_local: bool,
    force_global: bool,
) -> Result<()> {
    let output = Output::new();

    let session = Session::open(force_local, force_global)?;
    let memories = session.store.load();

    // 显示存储信息
    output.storage_info(&session.data_path, memories.len());

    let total = memories.len();
    let results = filter_memories(memories, emotion, tag.as_deref());

    if json {
        let content = serde_json::to_string_pretty(&results)
            .context("Failed to serialize memories")?;
        println!("{}", content);
        return Ok(());
    }

    if total == 0 {
        output.info("No memories found. Use 'melodium add' to create one!");
        return Ok(());
    }

    if results.is_empty() {
        output.info("No memories match the given filters.");
        return Ok(());
    }

    output.memory_list(&results);

    Ok(())
}

/// 按情绪 / 标签过滤，保持原有顺序（最新的在前）
pub(crate) fn filter_memories(
    memories: Vec<Memory>,
    emotion: Option<Emotion>,
    tag: Option<&str>,
) -> Vec<Memory> {
    memories
        .into_iter()
        .filter(|m| emotion.map_or(true, |e| m.emotion == e))
        .filter(|m| tag.map_or(true, |t| m.has_tag(t)))
        .collect()
}
