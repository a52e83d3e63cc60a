use anyhow::Result;

use crate::ui::Output;

/// 列出情绪字典（不需要打开存储）
pub fn emotions() -> Result<()> {
    Output::new().emotions();
    Ok(())
}
