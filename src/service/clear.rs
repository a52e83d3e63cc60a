use anyhow::Result;

use super::Session;
use crate::ui::Output;

/// 清空所有记忆（高危操作）
pub async fn clear(local: bool, global: bool, skip_confirm: bool) -> Result<()> {
    let output = Output::new();

    let mut session = Session::open(local, global)?;
    let memory_count = session.store.count();

    // 显示存储信息
    output.storage_info(&session.data_path, memory_count);

    if memory_count == 0 {
        output.info("Storage is empty, nothing to clear.");
        return Ok(());
    }

    // 显示警告信息
    output.warning("this will delete all memories");
    output.info(&format!(
        "{} storage: {}",
        session.scope,
        session.data_path.display()
    ));
    output.info(&format!("{} memories will be deleted", memory_count));

    // 确认操作
    if !skip_confirm && !output.confirm("yes")? {
        output.info("Operation cancelled");
        return Ok(());
    }

    output.begin_operation("Clearing", "memories");
    session.store.clear();

    output.finish("clearing", session.scope);

    Ok(())
}
