use anyhow::Result;

use super::Session;
use crate::ui::Output;

pub async fn delete(
    id: &str,
    force_local: bool,
    force_global: bool,
    skip_confirm: bool,
) -> Result<()> {
    let output = Output::new();

    let mut session = Session::open(force_local, force_global)?;
    output.storage_info(&session.data_path, session.store.count());

    // 显示警告信息
    output.warning(&format!("this will permanently delete memory {}", id));

    // 确认操作
    if !skip_confirm && !output.confirm("yes")? {
        output.info("Operation cancelled");
        return Ok(());
    }

    // 删除记忆（不存在的 id 不算错误）
    output.begin_operation("Deleting", &format!("memory {}", id));
    if !session.store.delete(id) {
        output.note(&format!("no memory with ID {}, nothing deleted", id));
    }

    output.finish("delete", session.scope);

    Ok(())
}
