use anyhow::{Context, Result};

use super::Session;
use crate::ui::Output;

pub async fn show(id: &str, force_local: bool, force_global: bool) -> Result<()> {
    let output = Output::new();

    let session = Session::open(force_local, force_global)?;
    output.storage_info(&session.data_path, session.store.count());

    let memory = session
        .store
        .find_by_id(id)
        .with_context(|| format!("Memory not found with ID: {}", id))?;

    output.memory_detail(&memory);

    Ok(())
}
