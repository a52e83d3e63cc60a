use anyhow::Result;

use crate::config::{AppConfig, CONFIG_FILE};
use crate::ui::Output;

/// 显式初始化（带用户反馈）
/// local: true 表示在本地目录初始化，false 表示在全局目录初始化
pub async fn initialize(local: bool) -> Result<()> {
    let output = Output::new();
    let config_dir = AppConfig::get_dir(local);
    let config_path = config_dir.join(CONFIG_FILE);
    let scope = if local { "local" } else { "global" };

    // 如果配置文件已存在，提示用户
    if config_path.exists() {
        output.resource_action("Found", "config", &config_path);
    } else {
        let path = AppConfig::default().save_to(&config_dir)?;
        output.resource_action("Creating", "config", &path);
    }

    // 加载配置并确保数据目录存在
    let config = AppConfig::load_from_dir(&config_dir, local)?;
    config.ensure_dirs()?;
    output.resource_action("Using", "storage", &config.get_data_path());

    output.finish("initialization", scope);

    Ok(())
}
