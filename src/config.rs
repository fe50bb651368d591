//! 配置模块
//!
//! 统一的配置管理，从 ~/.config/cn2an/config.toml 加载

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::an2cn::RenderMode;
use crate::cn2an::ParseMode;

/// 转换器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cn2anConfig {
    /// 中文转阿拉伯的解析模式
    pub parse_mode: ParseMode,
    /// 阿拉伯转中文的渲染模式
    pub render_mode: RenderMode,
}

impl Default for Cn2anConfig {
    fn default() -> Self {
        Self {
            parse_mode: ParseMode::Smart,
            render_mode: RenderMode::Low,
        }
    }
}

impl Cn2anConfig {
    /// 加载配置文件
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            tracing::info!("配置文件不存在，使用默认配置: {:?}", config_path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = toml::from_str(&content)?;

        tracing::info!("加载配置成功: {:?}", config_path);
        tracing::info!(
            "解析模式={}, 渲染模式={}",
            config.parse_mode,
            config.render_mode
        );
        Ok(config)
    }

    /// 保存配置文件
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;

        tracing::info!("保存配置成功: {:?}", config_path);
        Ok(())
    }

    /// 获取配置文件路径
    fn config_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
        let config_dir = dirs::config_dir().ok_or("无法获取配置目录")?;

        Ok(config_dir.join("cn2an").join("config.toml"))
    }
}
