//! 中文数字与阿拉伯数字互转引擎
//!
//! 双向转换：`An2Cn` 把数值渲染为中文（小写/大写/人民币/直读），
//! `Cn2An` 把中文数字解析为数值（严格/普通/智能三档），
//! `Transform` 在整句文本里按跨度转换并处理日期、分数、百分比等记法。

#![warn(rust_2018_idioms)]

pub mod an2cn;
pub mod cn2an;
pub mod config;
pub mod error;
pub mod grammar;
pub mod normalize;
pub mod tables;
pub mod transform;

// Re-export key types
pub use an2cn::{An2Cn, NumberInput, RenderMode};
pub use cn2an::{Cn2An, ParseMode};
pub use config::Cn2anConfig;
pub use error::{Cn2anError, Cn2anResult};
pub use transform::{Direction, Transform};

/// 初始化日志系统
///
/// 生产模式: 静默运行
/// 调试模式 (--features debug-logs): 按 CN2AN_LOG 环境变量过滤
///
/// 注意: 此函数可以安全地多次调用
pub fn init_logging() {
    #[cfg(feature = "debug-logs")]
    {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = EnvFilter::try_from_env("CN2AN_LOG")
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        // 使用 try_init() 代替 init()，避免重复初始化时 panic
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(false))
            .with(filter)
            .try_init();
    }

    #[cfg(not(feature = "debug-logs"))]
    {
        // 生产模式: 不启用日志
        // 如需日志，请使用 --features debug-logs 编译
    }
}
