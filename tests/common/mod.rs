//! 测试通用工具模块
//!
//! 提供测试中常用的工具函数和辅助结构。

use ahash::AHashMap;
use std::sync::OnceLock;

/// 日志安装守卫（进程内只安装一次）
static LOGGING: OnceLock<()> = OnceLock::new();

/// 初始化测试日志
///
/// 每个测试开头调用；订阅器只安装一次，由测试进程结束时释放。
pub fn init_test_logging() {
    LOGGING.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    });
}

/// 创建测试用的输入映射 {"key": "value"}
pub fn sample_input() -> AHashMap<String, String> {
    let mut input = AHashMap::new();
    input.insert("key".to_string(), "value".to_string());
    input
}

/// 创建指定条目数的输入映射
pub fn input_with_entries(count: usize) -> AHashMap<String, String> {
    let mut input = AHashMap::new();
    for i in 0..count {
        input.insert(format!("key-{}", i), format!("value-{}", i));
    }
    input
}
