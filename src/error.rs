//! Copyright (c) 2026, Kirky.X
//!
//! MIT License
//!
//! 错误类型定义
//!
//! 使用thiserror定义所有错误类型。

use thiserror::Error;

/// Feature-6450 错误类型
#[derive(Error, Debug)]
pub enum FeatureError {
    /// 配置错误
    #[error("配置错误: {0}")]
    ConfigError(String),

    /// 验证错误
    #[error("验证错误: {0}")]
    ValidationError(String),

    /// 初始化错误
    #[error("初始化错误: {0}")]
    SetupError(String),

    /// 处理错误
    #[error("处理错误: {0}")]
    HandlerError(String),

    /// IO错误
    #[error("IO错误: {0}")]
    IoError(#[from] std::io::Error),

    /// 序列化错误
    #[error("序列化错误: {0}")]
    SerdeError(#[from] serde_json::Error),

    /// YAML解析错误
    #[error("YAML解析错误: {0}")]
    YamlError(#[from] serde_yaml::Error),
}
