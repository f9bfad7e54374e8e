//! 配置模块
//!
//! 定义 feature-6450 的配置结构。

use crate::constants::{
    DEFAULT_CONFIG_VERSION, DEFAULT_MAX_INPUT_ENTRIES, DEFAULT_MAX_KEY_LENGTH,
    DEFAULT_MAX_VALUE_LENGTH, FEATURE_NAME, MAX_INPUT_ENTRIES,
};
use crate::error::FeatureError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Feature 配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureConfig {
    pub version: String,
    pub name: String,
    pub enabled: bool,
    pub input_limits: InputLimits,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            version: DEFAULT_CONFIG_VERSION.to_string(),
            name: FEATURE_NAME.to_string(),
            enabled: true,
            input_limits: InputLimits::default(),
        }
    }
}

impl FeatureConfig {
    /// 校验配置
    pub fn validate(&self) -> Result<(), String> {
        // 校验版本
        if self.version.is_empty() {
            return Err("版本号不能为空".to_string());
        }

        // 校验名称
        if self.name.is_empty() {
            return Err("名称不能为空".to_string());
        }

        // 校验输入限制
        self.input_limits.validate()?;

        Ok(())
    }

    /// 计算配置哈希值
    pub fn compute_hash(&self) -> String {
        let config_str = serde_json::to_string(self).unwrap_or_default();
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        let mut hasher = DefaultHasher::new();
        config_str.hash(&mut hasher);
        format!("{:x}", hasher.finish())
    }

    /// 比较配置是否相同（基于哈希值）
    pub fn is_same_as(&self, other: &FeatureConfig) -> bool {
        self.compute_hash() == other.compute_hash()
    }

    /// 从YAML字符串解析配置
    pub fn from_yaml_str(content: &str) -> Result<Self, FeatureError> {
        let config: FeatureConfig = serde_yaml::from_str(content)?;
        Ok(config)
    }

    /// 从TOML字符串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self, FeatureError> {
        let config: FeatureConfig = toml::from_str(content)
            .map_err(|e| FeatureError::ConfigError(format!("TOML解析错误: {}", e)))?;
        Ok(config)
    }

    /// 从JSON字符串解析配置
    pub fn from_json_str(content: &str) -> Result<Self, FeatureError> {
        let config: FeatureConfig = serde_json::from_str(content)?;
        Ok(config)
    }

    /// 从文件加载配置
    ///
    /// 根据文件扩展名选择解析格式，支持 yaml/yml、toml 和 json。
    pub fn from_file(path: &Path) -> Result<Self, FeatureError> {
        let content = std::fs::read_to_string(path)?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| FeatureError::ConfigError("无法确定配置文件类型".to_string()))?;

        match extension {
            "yaml" | "yml" => Self::from_yaml_str(&content),
            "toml" => Self::from_toml_str(&content),
            "json" => Self::from_json_str(&content),
            _ => Err(FeatureError::ConfigError(format!(
                "不支持的配置文件类型: {}",
                extension
            ))),
        }
    }
}

/// 输入校验限制
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputLimits {
    /// 最大条目数
    pub max_entries: usize,
    /// 键最大长度
    pub max_key_length: usize,
    /// 值最大长度
    pub max_value_length: usize,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_MAX_INPUT_ENTRIES,
            max_key_length: DEFAULT_MAX_KEY_LENGTH,
            max_value_length: DEFAULT_MAX_VALUE_LENGTH,
        }
    }
}

impl InputLimits {
    /// 校验限制配置
    pub fn validate(&self) -> Result<(), String> {
        if self.max_entries == 0 {
            return Err("最大条目数不能为零".to_string());
        }

        if self.max_entries > MAX_INPUT_ENTRIES {
            return Err(format!("最大条目数超过上限（最大 {}）", MAX_INPUT_ENTRIES));
        }

        if self.max_key_length == 0 {
            return Err("键最大长度不能为零".to_string());
        }

        if self.max_value_length == 0 {
            return Err("值最大长度不能为零".to_string());
        }

        Ok(())
    }
}
