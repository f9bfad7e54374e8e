//! 输入校验模块
//!
//! 对输入映射做结构校验：非空、条目数与键值长度限制。
//! 不对键值内容做语义解释。

use crate::config::InputLimits;
use crate::error::FeatureError;
use ahash::AHashMap;

/// 校验输入映射
///
/// # 参数
/// - `input`: 输入映射
/// - `limits`: 校验限制
///
/// # 返回
/// - `Ok(())`: 校验通过
/// - `Err(FeatureError)`: 校验失败
pub fn validate_entries(
    input: &AHashMap<String, String>,
    limits: &InputLimits,
) -> Result<(), FeatureError> {
    if input.is_empty() {
        return Err(FeatureError::ValidationError("输入不能为空".to_string()));
    }

    if input.len() > limits.max_entries {
        return Err(FeatureError::ValidationError(format!(
            "输入条目数超过限制（最大 {}）",
            limits.max_entries
        )));
    }

    for (key, value) in input {
        if key.is_empty() {
            return Err(FeatureError::ValidationError("键不能为空".to_string()));
        }

        if key.len() > limits.max_key_length {
            return Err(FeatureError::ValidationError(format!(
                "键 {} 超过最大长度（最大 {}）",
                key, limits.max_key_length
            )));
        }

        if value.len() > limits.max_value_length {
            return Err(FeatureError::ValidationError(format!(
                "键 {} 的值超过最大长度（最大 {}）",
                key, limits.max_value_length
            )));
        }
    }

    Ok(())
}
