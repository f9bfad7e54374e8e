//! Feature 运行时
//!
//! feature-6450 的主控制器，持有配置与统计信息，并提供进程级全局实例。
//! [`setup`]、[`handle`] 和 [`validate_input`] 是面向调用方的顶层入口。

use crate::config::FeatureConfig;
use crate::error::FeatureError;
use crate::validation::validate_entries;
use ahash::AHashMap;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};
use tracing::{debug, info, instrument, warn};

/// Feature 运行时统计信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureStats {
    /// 处理次数
    pub handled_total: u64,
    /// 校验次数
    pub validations_total: u64,
    /// 校验拒绝次数
    pub validations_rejected: u64,
    /// 初始化时间
    pub initialized_at: DateTime<Utc>,
}

/// Feature 主控制器
///
/// 持有已校验的配置和调用计数。配置通过 [`FeatureRuntime::reload`] 热替换。
pub struct FeatureRuntime {
    /// 配置
    config: RwLock<FeatureConfig>,
    /// 初始化时间
    initialized_at: DateTime<Utc>,
    handled_total: AtomicU64,
    validations_total: AtomicU64,
    validations_rejected: AtomicU64,
}

impl FeatureRuntime {
    /// 创建新的运行时实例
    ///
    /// # 参数
    /// - `config`: Feature 配置
    ///
    /// # 返回
    /// - `Ok(FeatureRuntime)`: 配置校验通过
    /// - `Err(FeatureError)`: 配置校验失败
    pub fn new(config: FeatureConfig) -> Result<Self, FeatureError> {
        // 校验配置
        config.validate().map_err(FeatureError::ConfigError)?;

        Ok(Self {
            config: RwLock::new(config),
            initialized_at: Utc::now(),
            handled_total: AtomicU64::new(0),
            validations_total: AtomicU64::new(0),
            validations_rejected: AtomicU64::new(0),
        })
    }

    /// 处理入口
    ///
    /// feature 启用时返回 `Ok(true)`，禁用时返回 `Ok(false)`。
    #[instrument(skip(self))]
    pub fn handle(&self) -> Result<bool, FeatureError> {
        let config = self.config.read();
        if !config.enabled {
            warn!(feature = %config.name, "feature disabled, handler skipped");
            return Ok(false);
        }

        self.handled_total.fetch_add(1, Ordering::Relaxed);
        debug!(feature = %config.name, "handler invoked");
        Ok(true)
    }

    /// 校验输入映射
    ///
    /// 校验通过返回 `Ok(true)`；结构不合法返回 `Err(ValidationError)`，
    /// 不会静默通过。
    #[instrument(skip(self, input))]
    pub fn validate_input(
        &self,
        input: &AHashMap<String, String>,
    ) -> Result<bool, FeatureError> {
        self.validations_total.fetch_add(1, Ordering::Relaxed);

        let limits = self.config.read().input_limits.clone();
        match validate_entries(input, &limits) {
            Ok(()) => {
                debug!(entries = input.len(), "input validated");
                Ok(true)
            }
            Err(e) => {
                self.validations_rejected.fetch_add(1, Ordering::Relaxed);
                warn!(error = %e, "input rejected");
                Err(e)
            }
        }
    }

    /// 更新配置
    ///
    /// 新配置先校验再替换；与当前配置相同时跳过替换。
    pub fn reload(&self, config: FeatureConfig) -> Result<(), FeatureError> {
        config.validate().map_err(FeatureError::ConfigError)?;

        let mut current = self.config.write();
        if config.is_same_as(&current) {
            debug!("config unchanged, reload skipped");
            return Ok(());
        }

        info!(
            old_version = %current.version,
            new_version = %config.version,
            "config reloaded"
        );
        *current = config;
        Ok(())
    }

    /// 获取当前配置副本
    pub fn config(&self) -> FeatureConfig {
        self.config.read().clone()
    }

    /// 获取统计信息
    pub fn stats(&self) -> FeatureStats {
        FeatureStats {
            handled_total: self.handled_total.load(Ordering::Relaxed),
            validations_total: self.validations_total.load(Ordering::Relaxed),
            validations_rejected: self.validations_rejected.load(Ordering::Relaxed),
            initialized_at: self.initialized_at,
        }
    }
}

/// 进程级全局运行时实例
static GLOBAL_RUNTIME: OnceLock<Arc<FeatureRuntime>> = OnceLock::new();

/// 获取全局运行时，未初始化时用默认配置初始化
fn global_runtime() -> Result<Arc<FeatureRuntime>, FeatureError> {
    if let Some(runtime) = GLOBAL_RUNTIME.get() {
        return Ok(Arc::clone(runtime));
    }

    let runtime = Arc::new(FeatureRuntime::new(FeatureConfig::default())?);
    if GLOBAL_RUNTIME.set(Arc::clone(&runtime)).is_err() {
        // 并发初始化时保留先到者
        if let Some(existing) = GLOBAL_RUNTIME.get() {
            return Ok(Arc::clone(existing));
        }
    }

    Ok(runtime)
}

/// 初始化 feature-6450
///
/// 使用默认配置初始化进程级运行时，重复调用是幂等的。
///
/// # 返回
/// - `Ok(true)`: 初始化完成（或已初始化）
/// - `Err(FeatureError)`: 配置校验失败
#[instrument]
pub fn setup() -> Result<bool, FeatureError> {
    let runtime = global_runtime()?;
    info!(feature = %runtime.config().name, "feature setup complete");
    Ok(true)
}

/// feature-6450 处理入口
///
/// 未执行 [`setup`] 时按默认配置惰性初始化。
pub fn handle() -> Result<bool, FeatureError> {
    global_runtime()?.handle()
}

/// 校验 feature-6450 的输入映射
pub fn validate_input(input: &AHashMap<String, String>) -> Result<bool, FeatureError> {
    global_runtime()?.validate_input(input)
}
