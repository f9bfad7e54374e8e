//! Copyright (c) 2026, Kirky.X
//!
//! MIT License
//!
//! Feature-6450 - Setup, Handler and Input Validation
//!
//! 提供 feature-6450 的初始化、处理入口与输入校验。
//!
//! # API Layers
//!
//! ## Prelude (Quick Start)
//!
//! Use `use feature_6450::prelude::*;` to import all commonly used types.
//!
//! ## Core API
//!
//! - [`setup`] - 初始化进程级运行时
//! - [`handle`] - 处理入口
//! - [`validate_input`] - 输入校验
//! - [`FeatureRuntime`] - 运行时控制器
//! - [`FeatureConfig`] - 配置
//! - [`FeatureError`] - 错误类型
//!
//! # Examples
//!
//! ```rust
//! use feature_6450::prelude::*;
//! use ahash::AHashMap;
//!
//! fn main() {
//!     // 初始化 feature
//!     let ready = setup().unwrap();
//!     assert!(ready);
//!
//!     // 调用处理入口
//!     assert!(handle().unwrap());
//!
//!     // 校验输入
//!     let mut input = AHashMap::new();
//!     input.insert("key".to_string(), "value".to_string());
//!     assert!(validate_input(&input).unwrap());
//! }
//! ```

pub mod prelude;

pub mod config;
pub mod constants;
pub mod error;
pub mod runtime;
pub mod validation;

// 重新导出常用类型
pub use config::{FeatureConfig, InputLimits};
pub use error::FeatureError;
pub use runtime::{handle, setup, validate_input, FeatureRuntime, FeatureStats};
pub use validation::validate_entries;
