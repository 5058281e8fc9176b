//! 核心模块 - 配置、会话状态和错误定义
//!
//! # 模块结构
//!
//! - [`Config`] - 配置
//! - [`Session`] - 会话状态
//! - [`KioskError`] - 会话错误

pub mod config;
pub mod error;
pub mod state;

pub use config::Config;
pub use error::{KioskError, KioskResult};
pub use state::Session;
