//! 通用模块，包含错误处理、配置和链上编码

pub mod chain;
pub mod config;
pub mod errors;

pub use self::chain::{CHAIN_PREFIX, from_chain_hex, to_chain_hex};
pub use self::config::CryptoConfig;
pub use self::errors::Error;
