//!
//! 集成测试的通用辅助函数
//!
#![allow(dead_code)]

use seal_chain::{CryptoConfig, HybridKeyExchange};
use std::sync::Once;

static TRACING: Once = Once::new();

/// 安装测试用的 tracing 订阅者，日志级别由 `RUST_LOG` 控制
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// 使用 1024 位 RSA 的配置，缩短测试中的密钥生成时间
pub fn fast_config() -> CryptoConfig {
    CryptoConfig {
        rsa_key_bits: 1024,
        ..Default::default()
    }
}

/// 生成了 RSA 密钥对的一方
pub fn party_with_rsa(config: CryptoConfig) -> HybridKeyExchange {
    let mut party = HybridKeyExchange::with_config(config);
    party.generate_rsa().unwrap();
    party
}
