//! # Seal-Chain: 面向区块链的混合密钥交换
//!
//! `seal-chain` 将 RSA 非对称加密与 AES-128-CTR 对称加密组合起来，
//! 用于在公开且不可篡改的通道（区块链交易字段）上交换会话密钥和加密载荷。
//!
//! ## 核心概念
//!
//! - **`HybridKeyExchange`**: 持有至多一个 RSA 密钥对和至多一个对称密钥的单方实例。
//! - **`RsaKeyPair`** / **`SymmetricKey`**: 不可变的密钥值对象，负责实际的密码学运算。
//! - **链上编码**: 所有需要上链的数据都编码为带 `0x` 前缀的十六进制字符串。
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use seal_chain::HybridKeyExchange;
//!
//! fn main() -> seal_chain::Result<()> {
//!     // A 生成 RSA 密钥对并公开公钥
//!     let mut alice = HybridKeyExchange::new();
//!     alice.generate_rsa()?;
//!     let public_pem = alice.export_public_pem()?;
//!
//!     // B 加载 A 的公钥，生成会话密钥并加密上链
//!     let mut bob = HybridKeyExchange::new();
//!     bob.load_rsa(&public_pem)?;
//!     bob.generate_symmetric_key()?;
//!     let on_chain_key = bob.encrypt_symmetric_key_for_chain()?;
//!     let on_chain_data = bob.encrypt_for_chain("Only for your eyes")?;
//!
//!     // A 从链上取回会话密钥并解密数据
//!     alice.decrypt_and_load_symmetric_key(&on_chain_key)?;
//!     assert_eq!(alice.decrypt_from_chain(&on_chain_data)?, "Only for your eyes");
//!     Ok(())
//! }
//! ```

pub mod common;
pub mod slot;

#[cfg(feature = "traditional")]
pub mod asymmetric;
#[cfg(feature = "symmetric")]
pub mod symmetric;

#[cfg(all(feature = "traditional", feature = "symmetric"))]
pub mod exchange;

pub use common::config::{CounterMode, CryptoConfig, PrivateKeyFormat, RsaPadding};
pub use common::errors::{Error, Result};
pub use slot::KeySlot;

#[cfg(feature = "traditional")]
pub use asymmetric::rsa::RsaKeyPair;
#[cfg(feature = "symmetric")]
pub use symmetric::{aes_ctr::AesCtrCipher, key::SymmetricKey};

#[cfg(all(feature = "traditional", feature = "symmetric"))]
pub use exchange::HybridKeyExchange;

/// The version of the `seal-chain` crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
