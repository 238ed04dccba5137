//! 128 位 AES 会话密钥

use crate::common::chain::from_chain_hex;
use crate::common::errors::{Error, Result};
use rand_core::{OsRng, TryRngCore};
use std::fmt;
use subtle::ConstantTimeEq;
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// 密钥长度（字节）
pub const KEY_SIZE: usize = 16;

/// AES-128 对称密钥，离开作用域时自动擦除
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SymmetricKey([u8; KEY_SIZE]);

impl SymmetricKey {
    /// 从操作系统 CSPRNG 填充 16 字节
    pub fn generate() -> Result<Self> {
        let mut key_bytes = [0u8; KEY_SIZE];
        OsRng
            .try_fill_bytes(&mut key_bytes)
            .map_err(|e| Error::KeyGeneration(format!("OS random source failed: {}", e)))?;
        debug!("generated symmetric key");
        Ok(Self(key_bytes))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let key_bytes: [u8; KEY_SIZE] =
            bytes.try_into().map_err(|_| Error::InvalidKeyLength {
                expected: KEY_SIZE,
                actual: bytes.len(),
            })?;
        Ok(Self(key_bytes))
    }

    /// 解码十六进制密钥，允许带 `0x` 前缀
    pub fn from_hex(encoded: &str) -> Result<Self> {
        let mut bytes = from_chain_hex(encoded)?;
        let key = Self::from_bytes(&bytes);
        bytes.zeroize();
        key
    }

    /// 32 个小写十六进制字符
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }
}

impl PartialEq for SymmetricKey {
    fn eq(&self, other: &Self) -> bool {
        self.0[..].ct_eq(&other.0[..]).into()
    }
}

impl Eq for SymmetricKey {}

impl fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SymmetricKey(<redacted>)")
    }
}
