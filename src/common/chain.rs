//! 链上编码：带 `0x` 前缀的十六进制字符串。
//!
//! 前缀只是展示约定，不参与任何密码学计算。所有解码入口先去掉首尾空白，
//! 再去掉存在的前缀。

use crate::common::errors::{Error, Result};

/// 标识“该值用于链上存储”的固定前缀
pub const CHAIN_PREFIX: &str = "0x";

/// 将字节编码为带前缀的小写十六进制
pub fn to_chain_hex(bytes: &[u8]) -> String {
    let mut encoded = String::with_capacity(CHAIN_PREFIX.len() + bytes.len() * 2);
    encoded.push_str(CHAIN_PREFIX);
    encoded.push_str(&hex::encode(bytes));
    encoded
}

/// 去掉前缀（如果存在）
pub fn strip_chain_prefix(encoded: &str) -> &str {
    encoded.strip_prefix(CHAIN_PREFIX).unwrap_or(encoded)
}

/// 解码普通十六进制。奇数长度或非十六进制字符返回 [`Error::InvalidEncoding`]，不会静默截断。
pub fn decode_hex(encoded: &str) -> Result<Vec<u8>> {
    Ok(hex::decode(encoded.trim())?)
}

/// 解码链上十六进制，前缀可选
pub fn from_chain_hex(encoded: &str) -> Result<Vec<u8>> {
    hex::decode(strip_chain_prefix(encoded.trim()))
        .map_err(|e| Error::InvalidEncoding(format!("malformed on-chain hex: {}", e)))
}
