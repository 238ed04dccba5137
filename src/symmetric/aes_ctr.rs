//! AES-128-CTR 流加密
//!
//! 线格式取决于 [`CounterMode`]：
//!
//! - `RandomIv`: `[16 字节初始计数器块][密文]`
//! - `Fixed`: `[密文]`，初始计数器块固定为 128 位大端整数 5
//!
//! 计数器按 128 位大端整数递增。CTR 不提供完整性保护，错误的密钥通常在
//! UTF-8 解码时才会暴露。

use crate::common::chain::{CHAIN_PREFIX, decode_hex, from_chain_hex};
use crate::common::config::CounterMode;
use crate::common::errors::{Error, Result};
use crate::symmetric::key::SymmetricKey;
use aes::Aes128;
use ctr::cipher::{KeyIvInit, StreamCipher};
use rand_core::{OsRng, TryRngCore};
use tracing::{debug, warn};

type Aes128Ctr = ctr::Ctr128BE<Aes128>;

/// 初始计数器块长度
pub const IV_SIZE: usize = 16;

/// v1 线格式使用的固定初始计数器
pub const LEGACY_COUNTER: u128 = 5;

/// AES-CTR 对称加密系统
#[derive(Debug)]
pub struct AesCtrCipher;

impl AesCtrCipher {
    fn apply_keystream(key: &SymmetricKey, iv: &[u8; IV_SIZE], buffer: &mut [u8]) {
        let mut cipher = Aes128Ctr::new(key.as_bytes().into(), iv.into());
        cipher.apply_keystream(buffer);
    }

    /// 加密字节，返回线格式字节
    pub fn encrypt(key: &SymmetricKey, mode: CounterMode, plaintext: &[u8]) -> Result<Vec<u8>> {
        let output = match mode {
            CounterMode::RandomIv => {
                let mut iv = [0u8; IV_SIZE];
                OsRng
                    .try_fill_bytes(&mut iv)
                    .map_err(|e| Error::Encryption(format!("IV generation failed: {}", e)))?;

                let mut output = Vec::with_capacity(IV_SIZE + plaintext.len());
                output.extend_from_slice(&iv);
                output.extend_from_slice(plaintext);
                Self::apply_keystream(key, &iv, &mut output[IV_SIZE..]);
                output
            }
            CounterMode::Fixed => {
                warn!("encrypting with fixed CTR counter; keystream repeats across messages");
                let mut output = plaintext.to_vec();
                Self::apply_keystream(key, &LEGACY_COUNTER.to_be_bytes(), &mut output);
                output
            }
        };
        debug!(mode = %mode, plaintext_len = plaintext.len(), "AES-CTR encrypted payload");
        Ok(output)
    }

    /// 解密线格式字节
    pub fn decrypt(key: &SymmetricKey, mode: CounterMode, wire: &[u8]) -> Result<Vec<u8>> {
        let plaintext = match mode {
            CounterMode::RandomIv => {
                if wire.len() < IV_SIZE {
                    return Err(Error::InvalidEncoding(format!(
                        "ciphertext of {} bytes is shorter than the {}-byte IV",
                        wire.len(),
                        IV_SIZE
                    )));
                }
                let (iv_slice, body) = wire.split_at(IV_SIZE);
                let mut iv = [0u8; IV_SIZE];
                iv.copy_from_slice(iv_slice);
                let mut buffer = body.to_vec();
                Self::apply_keystream(key, &iv, &mut buffer);
                buffer
            }
            CounterMode::Fixed => {
                let mut buffer = wire.to_vec();
                Self::apply_keystream(key, &LEGACY_COUNTER.to_be_bytes(), &mut buffer);
                buffer
            }
        };
        debug!(mode = %mode, plaintext_len = plaintext.len(), "AES-CTR decrypted payload");
        Ok(plaintext)
    }

    /// 加密 UTF-8 文本，返回不带前缀的小写十六进制
    pub fn encrypt_text(key: &SymmetricKey, mode: CounterMode, text: &str) -> Result<String> {
        Ok(hex::encode(Self::encrypt(key, mode, text.as_bytes())?))
    }

    /// 解密十六进制密文为 UTF-8 文本
    pub fn decrypt_text(key: &SymmetricKey, mode: CounterMode, cipher_hex: &str) -> Result<String> {
        let wire = decode_hex(cipher_hex)?;
        Ok(String::from_utf8(Self::decrypt(key, mode, &wire)?)?)
    }

    /// 加密 UTF-8 文本，返回带 `0x` 前缀的链上编码
    pub fn encrypt_text_for_chain(key: &SymmetricKey, mode: CounterMode, text: &str) -> Result<String> {
        Ok(format!("{}{}", CHAIN_PREFIX, Self::encrypt_text(key, mode, text)?))
    }

    /// 解密链上编码，前缀可选
    pub fn decrypt_text_from_chain(
        key: &SymmetricKey,
        mode: CounterMode,
        encoded: &str,
    ) -> Result<String> {
        let wire = from_chain_hex(encoded)?;
        Ok(String::from_utf8(Self::decrypt(key, mode, &wire)?)?)
    }
}
