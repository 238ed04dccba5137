//! `HybridKeyExchange`：单方持有的混合密钥交换状态。
//!
//! 每个实例独占至多一个 RSA 密钥对和至多一个对称密钥。两方之间只通过
//! 显式的编码/解码调用交换信息，实例之间不共享可变状态。
//!
//! 实例不做内部加锁，跨线程共享同一实例时需要调用方自行串行化。

use crate::asymmetric::rsa::RsaKeyPair;
use crate::common::chain::{from_chain_hex, to_chain_hex};
use crate::common::config::{CryptoConfig, validate_rsa_key_bits};
use crate::common::errors::{Error, Result};
use crate::slot::KeySlot;
use crate::symmetric::aes_ctr::AesCtrCipher;
use crate::symmetric::key::SymmetricKey;
use tracing::debug;
use zeroize::Zeroizing;

#[derive(Debug)]
pub struct HybridKeyExchange {
    config: CryptoConfig,
    rsa: KeySlot<RsaKeyPair>,
    symmetric: KeySlot<SymmetricKey>,
}

impl Default for HybridKeyExchange {
    fn default() -> Self {
        Self::new()
    }
}

impl HybridKeyExchange {
    pub fn new() -> Self {
        Self::with_config(CryptoConfig::default())
    }

    pub fn with_config(config: CryptoConfig) -> Self {
        Self {
            config,
            rsa: KeySlot::Absent,
            symmetric: KeySlot::Absent,
        }
    }

    pub fn config(&self) -> &CryptoConfig {
        &self.config
    }

    fn install_rsa(&mut self, keys: RsaKeyPair) -> &RsaKeyPair {
        debug!(
            private = keys.is_private(),
            modulus_bits = keys.modulus_bits(),
            replaced = self.rsa.is_loaded(),
            "installing RSA key"
        );
        self.rsa.insert(keys)
    }

    fn install_symmetric(&mut self, key: SymmetricKey) -> &SymmetricKey {
        debug!(replaced = self.symmetric.is_loaded(), "installing symmetric key");
        self.symmetric.insert(key)
    }

    fn symmetric(&self) -> Result<&SymmetricKey> {
        self.symmetric.require(|| Error::NoSymmetricKey)
    }

    // === RSA 密钥管理 ===

    /// 按配置位数生成新的 RSA 密钥对，替换已有密钥
    pub fn generate_rsa(&mut self) -> Result<&RsaKeyPair> {
        let keys = RsaKeyPair::generate_with_config(&self.config)?;
        Ok(self.install_rsa(keys))
    }

    /// 按指定位数生成新的 RSA 密钥对，位数约束与 [`CryptoConfig::validate`] 相同
    pub fn generate_rsa_with_bits(&mut self, bits: usize) -> Result<&RsaKeyPair> {
        validate_rsa_key_bits(bits)?;
        let keys = RsaKeyPair::generate(bits)?;
        Ok(self.install_rsa(keys))
    }

    /// 加载 PEM 编码的私钥或公钥，替换已有密钥
    pub fn load_rsa(&mut self, pem: &str) -> Result<&RsaKeyPair> {
        let keys = RsaKeyPair::from_pem(pem)?;
        Ok(self.install_rsa(keys))
    }

    /// 加载 [`HybridKeyExchange::export_public_for_chain`] 产生的链上公钥
    pub fn load_public_from_chain(&mut self, encoded: &str) -> Result<&RsaKeyPair> {
        let keys = RsaKeyPair::from_public_chain_hex(encoded)?;
        Ok(self.install_rsa(keys))
    }

    pub fn rsa_key(&self) -> Option<&RsaKeyPair> {
        self.rsa.get()
    }

    pub fn export_private_pem(&self) -> Result<String> {
        self.rsa
            .require(|| Error::NoPrivateKey)?
            .export_private_pem(self.config.private_key_format)
    }

    pub fn export_public_pem(&self) -> Result<String> {
        self.rsa.require(|| Error::NoKey)?.export_public_pem()
    }

    pub fn export_public_for_chain(&self) -> Result<String> {
        self.rsa.require(|| Error::NoKey)?.public_key_for_chain()
    }

    // === RSA 密钥传输 ===

    /// 使用持有的 RSA 公钥加密数据，返回链上编码
    pub fn rsa_encrypt_for_chain(&self, plaintext: &[u8]) -> Result<String> {
        let keys = self.rsa.require(|| Error::NoPublicKey)?;
        let ciphertext = keys.encrypt(self.config.rsa_padding, plaintext)?;
        Ok(to_chain_hex(&ciphertext))
    }

    /// 将持有的对称密钥用 RSA 公钥加密，返回链上编码
    pub fn encrypt_symmetric_key_for_chain(&self) -> Result<String> {
        let key = self.symmetric()?;
        self.rsa_encrypt_for_chain(key.as_bytes())
    }

    /// 解码链上数据并用 RSA 私钥解密
    pub fn rsa_decrypt_from_chain(&self, encoded: &str) -> Result<Vec<u8>> {
        let keys = self.rsa.require(|| Error::NoPrivateKey)?;
        if !keys.is_private() {
            return Err(Error::NoPrivateKey);
        }
        let ciphertext = from_chain_hex(encoded)?;
        keys.decrypt(self.config.rsa_padding, &ciphertext)
    }

    /// 解密链上的对称密钥并立即装入，替换已有对称密钥
    pub fn decrypt_and_load_symmetric_key(&mut self, encoded: &str) -> Result<()> {
        let decrypted = Zeroizing::new(self.rsa_decrypt_from_chain(encoded)?);
        let key = SymmetricKey::from_bytes(&decrypted)?;
        self.install_symmetric(key);
        Ok(())
    }

    // === 对称密钥管理 ===

    pub fn generate_symmetric_key(&mut self) -> Result<&SymmetricKey> {
        let key = SymmetricKey::generate()?;
        Ok(self.install_symmetric(key))
    }

    /// 从十六进制加载对称密钥，替换已有对称密钥
    pub fn load_symmetric_key(&mut self, encoded: &str) -> Result<&SymmetricKey> {
        let key = SymmetricKey::from_hex(encoded)?;
        Ok(self.install_symmetric(key))
    }

    pub fn load_symmetric_key_bytes(&mut self, bytes: &[u8]) -> Result<&SymmetricKey> {
        let key = SymmetricKey::from_bytes(bytes)?;
        Ok(self.install_symmetric(key))
    }

    pub fn symmetric_key(&self) -> Option<&SymmetricKey> {
        self.symmetric.get()
    }

    pub fn export_symmetric_key_hex(&self) -> Result<String> {
        Ok(self.symmetric()?.to_hex())
    }

    // === 对称载荷加密 ===

    /// 加密文本，返回不带前缀的十六进制
    pub fn encrypt(&self, text: &str) -> Result<String> {
        AesCtrCipher::encrypt_text(self.symmetric()?, self.config.counter_mode, text)
    }

    pub fn decrypt(&self, cipher_hex: &str) -> Result<String> {
        AesCtrCipher::decrypt_text(self.symmetric()?, self.config.counter_mode, cipher_hex)
    }

    /// 加密文本，返回带 `0x` 前缀的链上编码
    pub fn encrypt_for_chain(&self, text: &str) -> Result<String> {
        AesCtrCipher::encrypt_text_for_chain(self.symmetric()?, self.config.counter_mode, text)
    }

    pub fn decrypt_from_chain(&self, encoded: &str) -> Result<String> {
        AesCtrCipher::decrypt_text_from_chain(self.symmetric()?, self.config.counter_mode, encoded)
    }
}
