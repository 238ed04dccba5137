//! 对称加密核心模块

pub mod aes_ctr;
pub mod key;

pub use self::aes_ctr::AesCtrCipher;
pub use self::key::SymmetricKey;
