//! 非对称加密核心模块

pub mod rsa;

pub use self::rsa::RsaKeyPair;
