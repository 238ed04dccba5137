use thiserror::Error;

/// `seal-chain` 操作可能遇到的错误类型
#[derive(Error, Debug)]
pub enum Error {
    #[error("no RSA key has been generated or loaded")]
    NoKey,

    #[error("no RSA private key is loaded")]
    NoPrivateKey,

    #[error("no RSA public key is loaded")]
    NoPublicKey,

    #[error("no symmetric key has been generated or loaded")]
    NoSymmetricKey,

    #[error("failed to parse key: {0}")]
    KeyParse(String),

    #[error("failed to encode key: {0}")]
    KeyEncode(String),

    #[error("key generation failed: {0}")]
    KeyGeneration(String),

    #[error("invalid encoding: {0}")]
    InvalidEncoding(String),

    #[error("invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    #[error("plaintext too large for RSA modulus: max {max} bytes, got {actual}")]
    PlaintextTooLarge { max: usize, actual: usize },

    #[error("encryption failed: {0}")]
    Encryption(String),

    #[error("decryption failed: {0}")]
    Decryption(String),

    #[error("decrypted payload is not valid UTF-8 (wrong key?)")]
    TextDecode(#[from] std::string::FromUtf8Error),

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("I/O error")]
    Io(#[from] std::io::Error),

    #[error("Serialization error (JSON)")]
    Json(#[from] serde_json::Error),
}

impl From<hex::FromHexError> for Error {
    fn from(err: hex::FromHexError) -> Self {
        Error::InvalidEncoding(err.to_string())
    }
}

/// `seal-chain` 的通用结果类型
pub type Result<T, E = Error> = std::result::Result<T, E>;
