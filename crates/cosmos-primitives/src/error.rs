/// Unified error type for public key and signature primitives.
#[derive(Debug, thiserror::Error)]
pub enum PrimitivesError {
    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("invalid signature: {0}")]
    InvalidSignature(String),

    #[error("invalid signature length: expected {expected}, got {got}")]
    InvalidSignatureLength { expected: usize, got: usize },

    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),
}
