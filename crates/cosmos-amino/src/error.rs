use cosmos_primitives::signature::FIXED_LENGTH_SIGNATURE_LEN;

/// Error types for signature envelope operations.
#[derive(Debug, thiserror::Error)]
pub enum AminoError {
    /// The raw signature is not exactly 64 bytes.
    #[error(
        "signature must be {expected} bytes long, got {got}; the Cosmos SDK uses a 2x32 byte \
         fixed length encoding for the secp256k1 signature integers r and s"
    )]
    InvalidSignatureLength {
        /// Required length, always 64.
        expected: usize,
        /// Length that was supplied.
        got: usize,
    },

    /// The envelope's public key carries a type tag this crate does not decode.
    #[error("unsupported pubkey type: {0:?}")]
    UnsupportedPubkeyType(String),

    /// A base64 field of the envelope could not be decoded.
    #[error("base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// JSON serialization or deserialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// An error from the primitives layer.
    #[error("primitives error: {0}")]
    Primitives(#[from] cosmos_primitives::PrimitivesError),
}

impl AminoError {
    pub(crate) fn signature_length(got: usize) -> Self {
        AminoError::InvalidSignatureLength {
            expected: FIXED_LENGTH_SIGNATURE_LEN,
            got,
        }
    }
}
