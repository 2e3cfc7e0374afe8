//! Conversion between raw secp256k1 key/signature bytes and `StdSignature`.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

use cosmos_primitives::pubkey::{encode_secp256k1_pubkey, PubkeyType};
use cosmos_primitives::signature::FIXED_LENGTH_SIGNATURE_LEN;

use crate::types::{DecodedSignature, StdSignature};
use crate::AminoError;

/// Build a signature envelope from a binary public key and signature.
///
/// # Arguments
/// * `pubkey` - A compressed secp256k1 public key.
/// * `signature` - The 64-byte fixed-length `r || s` signature.
///
/// # Returns
/// `Ok(StdSignature)`, or an error if the signature is not 64 bytes or the
/// public key is not a compressed secp256k1 key.
pub fn encode_secp256k1_signature(
    pubkey: &[u8],
    signature: &[u8],
) -> Result<StdSignature, AminoError> {
    if signature.len() != FIXED_LENGTH_SIGNATURE_LEN {
        tracing::debug!(len = signature.len(), "rejecting signature with wrong length");
        return Err(AminoError::signature_length(signature.len()));
    }

    let pub_key = encode_secp256k1_pubkey(pubkey)?;
    tracing::trace!(pubkey_type = %pub_key.key_type, "encoded signature envelope");
    Ok(StdSignature {
        pub_key,
        signature: BASE64.encode(signature),
    })
}

/// Recover the binary public key and signature from an envelope.
///
/// Only `tendermint/PubKeySecp256k1` envelopes are decoded. Any other tag,
/// known or not, is rejected. The signature length is not re-checked.
pub fn decode_signature(signature: &StdSignature) -> Result<DecodedSignature, AminoError> {
    let tag = &signature.pub_key.key_type;
    let Some(pubkey_type) = PubkeyType::from_tag(tag) else {
        return Err(unsupported(tag));
    };

    match pubkey_type {
        // Every new case here needs its own tests.
        PubkeyType::Secp256k1 => {
            let decoded = DecodedSignature {
                pubkey: BASE64.decode(&signature.pub_key.value)?,
                signature: BASE64.decode(&signature.signature)?,
            };
            tracing::trace!(pubkey_type = %pubkey_type, "decoded signature envelope");
            Ok(decoded)
        }
        PubkeyType::Ed25519 | PubkeyType::Sr25519 | PubkeyType::MultisigThreshold => {
            Err(unsupported(tag))
        }
    }
}

fn unsupported(tag: &str) -> AminoError {
    tracing::debug!(pubkey_type = tag, "rejecting unsupported pubkey type");
    AminoError::UnsupportedPubkeyType(tag.to_string())
}
