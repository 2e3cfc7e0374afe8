//! Typed public keys as carried in Amino JSON.
//!
//! A typed public key is a `{"type": <amino name>, "value": <base64>}` pair.
//! Only compressed secp256k1 keys can be encoded; the other Amino names are
//! known so that callers can tell "unsupported" apart from "garbage".

use std::fmt;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde::{Deserialize, Serialize};

use crate::PrimitivesError;

/// Length of a compressed secp256k1 public key (prefix + 32 byte x-coordinate).
pub const COMPRESSED_PUBKEY_LEN: usize = 33;

/// Public key algorithms known to the Amino encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PubkeyType {
    /// `tendermint/PubKeySecp256k1`
    Secp256k1,
    /// `tendermint/PubKeyEd25519`
    Ed25519,
    /// `tendermint/PubKeySr25519`
    Sr25519,
    /// `tendermint/PubKeyMultisigThreshold`
    MultisigThreshold,
}

impl PubkeyType {
    /// The Amino type name used as the `type` tag on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            PubkeyType::Secp256k1 => "tendermint/PubKeySecp256k1",
            PubkeyType::Ed25519 => "tendermint/PubKeyEd25519",
            PubkeyType::Sr25519 => "tendermint/PubKeySr25519",
            PubkeyType::MultisigThreshold => "tendermint/PubKeyMultisigThreshold",
        }
    }

    /// Look up a type by its exact Amino name. Matching is case-sensitive.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "tendermint/PubKeySecp256k1" => Some(PubkeyType::Secp256k1),
            "tendermint/PubKeyEd25519" => Some(PubkeyType::Ed25519),
            "tendermint/PubKeySr25519" => Some(PubkeyType::Sr25519),
            "tendermint/PubKeyMultisigThreshold" => Some(PubkeyType::MultisigThreshold),
            _ => None,
        }
    }
}

impl fmt::Display for PubkeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed public key as it appears in Amino JSON.
///
/// The tag is kept as a plain string so that envelopes carrying unknown
/// types still deserialize and can be rejected with the offending tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PubKey {
    /// Amino type name, e.g. `tendermint/PubKeySecp256k1`.
    #[serde(rename = "type")]
    pub key_type: String,
    /// Algorithm specific encoding of the key (base64 for secp256k1).
    pub value: String,
}

impl PubKey {
    /// The parsed type tag, or `None` if the tag is not a known Amino name.
    pub fn pubkey_type(&self) -> Option<PubkeyType> {
        PubkeyType::from_tag(&self.key_type)
    }
}

/// Wrap a compressed secp256k1 public key into a typed public key.
///
/// # Arguments
/// * `pubkey` - 33-byte compressed SEC1 key starting with 0x02 or 0x03.
///
/// # Returns
/// `Ok(PubKey)` tagged `tendermint/PubKeySecp256k1`, or an error if the
/// bytes are not a compressed key.
pub fn encode_secp256k1_pubkey(pubkey: &[u8]) -> Result<PubKey, PrimitivesError> {
    check_compressed(pubkey)?;
    Ok(PubKey {
        key_type: PubkeyType::Secp256k1.as_str().to_string(),
        value: BASE64.encode(pubkey),
    })
}

/// Extract the raw compressed key bytes from a secp256k1 typed public key.
pub fn decode_secp256k1_pubkey(pubkey: &PubKey) -> Result<Vec<u8>, PrimitivesError> {
    if pubkey.pubkey_type() != Some(PubkeyType::Secp256k1) {
        return Err(PrimitivesError::InvalidPublicKey(format!(
            "expected type {}, got {:?}",
            PubkeyType::Secp256k1,
            pubkey.key_type
        )));
    }
    let bytes = BASE64.decode(&pubkey.value)?;
    check_compressed(&bytes)?;
    Ok(bytes)
}

fn check_compressed(pubkey: &[u8]) -> Result<(), PrimitivesError> {
    if pubkey.len() != COMPRESSED_PUBKEY_LEN || (pubkey[0] != 0x02 && pubkey[0] != 0x03) {
        tracing::debug!(len = pubkey.len(), "rejecting non-compressed secp256k1 public key");
        return Err(PrimitivesError::InvalidPublicKey(
            "public key must be compressed secp256k1, i.e. 33 bytes starting with 0x02 or 0x03"
                .to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUBKEY_HEX: &str = "034f04181eeba35391b858633a765c4a0c189697b40d216354d50890d350c70290";

    #[test]
    fn test_encode_secp256k1_pubkey() {
        let raw = hex::decode(PUBKEY_HEX).unwrap();
        let pubkey = encode_secp256k1_pubkey(&raw).unwrap();
        assert_eq!(pubkey.key_type, "tendermint/PubKeySecp256k1");
        assert_eq!(pubkey.value, "A08EGB7ro1ORuFhjOnZcSgwYlpe0DSFjVNUIkNNQxwKQ");
        assert_eq!(pubkey.pubkey_type(), Some(PubkeyType::Secp256k1));
    }

    #[test]
    fn test_encode_rejects_non_compressed() {
        // Uncompressed prefix
        let mut raw = hex::decode(PUBKEY_HEX).unwrap();
        raw[0] = 0x04;
        assert!(encode_secp256k1_pubkey(&raw).is_err());

        // Wrong lengths
        assert!(encode_secp256k1_pubkey(&[]).is_err());
        assert!(encode_secp256k1_pubkey(&[0x02; 32]).is_err());
        assert!(encode_secp256k1_pubkey(&[0x02; 34]).is_err());
        assert!(encode_secp256k1_pubkey(&[0x04; 65]).is_err());
    }

    #[test]
    fn test_decode_secp256k1_pubkey() {
        let raw = hex::decode(PUBKEY_HEX).unwrap();
        let pubkey = encode_secp256k1_pubkey(&raw).unwrap();
        assert_eq!(decode_secp256k1_pubkey(&pubkey).unwrap(), raw);

        let ed = PubKey {
            key_type: PubkeyType::Ed25519.as_str().to_string(),
            value: pubkey.value.clone(),
        };
        assert!(decode_secp256k1_pubkey(&ed).is_err());

        let bad_b64 = PubKey {
            key_type: pubkey.key_type.clone(),
            value: "not base64!".to_string(),
        };
        assert!(matches!(
            decode_secp256k1_pubkey(&bad_b64),
            Err(PrimitivesError::Base64(_))
        ));
    }

    #[test]
    fn test_pubkey_type_tags() {
        for t in [
            PubkeyType::Secp256k1,
            PubkeyType::Ed25519,
            PubkeyType::Sr25519,
            PubkeyType::MultisigThreshold,
        ] {
            assert_eq!(PubkeyType::from_tag(t.as_str()), Some(t));
            assert_eq!(t.to_string(), t.as_str());
        }
        assert_eq!(PubkeyType::from_tag(""), None);
        assert_eq!(PubkeyType::from_tag("secp256k1"), None);
        assert_eq!(PubkeyType::from_tag("tendermint/pubkeysecp256k1"), None);
    }

    #[test]
    fn test_pubkey_json_field_names() {
        let raw = hex::decode(PUBKEY_HEX).unwrap();
        let pubkey = encode_secp256k1_pubkey(&raw).unwrap();
        let json = serde_json::to_value(&pubkey).unwrap();
        assert_eq!(json["type"], "tendermint/PubKeySecp256k1");
        assert_eq!(json["value"], "A08EGB7ro1ORuFhjOnZcSgwYlpe0DSFjVNUIkNNQxwKQ");
    }
}
