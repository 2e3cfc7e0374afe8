//! Envelope types: `StdSignature` on the wire, `DecodedSignature` in memory.

use cosmos_primitives::pubkey::PubKey;
use serde::{Deserialize, Serialize};

use crate::AminoError;

/// A signature envelope as found in Amino JSON transactions.
///
/// ```json
/// { "pub_key": { "type": "tendermint/PubKeySecp256k1", "value": "<base64>" },
///   "signature": "<base64>" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StdSignature {
    /// The signer's typed public key.
    pub pub_key: PubKey,
    /// Base64 of the 64-byte fixed-length signature.
    pub signature: String,
}

impl StdSignature {
    /// Serialize the envelope to its JSON wire form.
    pub fn to_json(&self) -> Result<String, AminoError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse an envelope from JSON. The type tag is not checked here.
    pub fn from_json(json: &str) -> Result<Self, AminoError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Raw material recovered from a `StdSignature`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedSignature {
    /// Compressed public key bytes.
    pub pubkey: Vec<u8>,
    /// Signature bytes, normally 64 bytes `r || s`.
    pub signature: Vec<u8>,
}
