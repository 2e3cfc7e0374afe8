#![deny(missing_docs)]

//! Cosmos SDK - Amino JSON signature envelopes.
//!
//! Translates between the `StdSignature` envelope found in Amino JSON
//! transactions and the raw compressed public key and 64-byte signature
//! consumed by secp256k1 verification.

mod error;
pub mod signature;
pub mod types;

pub use error::AminoError;
pub use signature::{decode_signature, encode_secp256k1_signature};
pub use types::{DecodedSignature, StdSignature};
