/// Cosmos SDK - secp256k1 public key and signature primitives.
///
/// This crate provides the building blocks for Amino signature envelopes:
/// - Typed public keys (`{"type": ..., "value": ...}`) for compressed secp256k1 keys
/// - Fixed-length (64 byte) signature unpacking into minimal big-endian integers
/// - A signature object with fixed-length, DER and `k256` conversions

pub mod pubkey;
pub mod signature;

mod error;
pub use error::PrimitivesError;

pub use pubkey::{decode_secp256k1_pubkey, encode_secp256k1_pubkey, PubKey, PubkeyType};
pub use signature::{unpack_fixed_length, Secp256k1Signature, FIXED_LENGTH_SIGNATURE_LEN};
