#![deny(missing_docs)]

//! Cosmos SDK - signature envelope translation.
//!
//! Re-exports all components for convenient single-crate usage.

pub use cosmos_amino as amino;
pub use cosmos_primitives as primitives;

pub use cosmos_amino::{decode_signature, encode_secp256k1_signature, AminoError, StdSignature};
pub use cosmos_primitives::{unpack_fixed_length, Secp256k1Signature};
