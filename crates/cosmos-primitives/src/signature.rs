//! Fixed-length secp256k1 signatures and their minimal integer form.
//!
//! The Cosmos SDK transports signatures as 64 bytes, `r || s`, each a 32-byte
//! big-endian integer. Signature objects hold the integers unpadded, so the
//! leading zero bytes are stripped on the way in and restored on the way out.

use k256::ecdsa;

use crate::PrimitivesError;

/// Length of a fixed-length signature: two 32-byte integers, r then s.
pub const FIXED_LENGTH_SIGNATURE_LEN: usize = 64;

/// Length of one signature integer in fixed-length form.
pub const SCALAR_LEN: usize = 32;

/// Split a 64-byte signature into minimally encoded `(r, s)`.
///
/// Each half is read as an unsigned big-endian integer and re-serialized
/// without leading zero bytes. Zero becomes the single byte `0x00`.
/// No range checks are made against the curve order.
pub fn unpack_fixed_length(signature: &[u8; FIXED_LENGTH_SIGNATURE_LEN]) -> (Vec<u8>, Vec<u8>) {
    let (r, s) = signature.split_at(SCALAR_LEN);
    (minimal_int(r), minimal_int(s))
}

/// An ECDSA signature over secp256k1 with minimally encoded R and S.
///
/// Construction enforces the unpadded form: neither integer may be empty,
/// longer than 32 bytes, or start with a zero byte.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Secp256k1Signature {
    /// The R component, unpadded big-endian.
    r: Vec<u8>,
    /// The S component, unpadded big-endian.
    s: Vec<u8>,
}

impl Secp256k1Signature {
    /// Create a signature from unpadded big-endian R and S.
    ///
    /// # Arguments
    /// * `r` - The R component, 1 to 32 bytes, no leading zero.
    /// * `s` - The S component, 1 to 32 bytes, no leading zero.
    ///
    /// # Returns
    /// `Ok(Secp256k1Signature)`, or an error naming the badly encoded integer.
    pub fn new(r: Vec<u8>, s: Vec<u8>) -> Result<Self, PrimitivesError> {
        check_unpadded("r", &r)?;
        check_unpadded("s", &s)?;
        Ok(Secp256k1Signature { r, s })
    }

    /// Parse a 64-byte fixed-length signature.
    ///
    /// # Arguments
    /// * `bytes` - Exactly 64 bytes, `r || s`.
    ///
    /// # Returns
    /// `Ok(Secp256k1Signature)`, or an error if the length is wrong or either
    /// integer is zero.
    pub fn from_fixed_length(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        let fixed: &[u8; FIXED_LENGTH_SIGNATURE_LEN] = bytes.try_into().map_err(|_| {
            tracing::debug!(len = bytes.len(), "rejecting fixed-length signature");
            PrimitivesError::InvalidSignatureLength {
                expected: FIXED_LENGTH_SIGNATURE_LEN,
                got: bytes.len(),
            }
        })?;
        let (r, s) = unpack_fixed_length(fixed);
        Self::new(r, s)
    }

    /// Access the unpadded R component.
    pub fn r(&self) -> &[u8] {
        &self.r
    }

    /// Access the unpadded S component.
    pub fn s(&self) -> &[u8] {
        &self.s
    }

    /// Serialize as 64 bytes, both integers left-padded to 32 bytes.
    pub fn to_fixed_length(&self) -> [u8; FIXED_LENGTH_SIGNATURE_LEN] {
        let mut out = [0u8; FIXED_LENGTH_SIGNATURE_LEN];
        out[SCALAR_LEN - self.r.len()..SCALAR_LEN].copy_from_slice(&self.r);
        out[FIXED_LENGTH_SIGNATURE_LEN - self.s.len()..].copy_from_slice(&self.s);
        out
    }

    /// Serialize the signature in DER format.
    ///
    /// Output format: 0x30 <len> 0x02 <r_len> <r_bytes> 0x02 <s_len> <s_bytes>
    /// No low-S normalization is applied; the integers are written as held.
    pub fn to_der(&self) -> Vec<u8> {
        let rb = der_int(&self.r);
        let sb = der_int(&self.s);

        let total_len = 6 + rb.len() + sb.len();
        let mut out = Vec::with_capacity(total_len);
        out.push(0x30);
        out.push((total_len - 2) as u8);
        out.push(0x02);
        out.push(rb.len() as u8);
        out.extend_from_slice(&rb);
        out.push(0x02);
        out.push(sb.len() as u8);
        out.extend_from_slice(&sb);
        out
    }

    /// Convert into a `k256` signature for verification.
    ///
    /// Fails when R or S is not a valid nonzero scalar below the curve order.
    pub fn to_k256(&self) -> Result<ecdsa::Signature, PrimitivesError> {
        let fixed = self.to_fixed_length();
        ecdsa::Signature::from_slice(&fixed)
            .map_err(|e| PrimitivesError::InvalidSignature(e.to_string()))
    }
}

impl From<&ecdsa::Signature> for Secp256k1Signature {
    fn from(sig: &ecdsa::Signature) -> Self {
        let bytes = sig.to_bytes();
        let mut fixed = [0u8; FIXED_LENGTH_SIGNATURE_LEN];
        fixed.copy_from_slice(&bytes);
        // k256 never yields a zero r or s, so the unpacked form is already valid.
        let (r, s) = unpack_fixed_length(&fixed);
        Secp256k1Signature { r, s }
    }
}

/// Strip leading zero bytes from a big-endian integer, keeping one byte for zero.
fn minimal_int(val: &[u8]) -> Vec<u8> {
    match val.iter().position(|&b| b != 0) {
        Some(start) => val[start..].to_vec(),
        None => vec![0x00],
    }
}

fn check_unpadded(name: &str, val: &[u8]) -> Result<(), PrimitivesError> {
    if val.is_empty() || val.len() > SCALAR_LEN || val[0] == 0x00 {
        tracing::debug!(component = name, len = val.len(), "rejecting padded signature integer");
        return Err(PrimitivesError::InvalidSignature(format!(
            "unsigned integer {} must be encoded as unpadded big endian",
            name
        )));
    }
    Ok(())
}

/// Prefix a 0x00 byte when the high bit is set so DER reads the integer as positive.
fn der_int(val: &[u8]) -> Vec<u8> {
    if val[0] & 0x80 != 0 {
        let mut out = Vec::with_capacity(val.len() + 1);
        out.push(0x00);
        out.extend_from_slice(val);
        out
    } else {
        val.to_vec()
    }
}
