// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — Exponential ElGamal
// Licensed under the MIT License

use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Length of a canonical Ristretto255 scalar encoding in bytes (little-endian).
pub const SCALAR_LENGTH: usize = 32;
/// Length of a canonical Ristretto255 point encoding in bytes.
pub const POINT_LENGTH: usize = 32;
/// Length of a SHA-512 digest in bytes.
pub const HASH_LENGTH: usize = 64;
/// Length of the uniform string fed into the Ristretto255 one-way map.
pub const UNIFORM_BYTES_LENGTH: usize = 64;
/// Number of random bytes reduced modulo the group order to draw a scalar.
pub const WIDE_SCALAR_LENGTH: usize = 64;

/// Length of a serialized public key record (`g || y`).
pub const PUBLIC_KEY_RECORD_LENGTH: usize = 2 * POINT_LENGTH;
/// Length of a serialized ciphertext record (`u || e`).
pub const CIPHERTEXT_RECORD_LENGTH: usize = 2 * POINT_LENGTH;

/// Upper bound on hash-to-point probes before giving up.
pub const MAX_HASH_TO_POINT_ATTEMPTS: u8 = 8;
/// Maximum domain separation tag length accepted by `expand_message_xmd`.
pub const MAX_DST_LENGTH: usize = 255;

const _: () = assert!(SCALAR_LENGTH == POINT_LENGTH);
const _: () = assert!(UNIFORM_BYTES_LENGTH == HASH_LENGTH);
const _: () = assert!(PUBLIC_KEY_RECORD_LENGTH == 64);
const _: () = assert!(CIPHERTEXT_RECORD_LENGTH == 64);

/// Ristretto255 group order `L = 2^252 + 27742317777372353535851937790883648493`, little-endian.
pub const GROUP_ORDER: [u8; SCALAR_LENGTH] = [
    0xed, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58, 0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9, 0xde, 0x14,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10,
];

/// Canonical encoding of the Ristretto255 base point.
pub const GENERATOR: [u8; POINT_LENGTH] = [
    0xe2, 0xf2, 0xae, 0x0a, 0x6a, 0xbc, 0x4e, 0x71, 0xa8, 0x84, 0xa9, 0x61, 0xc5, 0x00, 0x51, 0x5f,
    0x58, 0xe3, 0x0b, 0x6a, 0xa5, 0x82, 0xdd, 0x8d, 0xb6, 0xa6, 0x59, 0x45, 0xe0, 0x8d, 0x2d, 0x76,
];

/// Domain-separation labels.
pub mod labels {
    /// Default DST for encoding messages as group elements.
    pub const HASH_TO_POINT_DST: &[u8] = b"EXP-ELGAMAL-v1-ristretto255_XMD:SHA-512_R255MAP_RO_";
    /// Suffix appended to the DST when a probe lands on the identity and is retried.
    pub const HASH_TO_POINT_RETRY: &[u8] = b"-RETRY";
}

/// Enumerates all error conditions of the ElGamal core.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ElGamalError {
    /// A parameter has an invalid value or length at the call boundary.
    #[error("invalid input parameter")]
    InvalidInput,
    /// Point or scalar bytes are malformed, non-canonical, the identity or zero.
    #[error("malformed or non-canonical point or scalar encoding")]
    InvalidEncoding,
    /// The random source failed to produce bytes.
    #[error("randomness source unavailable")]
    RandomnessUnavailable,
    /// Hash-to-point found no valid point within the probe bound.
    #[error("hash-to-point exhausted its probe attempts")]
    EncodingExhausted,
    /// A low-level arithmetic primitive returned an error code.
    #[error("group operation failed")]
    OperationFailed,
}

impl ElGamalError {
    /// Converts this error variant into a negative `i32` status code suitable for C FFI.
    pub fn to_c_int(self) -> i32 {
        match self {
            ElGamalError::InvalidInput => -1,
            ElGamalError::InvalidEncoding => -2,
            ElGamalError::RandomnessUnavailable => -3,
            ElGamalError::EncodingExhausted => -4,
            ElGamalError::OperationFailed => -5,
        }
    }
}

/// Convenience alias for `Result<T, ElGamalError>`.
pub type ElGamalResult<T> = Result<T, ElGamalError>;

/// A heap-allocated byte buffer that is zeroized on drop.
///
/// Outputs handed across the C boundary are staged in this type so that
/// scalar material is scrubbed whenever a buffer is released.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SecureBytes(Vec<u8>);

impl SecureBytes {
    /// Creates a buffer by copying the given slice.
    pub fn from_slice(data: &[u8]) -> Self {
        Self(data.to_vec())
    }

    /// Moves the bytes out as a boxed slice, leaving this buffer empty.
    ///
    /// The caller takes over responsibility for scrubbing the returned memory.
    pub fn into_boxed_slice(mut self) -> Box<[u8]> {
        std::mem::take(&mut self.0).into_boxed_slice()
    }
}

impl std::fmt::Debug for SecureBytes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureBytes([REDACTED; {}])", self.0.len())
    }
}

/// Compares two byte slices in constant time using libsodium's `sodium_memcmp`.
///
/// Returns `true` if the slices are equal, `false` otherwise. If the lengths
/// differ, returns `false` immediately (length itself is not secret).
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    // SAFETY: Both pointers come from valid slices. Length equality is verified before the call.
    unsafe {
        libsodium_sys::sodium_memcmp(
            a.as_ptr() as *const _,
            b.as_ptr() as *const _,
            a.len(),
        ) == 0
    }
}

/// Returns `true` if every byte in `data` is zero, checked in constant time.
pub fn is_all_zero(data: &[u8]) -> bool {
    // SAFETY: Pointer comes from a valid slice.
    unsafe { libsodium_sys::sodium_is_zero(data.as_ptr(), data.len()) == 1 }
}
