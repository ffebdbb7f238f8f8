// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — Exponential ElGamal
// Licensed under the MIT License

//! Exponential ElGamal encryption of hashed messages.
//!
//! A message is first encoded as the point `M = H(message)`; encryption under
//! `(g, y)` with randomness `r` yields `(u, e) = (g^r, M + y^r)`. Decryption
//! recovers `M`, never the message bytes, so callers compare the result with
//! [`hash_to_point`] of a candidate. Decrypting with the wrong key is not an
//! error: it silently yields an unrelated point.

use crate::crypto::RandomSource;
use crate::group::{Point, Scalar};
use crate::hash_to_curve::hash_to_point;
use crate::keys::{PrivateKey, PublicKey};
use crate::protocol;
use crate::types::{ElGamalResult, CIPHERTEXT_RECORD_LENGTH, POINT_LENGTH};

/// An ElGamal ciphertext `(u, e)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ciphertext {
    u: Point,
    e: Point,
}

impl Ciphertext {
    /// Builds a ciphertext from already-validated points.
    pub fn new(u: Point, e: Point) -> Self {
        Self { u, e }
    }

    /// Decodes a ciphertext from its two point encodings.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ElGamalError::InvalidEncoding`] if either point is invalid.
    pub fn from_bytes(u: &[u8], e: &[u8]) -> ElGamalResult<Self> {
        Ok(Self {
            u: Point::decode(u)?,
            e: Point::decode(e)?,
        })
    }

    /// Parses a `u || e` record.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ElGamalError::InvalidInput`] on a length mismatch and
    /// [`crate::ElGamalError::InvalidEncoding`] if either point is invalid.
    pub fn from_record(record: &[u8]) -> ElGamalResult<Self> {
        let parsed = protocol::parse_ciphertext(record)?;
        Self::from_bytes(parsed.u, parsed.e)
    }

    /// Serializes to a `u || e` record.
    pub fn to_record(&self) -> [u8; CIPHERTEXT_RECORD_LENGTH] {
        let mut record = [0u8; CIPHERTEXT_RECORD_LENGTH];
        record[..POINT_LENGTH].copy_from_slice(self.u.as_bytes());
        record[POINT_LENGTH..].copy_from_slice(self.e.as_bytes());
        record
    }

    /// The ephemeral component `u = g^r`.
    pub fn u(&self) -> &Point {
        &self.u
    }

    /// The masked message component `e = M + y^r`.
    pub fn e(&self) -> &Point {
        &self.e
    }
}

/// Encrypts `message` under `public_key` with fresh OS randomness.
///
/// # Errors
///
/// Fails with the error of the first primitive that fails (hash-to-point,
/// randomness, or group arithmetic). Message content never causes a failure.
pub fn encrypt(message: &[u8], public_key: &PublicKey) -> ElGamalResult<Ciphertext> {
    let mut rng = rand::rngs::OsRng;
    encrypt_with_rng(message, public_key, &mut rng)
}

/// Encrypts `message` under `public_key`, drawing `r` from `rng`.
///
/// # Errors
///
/// See [`encrypt`].
pub fn encrypt_with_rng<R: RandomSource + ?Sized>(
    message: &[u8],
    public_key: &PublicKey,
    rng: &mut R,
) -> ElGamalResult<Ciphertext> {
    let r = Scalar::random_with_rng(rng)?;
    encrypt_with_r(message, public_key, &r)
}

/// Encrypts `message` under `public_key` with caller-supplied randomness `r`.
///
/// Reusing `r` across messages links the ciphertexts; only use a fresh `r`.
///
/// # Errors
///
/// See [`encrypt`].
pub fn encrypt_with_r(
    message: &[u8],
    public_key: &PublicKey,
    r: &Scalar,
) -> ElGamalResult<Ciphertext> {
    let m = hash_to_point(message)?;
    let u = public_key.g().mul(r)?;
    let shared = public_key.y().mul(r)?;
    let e = m.add(&shared)?;
    Ok(Ciphertext { u, e })
}

/// Recovers the message point `M = e - u^x`.
///
/// # Errors
///
/// Returns [`crate::ElGamalError::OperationFailed`] if the arithmetic fails.
/// A mismatched key is not detected.
pub fn decrypt(ciphertext: &Ciphertext, private_key: &PrivateKey) -> ElGamalResult<Point> {
    let shared = ciphertext.u().mul(private_key.x())?;
    ciphertext.e().sub(&shared)
}
