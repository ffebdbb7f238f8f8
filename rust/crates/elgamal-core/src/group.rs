// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — Exponential ElGamal
// Licensed under the MIT License

use crate::crypto::{self, RandomSource};
use crate::types::{
    constant_time_eq, ElGamalError, ElGamalResult, GENERATOR, POINT_LENGTH, SCALAR_LENGTH,
};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A non-identity Ristretto255 group element held in its canonical encoding.
///
/// Construction always validates, so every `Point` in memory decodes, and two
/// equal group elements always compare byte-identical.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point([u8; POINT_LENGTH]);

impl Point {
    /// Returns the canonical group generator.
    pub fn generator() -> Self {
        Point(GENERATOR)
    }

    /// Decodes a canonical point encoding.
    ///
    /// # Errors
    ///
    /// Returns [`ElGamalError::InvalidEncoding`] for wrong lengths, non-canonical
    /// encodings and the identity.
    pub fn decode(bytes: &[u8]) -> ElGamalResult<Self> {
        crypto::validate_point(bytes)?;
        let mut point = [0u8; POINT_LENGTH];
        point.copy_from_slice(bytes);
        Ok(Point(point))
    }

    /// Returns the canonical encoding.
    pub fn encode(&self) -> [u8; POINT_LENGTH] {
        self.0
    }

    /// Borrows the canonical encoding.
    pub fn as_bytes(&self) -> &[u8; POINT_LENGTH] {
        &self.0
    }

    /// Group operation `self + other`.
    ///
    /// # Errors
    ///
    /// Returns [`ElGamalError::OperationFailed`] if the sum is the identity.
    pub fn add(&self, other: &Point) -> ElGamalResult<Point> {
        crypto::point_add(&self.0, &other.0).map(Point)
    }

    /// Group operation `self - other`.
    ///
    /// # Errors
    ///
    /// Returns [`ElGamalError::OperationFailed`] if the difference is the identity.
    pub fn sub(&self, other: &Point) -> ElGamalResult<Point> {
        crypto::point_sub(&self.0, &other.0).map(Point)
    }

    /// Constant-time scalar multiplication `k * self`.
    ///
    /// # Errors
    ///
    /// Returns [`ElGamalError::OperationFailed`] if libsodium rejects the operation.
    pub fn mul(&self, k: &Scalar) -> ElGamalResult<Point> {
        crypto::scalar_mult(&k.0, &self.0).map(Point)
    }
}

impl std::fmt::Debug for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Point(")?;
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        write!(f, ")")
    }
}

/// A non-zero scalar modulo the Ristretto255 group order, little-endian.
///
/// Zeroized on drop; `Debug` is redacted and equality is constant time.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Scalar([u8; SCALAR_LENGTH]);

impl Scalar {
    /// Draws a fresh uniformly random non-zero scalar from the operating system.
    ///
    /// # Errors
    ///
    /// Returns [`ElGamalError::RandomnessUnavailable`] if the OS source fails.
    pub fn random() -> ElGamalResult<Self> {
        let mut rng = rand::rngs::OsRng;
        Self::random_with_rng(&mut rng)
    }

    /// Draws a fresh uniformly random non-zero scalar from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`ElGamalError::RandomnessUnavailable`] if the source fails.
    pub fn random_with_rng<R: RandomSource + ?Sized>(rng: &mut R) -> ElGamalResult<Self> {
        crypto::random_nonzero_scalar(rng).map(Scalar)
    }

    /// Decodes a canonical scalar encoding.
    ///
    /// # Errors
    ///
    /// Returns [`ElGamalError::InvalidEncoding`] for wrong lengths, values
    /// not below the group order, and zero.
    pub fn decode(bytes: &[u8]) -> ElGamalResult<Self> {
        crypto::validate_scalar(bytes)?;
        let mut scalar = [0u8; SCALAR_LENGTH];
        scalar.copy_from_slice(bytes);
        Ok(Scalar(scalar))
    }

    /// Builds a scalar from a small integer.
    ///
    /// # Errors
    ///
    /// Returns [`ElGamalError::InvalidEncoding`] if `value` is zero.
    pub fn from_u64(value: u64) -> ElGamalResult<Self> {
        let mut scalar = [0u8; SCALAR_LENGTH];
        scalar[..8].copy_from_slice(&value.to_le_bytes());
        Self::decode(&scalar)
    }

    /// Returns a copy of the canonical encoding. The caller owns its scrubbing.
    pub fn encode(&self) -> [u8; SCALAR_LENGTH] {
        self.0
    }

    /// Borrows the encoding without copying secret bytes.
    pub fn as_bytes(&self) -> &[u8; SCALAR_LENGTH] {
        &self.0
    }

    /// Product `self * other mod n`.
    ///
    /// The product of two non-zero scalars modulo a prime is non-zero.
    pub fn mul(&self, other: &Scalar) -> Scalar {
        Scalar(crypto::scalar_mul(&self.0, &other.0))
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        constant_time_eq(&self.0, &other.0)
    }
}

impl Eq for Scalar {}

impl std::fmt::Debug for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Scalar([REDACTED])")
    }
}

impl TryFrom<&[u8]> for Scalar {
    type Error = ElGamalError;

    fn try_from(bytes: &[u8]) -> ElGamalResult<Self> {
        Scalar::decode(bytes)
    }
}

impl TryFrom<&[u8]> for Point {
    type Error = ElGamalError;

    fn try_from(bytes: &[u8]) -> ElGamalResult<Self> {
        Point::decode(bytes)
    }
}
