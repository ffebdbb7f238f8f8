// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — Exponential ElGamal
// Licensed under the MIT License

use crate::crypto::RandomSource;
use crate::group::{Point, Scalar};
use crate::protocol;
use crate::types::{
    constant_time_eq, ElGamalError, ElGamalResult, POINT_LENGTH, PUBLIC_KEY_RECORD_LENGTH,
};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// ElGamal public key `(g, y = g^x)`.
///
/// `g` is carried explicitly so that parties can agree on a generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PublicKey {
    g: Point,
    y: Point,
}

impl PublicKey {
    /// Builds a public key from already-validated points.
    pub fn new(g: Point, y: Point) -> Self {
        Self { g, y }
    }

    /// Decodes a public key from its two point encodings.
    ///
    /// # Errors
    ///
    /// Returns [`ElGamalError::InvalidEncoding`] if either point is invalid.
    pub fn from_bytes(g: &[u8], y: &[u8]) -> ElGamalResult<Self> {
        Ok(Self {
            g: Point::decode(g)?,
            y: Point::decode(y)?,
        })
    }

    /// Parses a `g || y` record.
    ///
    /// # Errors
    ///
    /// Returns [`ElGamalError::InvalidInput`] on a length mismatch and
    /// [`ElGamalError::InvalidEncoding`] if either point is invalid.
    pub fn from_record(record: &[u8]) -> ElGamalResult<Self> {
        let parsed = protocol::parse_public_key(record)?;
        Self::from_bytes(parsed.g, parsed.y)
    }

    /// Serializes to a `g || y` record.
    pub fn to_record(&self) -> [u8; PUBLIC_KEY_RECORD_LENGTH] {
        let mut record = [0u8; PUBLIC_KEY_RECORD_LENGTH];
        record[..POINT_LENGTH].copy_from_slice(self.g.as_bytes());
        record[POINT_LENGTH..].copy_from_slice(self.y.as_bytes());
        record
    }

    /// The generator `g`.
    pub fn g(&self) -> &Point {
        &self.g
    }

    /// The public component `y = g^x`.
    pub fn y(&self) -> &Point {
        &self.y
    }
}

/// ElGamal private key `x`.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey {
    x: Scalar,
}

impl PrivateKey {
    /// Wraps a secret scalar.
    pub fn new(x: Scalar) -> Self {
        Self { x }
    }

    /// # Errors
    ///
    /// Returns [`ElGamalError::InvalidEncoding`] if `x` is not a canonical non-zero scalar.
    pub fn from_bytes(x: &[u8]) -> ElGamalResult<Self> {
        Ok(Self {
            x: Scalar::decode(x)?,
        })
    }

    /// The secret exponent `x`.
    pub fn x(&self) -> &Scalar {
        &self.x
    }
}

impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PrivateKey([REDACTED])")
    }
}

/// A matching public/private key pair.
#[derive(Clone, Debug, Zeroize, ZeroizeOnDrop)]
pub struct KeyPair {
    #[zeroize(skip)]
    pub public_key: PublicKey,
    pub private_key: PrivateKey,
}

impl KeyPair {
    /// Generates a fresh key pair over the canonical generator using the OS random source.
    ///
    /// # Errors
    ///
    /// Returns [`ElGamalError::RandomnessUnavailable`] or
    /// [`ElGamalError::OperationFailed`] if a primitive fails.
    pub fn generate() -> ElGamalResult<Self> {
        let mut rng = rand::rngs::OsRng;
        Self::generate_with_rng(&mut rng)
    }

    /// Generates a fresh key pair drawing `x` from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`ElGamalError::RandomnessUnavailable`] or
    /// [`ElGamalError::OperationFailed`] if a primitive fails.
    pub fn generate_with_rng<R: RandomSource + ?Sized>(rng: &mut R) -> ElGamalResult<Self> {
        let x = Scalar::random_with_rng(rng)?;
        Self::from_private_key(Point::generator(), PrivateKey::new(x))
    }

    /// Derives the public key `y = g^x` for an existing private key.
    ///
    /// # Errors
    ///
    /// Returns [`ElGamalError::OperationFailed`] if the multiplication fails.
    pub fn from_private_key(g: Point, private_key: PrivateKey) -> ElGamalResult<Self> {
        let y = g.mul(private_key.x())?;
        Ok(Self {
            public_key: PublicKey::new(g, y),
            private_key,
        })
    }

    /// Rebuilds a key pair from stored keys, checking `y == g^x`.
    ///
    /// # Errors
    ///
    /// Returns [`ElGamalError::InvalidInput`] if the keys do not match.
    pub fn from_keys(public_key: PublicKey, private_key: PrivateKey) -> ElGamalResult<Self> {
        let derived = public_key.g().mul(private_key.x())?;
        if !constant_time_eq(derived.as_bytes(), public_key.y().as_bytes()) {
            return Err(ElGamalError::InvalidInput);
        }
        Ok(Self {
            public_key,
            private_key,
        })
    }
}

/// Generates a key pair `(pk, sk)` with `pk = (g, g^x)`, `g` the canonical generator.
///
/// # Errors
///
/// Returns [`ElGamalError::RandomnessUnavailable`] or
/// [`ElGamalError::OperationFailed`] if a primitive fails.
pub fn generate_key_pair() -> ElGamalResult<KeyPair> {
    KeyPair::generate()
}

/// Like [`generate_key_pair`], drawing randomness from `rng`.
///
/// # Errors
///
/// See [`generate_key_pair`].
pub fn generate_key_pair_with_rng<R: RandomSource + ?Sized>(rng: &mut R) -> ElGamalResult<KeyPair> {
    KeyPair::generate_with_rng(rng)
}

/// Generates a fresh blinding exponent, independent of any key material.
///
/// # Errors
///
/// Returns [`ElGamalError::RandomnessUnavailable`] if the OS source fails.
pub fn generate_secret() -> ElGamalResult<Scalar> {
    Scalar::random()
}

/// Like [`generate_secret`], drawing randomness from `rng`.
///
/// # Errors
///
/// Returns [`ElGamalError::RandomnessUnavailable`] if the source fails.
pub fn generate_secret_with_rng<R: RandomSource + ?Sized>(rng: &mut R) -> ElGamalResult<Scalar> {
    Scalar::random_with_rng(rng)
}
