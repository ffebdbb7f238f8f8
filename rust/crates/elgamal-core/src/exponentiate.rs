// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — Exponential ElGamal
// Licensed under the MIT License

use crate::elgamal::Ciphertext;
use crate::group::{Point, Scalar};
use crate::keys::PublicKey;
use crate::types::ElGamalResult;

/// Raises both ciphertext components to `k`: `(u^k, e^k)`.
///
/// Decrypting the result under the same private key yields `M^k`, so repeated
/// application composes: exponentiating by `k1` then `k2` equals a single
/// exponentiation by `k1 * k2 mod n`. `_public_key` is validated by its type
/// but does not enter the arithmetic.
///
/// # Errors
///
/// Returns [`crate::ElGamalError::OperationFailed`] if the arithmetic fails.
pub fn exponentiate_on_ciphertext(
    ciphertext: &Ciphertext,
    _public_key: &PublicKey,
    k: &Scalar,
) -> ElGamalResult<Ciphertext> {
    let u = ciphertext.u().mul(k)?;
    let e = ciphertext.e().mul(k)?;
    Ok(Ciphertext::new(u, e))
}

/// Decodes `point` and returns `point^k`.
///
/// This is the commutative blinding step: applying `a` then `b` gives the
/// same point as applying `b` then `a`.
///
/// # Errors
///
/// Returns [`crate::ElGamalError::InvalidEncoding`] if `point` is not a canonical,
/// non-identity encoding.
pub fn exponentiate_on_point(point: &[u8], k: &Scalar) -> ElGamalResult<Point> {
    let point = Point::decode(point)?;
    exponentiate_on_element(&point, k)
}

/// Typed form of [`exponentiate_on_point`].
///
/// # Errors
///
/// Returns [`crate::ElGamalError::OperationFailed`] if the arithmetic fails.
pub fn exponentiate_on_element(point: &Point, k: &Scalar) -> ElGamalResult<Point> {
    point.mul(k)
}
