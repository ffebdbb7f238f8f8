// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — Exponential ElGamal
// Licensed under the MIT License

use crate::types::{
    is_all_zero, ElGamalError, ElGamalResult, GROUP_ORDER, HASH_LENGTH, POINT_LENGTH,
    SCALAR_LENGTH, WIDE_SCALAR_LENGTH,
};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// A cryptographically secure random source.
///
/// Every randomised operation takes one of these explicitly, so tests can
/// substitute a seeded generator. `rand::rngs::OsRng` is the production source.
pub trait RandomSource: RngCore + CryptoRng {}

impl<T: RngCore + CryptoRng + ?Sized> RandomSource for T {}

/// Initializes libsodium.
///
/// Safe to call more than once and from several threads.
///
/// # Errors
///
/// Returns [`ElGamalError::OperationFailed`] if libsodium cannot initialize.
pub fn init() -> ElGamalResult<()> {
    // SAFETY: sodium_init is documented as thread-safe and idempotent.
    if unsafe { libsodium_sys::sodium_init() } < 0 {
        return Err(ElGamalError::OperationFailed);
    }
    Ok(())
}

/// Fills `buf` with bytes drawn from `rng`.
///
/// # Errors
///
/// Returns [`ElGamalError::InvalidInput`] if `buf` is empty.
/// Returns [`ElGamalError::RandomnessUnavailable`] if the source fails.
pub fn random_bytes<R: RandomSource + ?Sized>(rng: &mut R, buf: &mut [u8]) -> ElGamalResult<()> {
    if buf.is_empty() {
        return Err(ElGamalError::InvalidInput);
    }
    rng.try_fill_bytes(buf)
        .map_err(|_| ElGamalError::RandomnessUnavailable)
}

/// Draws a uniformly random, non-zero Ristretto255 scalar.
///
/// 64 random bytes are reduced modulo the group order, so the bias is
/// below 2^-250. Loops until a non-zero scalar is obtained (overwhelmingly
/// likely on the first try).
///
/// # Errors
///
/// Returns [`ElGamalError::RandomnessUnavailable`] if the source fails.
pub fn random_nonzero_scalar<R: RandomSource + ?Sized>(
    rng: &mut R,
) -> ElGamalResult<[u8; SCALAR_LENGTH]> {
    let mut wide = [0u8; WIDE_SCALAR_LENGTH];
    loop {
        random_bytes(rng, &mut wide)?;
        let mut scalar = [0u8; SCALAR_LENGTH];
        // SAFETY: wide is 64 bytes and scalar is 32 bytes, as scalar_reduce requires.
        unsafe {
            libsodium_sys::crypto_core_ristretto255_scalar_reduce(
                scalar.as_mut_ptr(),
                wide.as_ptr(),
            );
        }
        if !is_all_zero(&scalar) {
            wide.zeroize();
            return Ok(scalar);
        }
    }
}

/// Validates that `point` is a canonical, non-identity Ristretto255 encoding.
///
/// # Errors
///
/// Returns [`ElGamalError::InvalidEncoding`] if `point` has the wrong length,
/// is the identity, or is not a canonical Ristretto255 encoding.
pub fn validate_point(point: &[u8]) -> ElGamalResult<()> {
    if point.len() != POINT_LENGTH {
        return Err(ElGamalError::InvalidEncoding);
    }
    if is_all_zero(point) {
        return Err(ElGamalError::InvalidEncoding);
    }
    // SAFETY: Pointer comes from a valid slice of POINT_LENGTH bytes.
    unsafe {
        if libsodium_sys::crypto_core_ristretto255_is_valid_point(point.as_ptr()) != 1 {
            return Err(ElGamalError::InvalidEncoding);
        }
    }
    Ok(())
}

/// Validates that `scalar` is a canonical (`< L`), non-zero little-endian scalar.
///
/// Both checks run in constant time.
///
/// # Errors
///
/// Returns [`ElGamalError::InvalidEncoding`] if `scalar` has the wrong length,
/// is not reduced modulo the group order, or is zero.
pub fn validate_scalar(scalar: &[u8]) -> ElGamalResult<()> {
    if scalar.len() != SCALAR_LENGTH {
        return Err(ElGamalError::InvalidEncoding);
    }
    // SAFETY: Both pointers reference SCALAR_LENGTH valid bytes.
    let below_order = unsafe {
        libsodium_sys::sodium_compare(scalar.as_ptr(), GROUP_ORDER.as_ptr(), SCALAR_LENGTH) == -1
    };
    if !below_order || is_all_zero(scalar) {
        return Err(ElGamalError::InvalidEncoding);
    }
    Ok(())
}

/// Computes `p + q` in the Ristretto255 group.
///
/// # Errors
///
/// Returns [`ElGamalError::InvalidEncoding`] if either operand is invalid.
/// Returns [`ElGamalError::OperationFailed`] if libsodium rejects the operands
/// or the sum is the identity.
pub fn point_add(
    p: &[u8; POINT_LENGTH],
    q: &[u8; POINT_LENGTH],
) -> ElGamalResult<[u8; POINT_LENGTH]> {
    validate_point(p)?;
    validate_point(q)?;
    let mut result = [0u8; POINT_LENGTH];
    // SAFETY: All arrays are POINT_LENGTH bytes. Return code is checked.
    unsafe {
        if libsodium_sys::crypto_core_ristretto255_add(result.as_mut_ptr(), p.as_ptr(), q.as_ptr())
            != 0
        {
            return Err(ElGamalError::OperationFailed);
        }
    }
    non_identity(result)
}

/// Computes `p - q` in the Ristretto255 group.
///
/// # Errors
///
/// Returns [`ElGamalError::InvalidEncoding`] if either operand is invalid.
/// Returns [`ElGamalError::OperationFailed`] if libsodium rejects the operands
/// or the difference is the identity.
pub fn point_sub(
    p: &[u8; POINT_LENGTH],
    q: &[u8; POINT_LENGTH],
) -> ElGamalResult<[u8; POINT_LENGTH]> {
    validate_point(p)?;
    validate_point(q)?;
    let mut result = [0u8; POINT_LENGTH];
    // SAFETY: All arrays are POINT_LENGTH bytes. Return code is checked.
    unsafe {
        if libsodium_sys::crypto_core_ristretto255_sub(result.as_mut_ptr(), p.as_ptr(), q.as_ptr())
            != 0
        {
            return Err(ElGamalError::OperationFailed);
        }
    }
    non_identity(result)
}

/// Performs constant-time Ristretto255 scalar multiplication: `result = scalar * point`.
///
/// # Errors
///
/// Returns [`ElGamalError::InvalidEncoding`] if the point or scalar is invalid.
/// Returns [`ElGamalError::OperationFailed`] if the underlying libsodium call fails
/// (it refuses to return the identity).
pub fn scalar_mult(
    scalar: &[u8; SCALAR_LENGTH],
    point: &[u8; POINT_LENGTH],
) -> ElGamalResult<[u8; POINT_LENGTH]> {
    validate_point(point)?;
    validate_scalar(scalar)?;
    let mut result = [0u8; POINT_LENGTH];
    // SAFETY: All arrays are 32 bytes as required. Return code is checked.
    unsafe {
        if libsodium_sys::crypto_scalarmult_ristretto255(
            result.as_mut_ptr(),
            scalar.as_ptr(),
            point.as_ptr(),
        ) != 0
        {
            return Err(ElGamalError::OperationFailed);
        }
    }
    Ok(result)
}

/// Computes the Ristretto255 base-point multiplication: `result = scalar * G`.
///
/// # Errors
///
/// Returns [`ElGamalError::InvalidEncoding`] if the scalar is invalid.
/// Returns [`ElGamalError::OperationFailed`] if the libsodium call fails.
pub fn scalarmult_base(scalar: &[u8; SCALAR_LENGTH]) -> ElGamalResult<[u8; POINT_LENGTH]> {
    validate_scalar(scalar)?;
    let mut result = [0u8; POINT_LENGTH];
    // SAFETY: All arrays are 32 bytes as required. Return code is checked.
    unsafe {
        if libsodium_sys::crypto_scalarmult_ristretto255_base(result.as_mut_ptr(), scalar.as_ptr())
            != 0
        {
            return Err(ElGamalError::OperationFailed);
        }
    }
    Ok(result)
}

/// Multiplies two scalars modulo the group order.
pub fn scalar_mul(x: &[u8; SCALAR_LENGTH], y: &[u8; SCALAR_LENGTH]) -> [u8; SCALAR_LENGTH] {
    let mut result = [0u8; SCALAR_LENGTH];
    // SAFETY: All arrays are 32 bytes.
    unsafe {
        libsodium_sys::crypto_core_ristretto255_scalar_mul(
            result.as_mut_ptr(),
            x.as_ptr(),
            y.as_ptr(),
        );
    }
    result
}

/// Maps 64 uniform bytes to a Ristretto255 element (two Elligator maps, added).
///
/// The result may be the identity; callers decide whether that is acceptable.
///
/// # Errors
///
/// Returns [`ElGamalError::OperationFailed`] if the libsodium call fails.
pub fn point_from_uniform(uniform: &[u8; HASH_LENGTH]) -> ElGamalResult<[u8; POINT_LENGTH]> {
    let mut point = [0u8; POINT_LENGTH];
    // SAFETY: uniform is 64 bytes and point is 32 bytes. Return code is checked.
    unsafe {
        if libsodium_sys::crypto_core_ristretto255_from_hash(point.as_mut_ptr(), uniform.as_ptr())
            != 0
        {
            return Err(ElGamalError::OperationFailed);
        }
    }
    Ok(point)
}

/// Computes the SHA-512 digest of the concatenation of all `parts`.
///
/// Uses the streaming SHA-512 API to avoid allocating a contiguous buffer.
pub fn sha512_multi(parts: &[&[u8]], out: &mut [u8; HASH_LENGTH]) {
    // SAFETY: State is initialized by _init before use. Subsequent _update and _final
    // calls use the initialized state pointer.
    unsafe {
        let mut state =
            std::mem::MaybeUninit::<libsodium_sys::crypto_hash_sha512_state>::uninit();
        libsodium_sys::crypto_hash_sha512_init(state.as_mut_ptr());
        let state_ptr = state.as_mut_ptr();
        for part in parts {
            libsodium_sys::crypto_hash_sha512_update(
                state_ptr,
                part.as_ptr(),
                part.len() as u64,
            );
        }
        libsodium_sys::crypto_hash_sha512_final(state_ptr, out.as_mut_ptr());
    }
}

fn non_identity(point: [u8; POINT_LENGTH]) -> ElGamalResult<[u8; POINT_LENGTH]> {
    if is_all_zero(&point) {
        return Err(ElGamalError::OperationFailed);
    }
    Ok(point)
}
