// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — Exponential ElGamal
// Licensed under the MIT License

use crate::crypto;
use crate::group::Point;
use crate::types::{
    is_all_zero, labels, ElGamalError, ElGamalResult, HASH_LENGTH, MAX_DST_LENGTH,
    MAX_HASH_TO_POINT_ATTEMPTS, POINT_LENGTH, UNIFORM_BYTES_LENGTH,
};
use zeroize::Zeroize;

/// SHA-512 input block size (`s_in_bytes`).
const SHA512_BLOCK_LENGTH: usize = 128;
/// Largest `len_in_bytes` allowed by expand_message_xmd with SHA-512.
const MAX_EXPAND_LENGTH: usize = 255 * HASH_LENGTH;

/// `expand_message_xmd` (RFC 9380, section 5.3.1) instantiated with SHA-512.
///
/// Fills `out` with `out.len()` pseudo-random bytes bound to `msg` and `dst`.
///
/// # Errors
///
/// Returns [`ElGamalError::InvalidInput`] if `out` is empty or longer than
/// `255 * 64` bytes, or if `dst` is empty or longer than 255 bytes.
pub fn expand_message_xmd(msg: &[u8], dst: &[u8], out: &mut [u8]) -> ElGamalResult<()> {
    if out.is_empty() || out.len() > MAX_EXPAND_LENGTH {
        return Err(ElGamalError::InvalidInput);
    }
    if dst.is_empty() || dst.len() > MAX_DST_LENGTH {
        return Err(ElGamalError::InvalidInput);
    }

    let ell = out.len().div_ceil(HASH_LENGTH);
    let dst_len = [dst.len() as u8];
    let len_in_bytes = (out.len() as u16).to_be_bytes();
    let z_pad = [0u8; SHA512_BLOCK_LENGTH];

    let mut b_0 = [0u8; HASH_LENGTH];
    crypto::sha512_multi(
        &[&z_pad, msg, &len_in_bytes, &[0u8], dst, &dst_len],
        &mut b_0,
    );

    let mut b_i = [0u8; HASH_LENGTH];
    crypto::sha512_multi(&[&b_0, &[1u8], dst, &dst_len], &mut b_i);

    let mut chained = [0u8; HASH_LENGTH];
    for i in 1..=ell {
        let offset = (i - 1) * HASH_LENGTH;
        let take = std::cmp::min(HASH_LENGTH, out.len() - offset);
        out[offset..offset + take].copy_from_slice(&b_i[..take]);

        if i < ell {
            for (c, (x, y)) in chained.iter_mut().zip(b_0.iter().zip(b_i.iter())) {
                *c = x ^ y;
            }
            crypto::sha512_multi(&[&chained, &[(i + 1) as u8], dst, &dst_len], &mut b_i);
        }
    }

    b_0.zeroize();
    b_i.zeroize();
    chained.zeroize();
    Ok(())
}

/// Encodes `message` as a group element under the default domain.
///
/// Deterministic across calls and processes. Accepts messages of any length,
/// including the empty message.
///
/// # Errors
///
/// Returns [`ElGamalError::EncodingExhausted`] if every probe lands on the identity.
pub fn hash_to_point(message: &[u8]) -> ElGamalResult<Point> {
    hash_to_point_with_dst(message, labels::HASH_TO_POINT_DST)
}

/// Encodes `message` as a group element under a caller-chosen domain separation tag.
///
/// The first probe is exactly `hash_to_ristretto255(message, dst)`. Further probes,
/// taken only when a probe maps to the identity, use `dst || "-RETRY" || attempt`.
///
/// # Errors
///
/// Returns [`ElGamalError::InvalidInput`] if `dst` is empty or too long to carry
/// the retry suffix.
/// Returns [`ElGamalError::EncodingExhausted`] if no probe yields a non-identity point.
pub fn hash_to_point_with_dst(message: &[u8], dst: &[u8]) -> ElGamalResult<Point> {
    if dst.is_empty() || dst.len() + labels::HASH_TO_POINT_RETRY.len() + 1 > MAX_DST_LENGTH {
        return Err(ElGamalError::InvalidInput);
    }

    let mut probe_dst = Vec::with_capacity(dst.len() + labels::HASH_TO_POINT_RETRY.len() + 1);
    let point = probe_for_point(|attempt| {
        probe_dst.clear();
        probe_dst.extend_from_slice(dst);
        if attempt > 0 {
            probe_dst.extend_from_slice(labels::HASH_TO_POINT_RETRY);
            probe_dst.push(attempt);
        }

        let mut uniform = [0u8; UNIFORM_BYTES_LENGTH];
        expand_message_xmd(message, &probe_dst, &mut uniform)?;
        let candidate = crypto::point_from_uniform(&uniform);
        uniform.zeroize();
        candidate
    })?;
    Point::decode(&point)
}

/// Runs `map` for attempts `0..MAX_HASH_TO_POINT_ATTEMPTS` until it yields a
/// non-identity encoding.
fn probe_for_point<F>(mut map: F) -> ElGamalResult<[u8; POINT_LENGTH]>
where
    F: FnMut(u8) -> ElGamalResult<[u8; POINT_LENGTH]>,
{
    for attempt in 0..MAX_HASH_TO_POINT_ATTEMPTS {
        let candidate = map(attempt)?;
        if !is_all_zero(&candidate) {
            return Ok(candidate);
        }
    }
    Err(ElGamalError::EncodingExhausted)
}
