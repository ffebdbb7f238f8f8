// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — Exponential ElGamal FFI Bindings
// Licensed under the MIT License

use elgamal_core::types::{ElGamalError, ElGamalResult, SecureBytes};
use elgamal_core::{
    decrypt, encrypt, exponentiate_on_ciphertext, exponentiate_on_point, generate_key_pair,
    generate_secret, hash_to_point, Ciphertext, Point, PrivateKey, PublicKey, Scalar,
};

use crate::buffer::ElGamalBuffer;
use crate::report;

/// Borrows `len` bytes at `ptr`. A null pointer is accepted only when `len` is zero.
unsafe fn input<'a>(ptr: *const u8, len: usize) -> ElGamalResult<&'a [u8]> {
    if len == 0 {
        return Ok(&[]);
    }
    if ptr.is_null() {
        return Err(ElGamalError::InvalidInput);
    }
    Ok(std::slice::from_raw_parts(ptr, len))
}

/// An output slot is usable when it is non-null and owns nothing yet.
unsafe fn writable(out: *mut ElGamalBuffer) -> bool {
    out.as_ref().map_or(false, |buffer| buffer.data.is_null())
}

fn point_buffer(point: &Point) -> ElGamalBuffer {
    ElGamalBuffer::from_slice(point.as_bytes())
}

fn scalar_buffer(scalar: &Scalar) -> ElGamalBuffer {
    ElGamalBuffer::from_secure(SecureBytes::from_slice(scalar.as_bytes()))
}

unsafe fn write_ciphertext(
    ciphertext: &Ciphertext,
    out_u: *mut ElGamalBuffer,
    out_e: *mut ElGamalBuffer,
) {
    *out_u = point_buffer(ciphertext.u());
    *out_e = point_buffer(ciphertext.e());
}

/// Generates a key pair over the canonical generator.
///
/// On success `out_g` and `out_y` hold the public key points and `out_x` the
/// private scalar.
///
/// # Safety
///
/// All output pointers must be valid for writes and hold an empty buffer.
#[no_mangle]
pub unsafe extern "C" fn elgamal_generate_key_pair(
    out_g: *mut ElGamalBuffer,
    out_y: *mut ElGamalBuffer,
    out_x: *mut ElGamalBuffer,
) -> i32 {
    const OP: &str = "generate_key_pair";
    if !writable(out_g) || !writable(out_y) || !writable(out_x) {
        return report(OP, ElGamalError::InvalidInput);
    }
    match generate_key_pair() {
        Ok(key_pair) => {
            *out_g = point_buffer(key_pair.public_key.g());
            *out_y = point_buffer(key_pair.public_key.y());
            *out_x = scalar_buffer(key_pair.private_key.x());
            0
        }
        Err(e) => report(OP, e),
    }
}

/// Generates a uniformly random non-zero blinding secret.
///
/// # Safety
///
/// `out_secret` must be valid for writes and hold an empty buffer.
#[no_mangle]
pub unsafe extern "C" fn elgamal_generate_secret(out_secret: *mut ElGamalBuffer) -> i32 {
    const OP: &str = "generate_secret";
    if !writable(out_secret) {
        return report(OP, ElGamalError::InvalidInput);
    }
    match generate_secret() {
        Ok(secret) => {
            *out_secret = scalar_buffer(&secret);
            0
        }
        Err(e) => report(OP, e),
    }
}

/// Encrypts `message` under the public key `(g, y)`.
///
/// # Safety
///
/// Each input pointer must be valid for reads of its length; `message` may be
/// null when `message_len` is zero. Output pointers must be valid for writes
/// and hold empty buffers.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn elgamal_encrypt(
    message: *const u8,
    message_len: usize,
    g: *const u8,
    g_len: usize,
    y: *const u8,
    y_len: usize,
    out_u: *mut ElGamalBuffer,
    out_e: *mut ElGamalBuffer,
) -> i32 {
    const OP: &str = "encrypt";
    if !writable(out_u) || !writable(out_e) {
        return report(OP, ElGamalError::InvalidInput);
    }
    let result = (|| {
        let message = input(message, message_len)?;
        let public_key = PublicKey::from_bytes(input(g, g_len)?, input(y, y_len)?)?;
        encrypt(message, &public_key)
    })();
    match result {
        Ok(ciphertext) => {
            write_ciphertext(&ciphertext, out_u, out_e);
            0
        }
        Err(e) => report(OP, e),
    }
}

/// Decrypts `(u, e)` with the private scalar `x` and returns the message point.
///
/// # Safety
///
/// Each input pointer must be valid for reads of its length. `out_point` must
/// be valid for writes and hold an empty buffer.
#[no_mangle]
pub unsafe extern "C" fn elgamal_decrypt(
    u: *const u8,
    u_len: usize,
    e: *const u8,
    e_len: usize,
    x: *const u8,
    x_len: usize,
    out_point: *mut ElGamalBuffer,
) -> i32 {
    const OP: &str = "decrypt";
    if !writable(out_point) {
        return report(OP, ElGamalError::InvalidInput);
    }
    let result = (|| {
        let ciphertext = Ciphertext::from_bytes(input(u, u_len)?, input(e, e_len)?)?;
        let private_key = PrivateKey::from_bytes(input(x, x_len)?)?;
        decrypt(&ciphertext, &private_key)
    })();
    match result {
        Ok(point) => {
            *out_point = point_buffer(&point);
            0
        }
        Err(e) => report(OP, e),
    }
}

/// Raises both components of `(u, e)` to the secret `k`.
///
/// # Safety
///
/// Each input pointer must be valid for reads of its length. Output pointers
/// must be valid for writes and hold an empty buffer.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn elgamal_exponentiate_on_ciphertext(
    u: *const u8,
    u_len: usize,
    e: *const u8,
    e_len: usize,
    g: *const u8,
    g_len: usize,
    y: *const u8,
    y_len: usize,
    k: *const u8,
    k_len: usize,
    out_u: *mut ElGamalBuffer,
    out_e: *mut ElGamalBuffer,
) -> i32 {
    const OP: &str = "exponentiate_on_ciphertext";
    if !writable(out_u) || !writable(out_e) {
        return report(OP, ElGamalError::InvalidInput);
    }
    let result = (|| {
        let ciphertext = Ciphertext::from_bytes(input(u, u_len)?, input(e, e_len)?)?;
        let public_key = PublicKey::from_bytes(input(g, g_len)?, input(y, y_len)?)?;
        let k = Scalar::decode(input(k, k_len)?)?;
        exponentiate_on_ciphertext(&ciphertext, &public_key, &k)
    })();
    match result {
        Ok(ciphertext) => {
            write_ciphertext(&ciphertext, out_u, out_e);
            0
        }
        Err(e) => report(OP, e),
    }
}

/// Raises an encoded point to the secret `k`.
///
/// # Safety
///
/// Each input pointer must be valid for reads of its length. `out_point` must
/// be valid for writes and hold an empty buffer.
#[no_mangle]
pub unsafe extern "C" fn elgamal_exponentiate_on_point(
    point: *const u8,
    point_len: usize,
    k: *const u8,
    k_len: usize,
    out_point: *mut ElGamalBuffer,
) -> i32 {
    const OP: &str = "exponentiate_on_point";
    if !writable(out_point) {
        return report(OP, ElGamalError::InvalidInput);
    }
    let result = (|| {
        let point = input(point, point_len)?;
        let k = Scalar::decode(input(k, k_len)?)?;
        exponentiate_on_point(point, &k)
    })();
    match result {
        Ok(point) => {
            *out_point = point_buffer(&point);
            0
        }
        Err(e) => report(OP, e),
    }
}

/// Deterministically encodes `message` as a group element.
///
/// # Safety
///
/// `message` must be valid for reads of `message_len` bytes, or null when
/// `message_len` is zero. `out_point` must be valid for writes and hold an
/// empty buffer.
#[no_mangle]
pub unsafe extern "C" fn elgamal_hash_to_point(
    message: *const u8,
    message_len: usize,
    out_point: *mut ElGamalBuffer,
) -> i32 {
    const OP: &str = "hash_to_point";
    if !writable(out_point) {
        return report(OP, ElGamalError::InvalidInput);
    }
    let point = match input(message, message_len).and_then(hash_to_point) {
        Ok(point) => point,
        Err(e) => return report(OP, e),
    };
    *out_point = point_buffer(&point);
    0
}
