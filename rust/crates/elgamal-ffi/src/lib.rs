// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — Exponential ElGamal FFI Bindings
// Licensed under the MIT License

//! C-compatible FFI bindings for the exponential ElGamal core.
//!
//! This crate exposes a flat C API over `elgamal-core`: key generation,
//! secret generation, encryption, decryption, the two exponentiation
//! operations and hash-to-point.
//!
//! All functions return `0` on success or a negative error code on failure.
//! Outputs are [`ElGamalBuffer`]s allocated by the callee; the caller frees
//! each one with [`elgamal_buffer_free`]. Output buffers must be empty on entry
//! (see [`ElGamalBuffer::empty`]); a buffer that still owns data is rejected
//! with `InvalidInput` rather than overwritten. Inputs are borrowed for the
//! duration of the call only. On failure no output buffer is written.
//! Callers should invoke [`elgamal_init`] once before any other function.

mod buffer;
mod elgamal_ffi;

pub use buffer::{elgamal_buffer_free, ElGamalBuffer};
pub use elgamal_ffi::{
    elgamal_decrypt, elgamal_encrypt, elgamal_exponentiate_on_ciphertext,
    elgamal_exponentiate_on_point, elgamal_generate_key_pair, elgamal_generate_secret,
    elgamal_hash_to_point,
};

use elgamal_core::types::{ElGamalError, ElGamalResult};

/// Initializes the underlying crypto library. Returns `0` on success.
#[no_mangle]
pub extern "C" fn elgamal_init() -> i32 {
    result_to_int("init", elgamal_core::crypto::init())
}

/// Converts an `ElGamalResult<()>` into a C-friendly integer return code.
///
/// Returns `0` on `Ok(())` or a negative error code on `Err`.
pub(crate) fn result_to_int(operation: &'static str, r: ElGamalResult<()>) -> i32 {
    match r {
        Ok(()) => 0,
        Err(e) => report(operation, e),
    }
}

pub(crate) fn report(operation: &'static str, error: ElGamalError) -> i32 {
    let code = error.to_c_int();
    tracing::debug!(operation, %error, code, "elgamal call failed");
    code
}
