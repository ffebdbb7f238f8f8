// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — Exponential ElGamal
// Licensed under the MIT License

use crate::types::{
    ElGamalError, ElGamalResult, CIPHERTEXT_RECORD_LENGTH, POINT_LENGTH, PUBLIC_KEY_RECORD_LENGTH,
};

const PUBLIC_KEY_G_OFFSET: usize = 0;
const PUBLIC_KEY_Y_OFFSET: usize = POINT_LENGTH;

const CIPHERTEXT_U_OFFSET: usize = 0;
const CIPHERTEXT_E_OFFSET: usize = POINT_LENGTH;

/// Borrowed halves of a public key record.
pub struct PublicKeyRef<'a> {
    pub g: &'a [u8],
    pub y: &'a [u8],
}

/// Borrowed halves of a ciphertext record.
pub struct CiphertextRef<'a> {
    pub u: &'a [u8],
    pub e: &'a [u8],
}

/// Splits a `g || y` record. Only the length is checked; points are validated on decode.
pub fn parse_public_key(data: &[u8]) -> ElGamalResult<PublicKeyRef<'_>> {
    if data.len() != PUBLIC_KEY_RECORD_LENGTH {
        return Err(ElGamalError::InvalidInput);
    }
    Ok(PublicKeyRef {
        g: &data[PUBLIC_KEY_G_OFFSET..PUBLIC_KEY_Y_OFFSET],
        y: &data[PUBLIC_KEY_Y_OFFSET..],
    })
}

/// Splits a `u || e` record. Only the length is checked; points are validated on decode.
pub fn parse_ciphertext(data: &[u8]) -> ElGamalResult<CiphertextRef<'_>> {
    if data.len() != CIPHERTEXT_RECORD_LENGTH {
        return Err(ElGamalError::InvalidInput);
    }
    Ok(CiphertextRef {
        u: &data[CIPHERTEXT_U_OFFSET..CIPHERTEXT_E_OFFSET],
        e: &data[CIPHERTEXT_E_OFFSET..],
    })
}
