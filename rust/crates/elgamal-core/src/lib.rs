// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — Exponential ElGamal
// Licensed under the MIT License

//! Exponential ElGamal over Ristretto255 with homomorphic re-exponentiation.
//!
//! One party encrypts identifiers under a shared public key; other parties
//! blind or re-key the ciphertexts, or bare hashed points, by raising them to
//! secret scalars without decrypting. Because `g^(ab) = g^(ba)`, blinding
//! steps commute, which lets parties match identifiers without learning each
//! other's exponents.
//!
//! Every operation is a pure function of its inputs. Randomised operations
//! take an injected [`crypto::RandomSource`] in their `_with_rng` form.
//!
//! # Crate layout
//!
//! * [`types`] -- constants, domain labels, error type, and secure byte containers.
//! * [`crypto`] -- Ristretto255 arithmetic over raw encodings (libsodium wrappers).
//! * [`group`] -- validated `Point` and `Scalar` value types.
//! * [`hash_to_curve`] -- deterministic message-to-point encoding.
//! * [`keys`] -- key pair and blinding secret generation.
//! * [`elgamal`] -- encryption and decryption.
//! * [`exponentiate`] -- re-exponentiation of ciphertexts and points.
//! * [`protocol`] -- fixed-format key and ciphertext records.

/// Low-level Ristretto255 primitives wrapping libsodium.
pub mod crypto;
/// Exponential ElGamal encryption and decryption.
pub mod elgamal;
/// Homomorphic exponentiation of ciphertexts and points.
pub mod exponentiate;
/// Validated group element and scalar types.
pub mod group;
/// Hash-to-curve encoding of messages.
pub mod hash_to_curve;
/// Key pair and secret generation.
pub mod keys;
/// Fixed-format record layouts.
pub mod protocol;
/// Shared constants, error types, and secure byte containers.
pub mod types;

pub use elgamal::{decrypt, encrypt, encrypt_with_r, encrypt_with_rng, Ciphertext};
pub use exponentiate::{exponentiate_on_ciphertext, exponentiate_on_element, exponentiate_on_point};
pub use group::{Point, Scalar};
pub use hash_to_curve::{hash_to_point, hash_to_point_with_dst};
pub use keys::{
    generate_key_pair, generate_key_pair_with_rng, generate_secret, generate_secret_with_rng,
    KeyPair, PrivateKey, PublicKey,
};
pub use types::{ElGamalError, ElGamalResult};
