mod common;

use common::{hex32, seeded, small_scalar, B2};
use elgamal_core::types::*;
use elgamal_core::*;

#[test]
fn generated_key_pair_is_consistent() {
    let key_pair = generate_key_pair().unwrap();
    assert_eq!(*key_pair.public_key.g(), Point::generator());
    assert_eq!(
        *key_pair.public_key.y(),
        Point::generator().mul(key_pair.private_key.x()).unwrap()
    );
}

#[test]
fn key_generation_is_fresh() {
    let a = generate_key_pair().unwrap();
    let b = generate_key_pair().unwrap();
    assert_ne!(a.private_key, b.private_key);
    assert_ne!(a.public_key, b.public_key);
}

#[test]
fn seeded_key_generation_is_reproducible() {
    let a = generate_key_pair_with_rng(&mut seeded(5)).unwrap();
    let b = generate_key_pair_with_rng(&mut seeded(5)).unwrap();
    assert_eq!(a.public_key, b.public_key);
    assert_eq!(a.private_key, b.private_key);
}

#[test]
fn from_private_key_derives_public_component() {
    let x = PrivateKey::from_bytes(&small_scalar(2)).unwrap();
    let key_pair = KeyPair::from_private_key(Point::generator(), x).unwrap();
    assert_eq!(key_pair.public_key.y().encode(), hex32(B2));
}

#[test]
fn from_keys_checks_consistency() {
    let a = generate_key_pair().unwrap();
    let b = generate_key_pair().unwrap();

    KeyPair::from_keys(a.public_key, a.private_key.clone()).unwrap();
    assert_eq!(
        KeyPair::from_keys(a.public_key, b.private_key.clone()).unwrap_err(),
        ElGamalError::InvalidInput
    );
}

#[test]
fn public_key_record_round_trip() {
    let key_pair = generate_key_pair().unwrap();
    let record = key_pair.public_key.to_record();
    assert_eq!(record.len(), PUBLIC_KEY_RECORD_LENGTH);
    assert_eq!(PublicKey::from_record(&record).unwrap(), key_pair.public_key);
}

#[test]
fn public_key_rejects_invalid_points() {
    let g = Point::generator();
    assert_eq!(
        PublicKey::from_bytes(g.as_bytes(), &[0u8; POINT_LENGTH]),
        Err(ElGamalError::InvalidEncoding)
    );
    assert_eq!(
        PublicKey::from_record(&[0u8; PUBLIC_KEY_RECORD_LENGTH - 1]),
        Err(ElGamalError::InvalidInput)
    );
}

#[test]
fn private_key_rejects_non_canonical_scalar() {
    assert_eq!(
        PrivateKey::from_bytes(&GROUP_ORDER).unwrap_err(),
        ElGamalError::InvalidEncoding
    );
    assert_eq!(
        PrivateKey::from_bytes(&[0u8; SCALAR_LENGTH]).unwrap_err(),
        ElGamalError::InvalidEncoding
    );
}

#[test]
fn secrets_are_nonzero_and_distinct() {
    let a = generate_secret().unwrap();
    let b = generate_secret().unwrap();
    assert!(!is_all_zero(a.as_bytes()));
    assert_ne!(a, b);
    Scalar::decode(a.as_bytes()).unwrap();
}

#[test]
fn secret_material_is_redacted_in_debug() {
    let key_pair = generate_key_pair().unwrap();
    let rendered = format!("{key_pair:?}");
    assert!(rendered.contains("PrivateKey([REDACTED])"));
    assert_eq!(format!("{:?}", generate_secret().unwrap()), "Scalar([REDACTED])");
}

#[test]
fn scalar_from_u64_rejects_zero() {
    assert_eq!(Scalar::from_u64(0).unwrap_err(), ElGamalError::InvalidEncoding);
    assert_eq!(Scalar::from_u64(9).unwrap().encode(), small_scalar(9));
}
