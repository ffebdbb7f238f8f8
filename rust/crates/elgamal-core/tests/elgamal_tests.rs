mod common;

use common::{hex, seeded};
use elgamal_core::types::*;
use elgamal_core::*;

#[test]
fn encrypt_then_decrypt_recovers_message_point() {
    let key_pair = generate_key_pair().unwrap();
    let ciphertext = encrypt(b"user-1234", &key_pair.public_key).unwrap();
    let point = decrypt(&ciphertext, &key_pair.private_key).unwrap();
    assert_eq!(point, hash_to_point(b"user-1234").unwrap());
}

#[test]
fn empty_message_round_trips() {
    let key_pair = generate_key_pair().unwrap();
    let ciphertext = encrypt(b"", &key_pair.public_key).unwrap();
    let point = decrypt(&ciphertext, &key_pair.private_key).unwrap();
    assert_eq!(point, hash_to_point(b"").unwrap());
}

#[test]
fn encryption_is_randomised() {
    let key_pair = generate_key_pair().unwrap();
    let a = encrypt(b"same", &key_pair.public_key).unwrap();
    let b = encrypt(b"same", &key_pair.public_key).unwrap();
    assert_ne!(a, b);
    assert_eq!(
        decrypt(&a, &key_pair.private_key).unwrap(),
        decrypt(&b, &key_pair.private_key).unwrap()
    );
}

#[test]
fn seeded_encryption_is_reproducible() {
    let key_pair = generate_key_pair_with_rng(&mut seeded(11)).unwrap();
    let a = encrypt_with_rng(b"msg", &key_pair.public_key, &mut seeded(12)).unwrap();
    let b = encrypt_with_rng(b"msg", &key_pair.public_key, &mut seeded(12)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn explicit_randomness_matches_definition() {
    let key_pair = generate_key_pair().unwrap();
    let r = Scalar::from_u64(5).unwrap();
    let ciphertext = encrypt_with_r(b"m", &key_pair.public_key, &r).unwrap();

    assert_eq!(*ciphertext.u(), Point::generator().mul(&r).unwrap());
    let expected_e = hash_to_point(b"m")
        .unwrap()
        .add(&key_pair.public_key.y().mul(&r).unwrap())
        .unwrap();
    assert_eq!(*ciphertext.e(), expected_e);
}

#[test]
fn wrong_key_yields_unrelated_point_without_error() {
    let alice = generate_key_pair().unwrap();
    let mallory = generate_key_pair().unwrap();
    let ciphertext = encrypt(b"secret id", &alice.public_key).unwrap();
    let point = decrypt(&ciphertext, &mallory.private_key).unwrap();
    assert_ne!(point, hash_to_point(b"secret id").unwrap());
}

#[test]
fn blinded_hello_decrypts_to_seventh_multiple() {
    let key_pair = generate_key_pair().unwrap();
    let seven = Scalar::from_u64(7).unwrap();

    let ciphertext = encrypt(b"hello", &key_pair.public_key).unwrap();
    let blinded = exponentiate_on_ciphertext(&ciphertext, &key_pair.public_key, &seven).unwrap();
    let point = decrypt(&blinded, &key_pair.private_key).unwrap();

    assert_eq!(
        point.as_bytes().to_vec(),
        hex("0a4c662063c793c5e80088b9f4659e246bff4b7a76239288fe0c653adae6f22a")
    );
    assert_eq!(
        point,
        exponentiate_on_point(hash_to_point(b"hello").unwrap().as_bytes(), &seven).unwrap()
    );
}

#[test]
fn ciphertext_components_are_valid_points() {
    let key_pair = generate_key_pair().unwrap();
    let ciphertext = encrypt(b"x", &key_pair.public_key).unwrap();
    Point::decode(ciphertext.u().as_bytes()).unwrap();
    Point::decode(ciphertext.e().as_bytes()).unwrap();
}

#[test]
fn ciphertext_from_bytes_rejects_malformed_points() {
    let good = Point::generator();
    assert_eq!(
        Ciphertext::from_bytes(&[0u8; POINT_LENGTH], good.as_bytes()),
        Err(ElGamalError::InvalidEncoding)
    );
    assert_eq!(
        Ciphertext::from_bytes(good.as_bytes(), &[0xffu8; POINT_LENGTH]),
        Err(ElGamalError::InvalidEncoding)
    );
    assert_eq!(
        Ciphertext::from_bytes(good.as_bytes(), &good.as_bytes()[..3]),
        Err(ElGamalError::InvalidEncoding)
    );
}

#[test]
fn nonstandard_generator_round_trips() {
    let g = Point::generator().mul(&Scalar::from_u64(3).unwrap()).unwrap();
    let key_pair = KeyPair::from_private_key(g, PrivateKey::new(generate_secret().unwrap())).unwrap();
    let ciphertext = encrypt(b"alt-g", &key_pair.public_key).unwrap();
    assert_eq!(
        decrypt(&ciphertext, &key_pair.private_key).unwrap(),
        hash_to_point(b"alt-g").unwrap()
    );
}

#[test]
fn concurrent_round_trips_share_one_key_pair() {
    let key_pair = generate_key_pair().unwrap();
    std::thread::scope(|scope| {
        let workers: Vec<_> = (0..8u8)
            .map(|worker| {
                let key_pair = &key_pair;
                scope.spawn(move || {
                    for round in 0..16u8 {
                        let message = [worker, round];
                        let ciphertext = encrypt(&message, &key_pair.public_key).unwrap();
                        let blinded = exponentiate_on_ciphertext(
                            &ciphertext,
                            &key_pair.public_key,
                            &generate_secret().unwrap(),
                        )
                        .unwrap();
                        assert_ne!(blinded, ciphertext);
                        assert_eq!(
                            decrypt(&ciphertext, &key_pair.private_key).unwrap(),
                            hash_to_point(&message).unwrap()
                        );
                    }
                })
            })
            .collect();
        for worker in workers {
            worker.join().unwrap();
        }
    });
}
