mod common;

use common::hex;
use elgamal_core::hash_to_curve::{expand_message_xmd, hash_to_point, hash_to_point_with_dst};
use elgamal_core::types::*;
use elgamal_core::Point;

const XMD_DST: &[u8] = b"QUUX-V01-CS02-with-expander-SHA512-256";
const R255_DST: &[u8] = b"QUUX-V01-CS02-with-ristretto255_XMD:SHA-512_R255MAP_RO_";

#[test]
fn expand_message_xmd_short_output() {
    let mut out = [0u8; 0x20];
    expand_message_xmd(b"", XMD_DST, &mut out).unwrap();
    assert_eq!(
        out.to_vec(),
        hex("6b9a7312411d92f921c6f68ca0b6380730a1a4d982c507211a90964c394179ba")
    );

    expand_message_xmd(b"abc", XMD_DST, &mut out).unwrap();
    assert_eq!(
        out.to_vec(),
        hex("0da749f12fbe5483eb066a5f595055679b976e93abe9be6f0f6318bce7aca8dc")
    );
}

#[test]
fn expand_message_xmd_multi_block_output() {
    let mut out = [0u8; 0x80];
    expand_message_xmd(b"", XMD_DST, &mut out).unwrap();
    assert_eq!(
        out.to_vec(),
        hex(concat!(
            "41b037d1734a5f8df225dd8c7de38f851efdb45c372887be655212d07251b921",
            "b052b62eaed99b46f72f2ef4cc96bfaf254ebbbec091e1a3b9e4fb5e5b619d2e",
            "0c5414800a1d882b62bb5cd1778f098b8eb6cb399d5d9d18f5d5842cf5d13d7e",
            "b00a7cff859b605da678b318bd0e65ebff70bec88c753b159a805d2c89c55961"
        ))
    );
}

#[test]
fn expand_message_xmd_rejects_bad_lengths() {
    let mut empty = [];
    assert_eq!(
        expand_message_xmd(b"m", XMD_DST, &mut empty),
        Err(ElGamalError::InvalidInput)
    );

    let mut out = [0u8; 32];
    assert_eq!(
        expand_message_xmd(b"m", b"", &mut out),
        Err(ElGamalError::InvalidInput)
    );
    let long_dst = [b'd'; MAX_DST_LENGTH + 1];
    assert_eq!(
        expand_message_xmd(b"m", &long_dst, &mut out),
        Err(ElGamalError::InvalidInput)
    );

    let mut too_long = vec![0u8; 255 * HASH_LENGTH + 1];
    assert_eq!(
        expand_message_xmd(b"m", XMD_DST, &mut too_long),
        Err(ElGamalError::InvalidInput)
    );
}

#[test]
fn hash_to_point_matches_ristretto255_suite() {
    let empty = hash_to_point_with_dst(b"", R255_DST).unwrap();
    assert_eq!(
        empty.as_bytes().to_vec(),
        hex("bed61e1ee1966329962880e236dfdc83afd52fd1ce116f64fb806f1e8acea926")
    );

    let abc = hash_to_point_with_dst(b"abc", R255_DST).unwrap();
    assert_eq!(
        abc.as_bytes().to_vec(),
        hex("627b997b104ee62543358e22576c75a98dff9dc5f348d5ab228689735d77b258")
    );
}

#[test]
fn hash_to_point_default_domain_vectors() {
    assert_eq!(
        hash_to_point(b"hello").unwrap().as_bytes().to_vec(),
        hex("9ed9262f3cef00256d2d5f9a225f53786fd35831db44b137bdfffa529ff9ac15")
    );
    assert_eq!(
        hash_to_point(b"").unwrap().as_bytes().to_vec(),
        hex("a493cff4b6c1c0510bc8088651dbdf3524e3cf6271bf7af8325d066453881c53")
    );
}

#[test]
fn hash_to_point_is_deterministic() {
    let a = hash_to_point(b"user@example.com").unwrap();
    let b = hash_to_point(b"user@example.com").unwrap();
    assert_eq!(a, b);
}

#[test]
fn hash_to_point_separates_messages() {
    let a = hash_to_point(b"alice").unwrap();
    let b = hash_to_point(b"bob").unwrap();
    assert_ne!(a, b);
}

#[test]
fn hash_to_point_separates_domains() {
    let default = hash_to_point(b"alice").unwrap();
    let other = hash_to_point_with_dst(b"alice", R255_DST).unwrap();
    assert_ne!(default, other);
    assert_eq!(
        default,
        hash_to_point_with_dst(b"alice", labels::HASH_TO_POINT_DST).unwrap()
    );
}

#[test]
fn hash_to_point_output_is_valid_point() {
    let big = vec![0x5au8; 1 << 16];
    let point = hash_to_point(&big).unwrap();
    assert_eq!(Point::decode(point.as_bytes()).unwrap(), point);
}

#[test]
fn hash_to_point_rejects_bad_domain() {
    assert_eq!(
        hash_to_point_with_dst(b"m", b""),
        Err(ElGamalError::InvalidInput)
    );

    let room = MAX_DST_LENGTH - labels::HASH_TO_POINT_RETRY.len() - 1;
    hash_to_point_with_dst(b"m", &vec![b'd'; room]).unwrap();
    assert_eq!(
        hash_to_point_with_dst(b"m", &vec![b'd'; room + 1]),
        Err(ElGamalError::InvalidInput)
    );
}
