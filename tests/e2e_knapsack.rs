//! End-to-end knapsack correctness tests
//!
//! Tests the full protocol: KeyGen → Encrypt → Decrypt = Original Message

use num_bigint::BigUint;
use num_traits::One;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use knapsack_pke::cipher::{decrypt, decrypt_bytes, decrypt_verified, encrypt, encrypt_bytes};
use knapsack_pke::keys::KeyPair;
use knapsack_pke::math::{gcd, KeySampler};
use knapsack_pke::params::KnapsackParams;
use knapsack_pke::solve::{is_superincreasing, solve_subset_sum, solve_superincreasing};
use knapsack_pke::KnapsackError;

fn key_pair(length: usize, seed: u64) -> KeyPair {
    let mut sampler = KeySampler::with_seed(seed);
    KeyPair::generate(&KnapsackParams::with_key_length(length), &mut sampler).unwrap()
}

#[test]
fn test_e2e_hello_world() {
    let pair = key_pair(100, 1);
    let message = b"hello world";

    let ct = encrypt(pair.public_key(), message).unwrap();
    let pt = decrypt(pair.private_key(), &ct);

    // 100 bits → 12 bytes: the message plus one zero byte of unused capacity
    assert_eq!(pt.len(), 12);
    assert_eq!(&pt[..message.len()], message);
    assert!(pt[message.len()..].iter().all(|&b| b == 0));
}

#[test]
fn test_e2e_random_messages() {
    let mut rng = ChaCha20Rng::seed_from_u64(99);

    for (length, seed) in [(8, 10), (64, 11), (128, 12), (257, 13)] {
        let pair = key_pair(length, seed);
        let capacity = length / 8;

        for _ in 0..10 {
            let msg_len = rng.gen_range(0..=capacity);
            let message: Vec<u8> = (0..msg_len).map(|_| rng.gen()).collect();

            let ct = encrypt(pair.public_key(), &message).unwrap();
            let pt = decrypt(pair.private_key(), &ct);

            assert_eq!(pt.len(), capacity);
            assert_eq!(&pt[..msg_len], &message[..], "L={} message mismatch", length);
            assert!(pt[msg_len..].iter().all(|&b| b == 0));
        }
    }
}

#[test]
fn test_e2e_byte_interface() {
    let pair = key_pair(80, 2);
    let message = b"ten bytes!";

    let ct = encrypt_bytes(pair.public_key(), message).unwrap();
    assert_ne!(ct.first(), Some(&0), "ciphertext bytes must be minimal");
    assert_eq!(decrypt_bytes(pair.private_key(), &ct), message.to_vec());
}

#[test]
fn test_e2e_full_key_pair_decrypt() {
    let pair = key_pair(48, 3);
    let ct = pair.public_key().encrypt(b"six!!!").unwrap();
    assert_eq!(pair.decrypt(&ct), b"six!!!".to_vec());
}

#[test]
fn test_key_invariants() {
    for (length, seed) in [(1, 20), (8, 21), (100, 22), (300, 23)] {
        let pair = key_pair(length, seed);
        let sk = pair.private_key();
        let m = sk.modulus();

        assert!(is_superincreasing(sk.sequence()));
        let total: BigUint = sk.sequence().iter().sum();
        assert!(&total < m);

        assert_eq!(gcd(sk.multiplier(), m), BigUint::one());
        assert_eq!((sk.multiplier() * sk.multiplier_inverse()) % m, BigUint::one());

        for (b, a) in pair.public_key().elements().iter().zip(sk.sequence()) {
            assert_eq!(b, &((a * sk.multiplier()) % m));
        }
    }
}

#[test]
fn test_key_too_short() {
    let pair = key_pair(15, 4);
    let result = encrypt(pair.public_key(), b"ab");
    assert!(matches!(
        result,
        Err(KnapsackError::KeyTooShort { key_len: 15, bit_len: 16 })
    ));
}

#[test]
fn test_zero_key_length() {
    let mut sampler = KeySampler::with_seed(5);
    let result = KeyPair::generate(&KnapsackParams::with_key_length(0), &mut sampler);
    assert!(matches!(result, Err(KnapsackError::InvalidParameter(_))));
}

#[test]
fn test_tampered_ciphertext_decrypts_silently() {
    let pair = key_pair(64, 6);
    let ct = encrypt(pair.public_key(), b"payload!").unwrap();
    let tampered = &ct + 1u32;

    // Plain decryption never fails, it just returns the wrong bytes
    let pt = decrypt(pair.private_key(), &tampered);
    assert_eq!(pt.len(), 8);

    assert_eq!(decrypt_verified(pair.private_key(), &ct), Some(b"payload!".to_vec()));
    assert_eq!(decrypt_verified(pair.private_key(), &tampered), None);
}

#[test]
fn test_solver_examples() {
    assert_eq!(solve_superincreasing(&[5u64, 10, 17, 33, 70], &32), vec![1, 1, 1, 0, 0]);

    let subset = solve_subset_sum(&[1, 2, 3, 4, 5], 10).unwrap().unwrap();
    assert_eq!(subset.iter().sum::<u64>(), 10);
}

#[test]
fn test_public_knapsack_needs_search() {
    // A tiny public key is not superincreasing, but meet-in-the-middle still
    // recovers a subset hitting the ciphertext
    let pair = key_pair(16, 7);
    let weights: Vec<u64> = pair
        .public_key()
        .elements()
        .iter()
        .map(|b| u64::try_from(b).unwrap())
        .collect();
    assert!(!is_superincreasing(&weights));

    let ct = encrypt(pair.public_key(), b"hi").unwrap();
    let target = u64::try_from(&ct).unwrap();

    let subset = solve_subset_sum(&weights, target).unwrap().expect("ciphertext is a subset sum");
    assert_eq!(subset.iter().map(|&w| w as u128).sum::<u128>(), target as u128);
}
