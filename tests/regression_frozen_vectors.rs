//! Frozen-vector regression tests for the public API.
//!
//! All expected values are frozen snapshots computed from the reference
//! design: any change in output indicates a behavioral regression.
//!
//! Coverage:
//! - `generate_keys` (key schedule)
//! - `Transform` (all four kinds)
//! - `select_order` / `ControlWord`
//! - `encode_block` / `decode_block` (full pipeline)
//! - `utils::converter` (message segmentation)
//! - `utils::primes`

use quadmix::utils::{converter, primes};
use quadmix::{
    build_catalog, decode_block, encode_block, generate_keys, select_order, ControlWord,
    EncodedBlock, QuadMix, Transform,
};

/// Reference master parameters: the two largest primes below 2^64 plus a
/// fixed seed.
const P: u64 = 18446744073709551557;
const Q: u64 = 18446744073709551533;
const S: u64 = 12345678901234567890;

// ═══════════════════════════════════════════════════════════════════════
// Key schedule — frozen 6-key sequence
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn key_schedule_frozen_six_keys() {
    let expected: [u64; 6] = [
        0x78A677DBC77C1685,
        0xDE170866EA77D567,
        0x46A4D876CC279DB3,
        0xEB7B12BFE293207D,
        0x7B33C30B2DFB200D,
        0x9B85FB410D06B029,
    ];
    assert_eq!(generate_keys(P, Q, S, 6), expected);
}

#[test]
fn key_schedule_low_bit_and_determinism() {
    let keys = generate_keys(P, Q, S, 64);
    assert!(keys.iter().all(|k| k & 1 == 1));
    assert_eq!(keys, generate_keys(P, Q, S, 64));
}

// ═══════════════════════════════════════════════════════════════════════
// Transforms — frozen single-step vectors
// ═══════════════════════════════════════════════════════════════════════

const VALUE: u64 = 0x0123456789ABCDEF;
const KEY: u64 = 0xFEDCBA9876543210;

#[test]
fn transform_frozen_vectors() {
    let cases: [(Transform, u64, &[u64]); 4] = [
        (Transform::KeyedRotation, 0x73C924BED9638E14, &[10]),
        (Transform::HalfSwapMask, 0x89ABCDEF01234567, &[0x76543210FEDCBA98]),
        (Transform::SplitAddMix, 0x68AD7654CCCC9ABC, &[0xFEDCBA98]),
        (Transform::DualRotation, 0x4567F6C590A3C4D5, &[17, 1]),
    ];
    for (kind, expected, side_expected) in cases {
        let (out, side) = kind.encode(VALUE, KEY);
        assert_eq!(out, expected, "{:?} output", kind);
        assert_eq!(side, side_expected, "{:?} side params", kind);
        assert_eq!(kind.decode(out, KEY, &side).unwrap(), VALUE, "{:?}", kind);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Order selector — frozen table at n = 4
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn order_selector_frozen_table_n4() {
    let table: [[usize; 4]; 16] = [
        [0, 1, 2, 3],
        [0, 1, 2, 3],
        [0, 1, 2, 3],
        [0, 1, 2, 3],
        [1, 3, 2, 0],
        [1, 3, 2, 0],
        [1, 3, 2, 0],
        [1, 3, 2, 0],
        [2, 1, 3, 0],
        [2, 1, 3, 0],
        [2, 1, 3, 0],
        [2, 1, 3, 0],
        [3, 2, 0, 1],
        [3, 2, 0, 1],
        [3, 2, 0, 1],
        [3, 2, 0, 1],
    ];
    for (bits, expected) in table.iter().enumerate() {
        assert_eq!(
            select_order(ControlWord::new(bits as u8), 4),
            expected,
            "control word {}",
            bits
        );
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Full pipeline — frozen encode snapshot
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn pipeline_frozen_snapshot() {
    let keys = generate_keys(P, Q, S, 4);
    let catalog = build_catalog(4).unwrap();
    let encoded = encode_block(VALUE, &keys, &catalog, ControlWord::new(0b1011)).unwrap();

    assert_eq!(encoded.value, 0x7C44F6FE7647749A);
    assert_eq!(encoded.order, vec![2, 1, 3, 0]);
    assert_eq!(encoded.side_params[0], vec![0x23]);
    assert_eq!(encoded.side_params[1], vec![0xEA77D567DE170866]);
    assert_eq!(encoded.side_params[2], vec![0x46A4D876]);
    assert_eq!(encoded.side_params[3], vec![0x12, 0x03]);

    let decoded = decode_block(
        encoded.value,
        &keys,
        &catalog,
        &encoded.order,
        &encoded.side_params,
    )
    .unwrap();
    assert_eq!(decoded, VALUE);
}

#[test]
fn pipeline_decodable_from_persisted_parts() {
    // An EncodedBlock rebuilt from its persisted {value, order, side
    // params} must decode with a freshly constructed session.
    let engine = QuadMix::new(P, Q, S, 4, ControlWord::new(0b1011)).unwrap();
    let encoded = engine.encode_block(VALUE);

    let persisted = EncodedBlock {
        value: encoded.value,
        order: encoded.order.clone(),
        side_params: encoded.side_params.clone(),
    };
    let fresh = QuadMix::new(P, Q, S, 4, ControlWord::new(0b1011)).unwrap();
    assert_eq!(fresh.decode_block(&persisted).unwrap(), VALUE);
}

// ═══════════════════════════════════════════════════════════════════════
// Message segmentation — frozen 20-byte split
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn segmentation_frozen_20_bytes() {
    let message: Vec<u8> = (1..=20).collect();
    let blocks = converter::message_to_blocks(&message);
    assert_eq!(
        blocks,
        vec![0x0102030405060708, 0x090A0B0C0D0E0F10, 0x1112131400000000]
    );
    assert_eq!(converter::blocks_to_message(&blocks), message);
}

// ═══════════════════════════════════════════════════════════════════════
// Primality utility
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn primality_spot_checks() {
    assert!(primes::is_prime(2));
    assert!(primes::is_prime(104729)); // 10000th prime
    assert!(!primes::is_prime(104730));
    assert!(primes::is_prime(4_294_967_291));
}
