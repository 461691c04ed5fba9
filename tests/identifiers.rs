//! # Identifier Tests
//!
//! Properties of the public encode/decode API: bijectivity, round-trips,
//! fixed length, scattering of consecutive counters and parameter pairing.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::collections::HashSet;

use permid::{decode_id, encode_id, IdCodec, IdError, Permuter, TextCodec};

const N: u64 = 2_148_498_091;

// =============================================================================
// End-to-End
// =============================================================================

#[test]
fn test_default_modulus() {
    assert_eq!(Permuter::default().modulus(), 65497 * 32803);
    assert_eq!(Permuter::default().modulus(), N);
}

#[test]
fn test_counter_one_encodes_as_plain_one() {
    let plain = TextCodec::default().encode(1).unwrap();
    assert_eq!(encode_id(1).unwrap(), plain);
    assert_eq!(plain, "1000000");
}

#[test]
fn test_roundtrip_12345() {
    assert_eq!(decode_id(&encode_id(12345).unwrap()).unwrap(), 12345);
}

#[test]
fn test_first_ids_are_unique_and_fixed_length() {
    let mut seen = HashSet::new();
    for counter in 1..=20_000 {
        let id = encode_id(counter).unwrap();
        assert_eq!(id.len(), 7);
        assert!(seen.insert(id), "duplicate ID for counter {counter}");
    }
}

#[test]
fn test_ids_are_url_safe() {
    for counter in [2, 3, 999, 123_456_789, N - 1] {
        let id = encode_id(counter).unwrap();
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric()), "{id}");
    }
}

#[test]
fn test_consecutive_ids_do_not_sort_together() {
    let ids: Vec<String> = (2..50).map(|c| encode_id(c).unwrap()).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_ne!(ids, sorted);
}

#[test]
fn test_domain_edges() {
    assert_eq!(encode_id(0).unwrap(), "0000000");
    assert_eq!(decode_id(&encode_id(N - 1).unwrap()).unwrap(), N - 1);
    assert!(matches!(encode_id(N), Err(IdError::OutOfRange { .. })));
    assert!(encode_id(u64::MAX).is_err());
}

// =============================================================================
// Error Handling
// =============================================================================

#[test]
fn test_decode_errors() {
    assert!(matches!(
        decode_id("K61PVA"),
        Err(IdError::InvalidLength { .. })
    ));
    assert!(matches!(
        decode_id("K61PVAI"),
        Err(IdError::InvalidCharacter { ch: 'I', .. })
    ));
    assert!(matches!(
        decode_id("ZZZZZZZ"),
        Err(IdError::OutOfRange { .. })
    ));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        decode_id("K61PVAI").unwrap_err().to_string(),
        "invalid character 'I' at position 6"
    );
    assert_eq!(
        encode_id(N).unwrap_err().to_string(),
        "value 2148498091 is outside the domain [0, 2148498091)"
    );
}

// =============================================================================
// Parameter Sets
// =============================================================================

#[test]
fn test_distinct_exponents_give_distinct_ids() {
    let small = IdCodec::default();
    let large = IdCodec::new(
        Permuter::default().with_exponent(65537).unwrap(),
        TextCodec::default(),
    )
    .unwrap();

    assert_eq!(small.encode(1).unwrap(), large.encode(1).unwrap());
    assert_ne!(small.encode(2).unwrap(), large.encode(2).unwrap());

    let id = large.encode(12345).unwrap();
    assert_eq!(large.decode(&id).unwrap(), 12345);
    assert_ne!(small.decode(&id).unwrap(), 12345);
}

#[test]
fn test_benchmark_exponents_roundtrip() {
    for e in [127, 65537, 1_148_399_797, 1_948_399_795] {
        let codec = IdCodec::new(
            Permuter::default().with_exponent(e).unwrap(),
            TextCodec::default(),
        )
        .unwrap();
        for counter in [1, 2, 1000, 1_000_000, N - 2] {
            assert_eq!(codec.decode(&codec.encode(counter).unwrap()).unwrap(), counter);
        }
    }
}

#[test]
fn test_small_modulus_is_a_permutation() {
    // N = 3233 fits in three base-32 characters
    let codec = IdCodec::new(
        Permuter::new(61, 53, 17).unwrap(),
        TextCodec::new(3).unwrap(),
    )
    .unwrap();

    let ids: HashSet<String> = (0..3233).map(|c| codec.encode(c).unwrap()).collect();
    assert_eq!(ids.len(), 3233);
    for id in &ids {
        assert!(codec.decode(id).unwrap() < 3233);
    }
}
