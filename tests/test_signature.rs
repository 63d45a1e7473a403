//! Signature generation: known vectors and properties

use okprobe::signature::{canonical_string, compute_md5, md5_hex, sign, sign_pairs};
use okprobe::{ParamSet, Signature};
use proptest::prelude::*;
use std::collections::HashMap;

fn reference_params() -> ParamSet {
    ParamSet::new()
        .with("uid", "573382458991123")
        .with("session_key", "12")
        .with("method", "group.getUserGroupsV2")
        .with("count", "5")
        .with("application_key", "CQIKOELGDIHBABABA")
}

#[test]
fn test_reference_vector_canonical_string() {
    assert_eq!(
        canonical_string(&reference_params(), ""),
        "application_key=CQIKOELGDIHBABABAcount=5method=group.getUserGroupsV2session_key=12uid=573382458991123"
    );
}

#[test]
fn test_reference_vector_digest() {
    // Same value the md5digest binary prints
    let sig = sign(&reference_params(), "");
    assert_eq!(sig.to_hex(), "330c0dbc6172b719ec8d2a0584954644");
    assert_eq!(
        md5_hex(&canonical_string(&reference_params(), "")),
        sig.to_hex()
    );
}

#[test]
fn test_secret_is_appended_last() {
    let params = ParamSet::new()
        .with("uid", "42")
        .with("method", "group.getUserGroupsV2")
        .with("application_key", "KEY");
    assert_eq!(sign(&params, "tajna").to_hex(), "f3f0b696332f4cebdbbca75e0f66d33d");
}

#[test]
fn test_simple_vector() {
    let params = ParamSet::new().with("b", "2").with("a", "1");
    assert_eq!(sign(&params, "S").to_hex(), "6e8568e2a055b40328249de76d11115e");
}

#[test]
fn test_non_ascii_is_hashed_as_utf8() {
    let params = ParamSet::new().with("ключ", "значение");
    assert_eq!(
        sign(&params, "secret").to_hex(),
        "219fe7f8e469fa3de10065d32f232245"
    );
}

#[test]
fn test_empty_input() {
    assert_eq!(
        sign(&ParamSet::new(), "").to_hex(),
        "d41d8cd98f00b204e9800998ecf8427e"
    );
    assert_eq!(compute_md5(b"").to_hex(), "d41d8cd98f00b204e9800998ecf8427e");
}

#[test]
fn test_sign_pairs_accepts_hash_map() {
    let map: HashMap<&str, &str> = [("b", "2"), ("a", "1")].into_iter().collect();
    assert_eq!(sign_pairs(map, "S").to_hex(), "6e8568e2a055b40328249de76d11115e");
}

#[test]
fn test_sign_pairs_later_duplicate_wins() {
    let sig = sign_pairs(vec![("a", "0"), ("b", "2"), ("a", "1")], "S");
    assert_eq!(sig.to_hex(), "6e8568e2a055b40328249de76d11115e");
}

#[test]
fn test_signature_hex_round_trip() {
    let sig = sign(&reference_params(), "");
    let parsed: Signature = sig.to_hex().parse().unwrap();
    assert_eq!(parsed, sig);
    let upper: Signature = "330C0DBC6172B719EC8D2A0584954644".parse().unwrap();
    assert_eq!(upper, sig);
}

fn params_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::btree_map("[a-z_]{1,12}", "\\PC{0,16}", 0..8)
        .prop_map(|m| m.into_iter().collect())
}

proptest! {
    /// Property: every signature is 32 lowercase hex characters
    #[test]
    fn prop_signature_is_32_lowercase_hex(
        pairs in params_strategy(),
        secret in "\\PC{0,24}",
    ) {
        let params: ParamSet = pairs.into_iter().collect();
        let hex = sign(&params, &secret).to_hex();
        prop_assert_eq!(hex.len(), 32);
        prop_assert!(hex.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    /// Property: repeated calls give the same signature
    #[test]
    fn prop_signature_is_deterministic(
        pairs in params_strategy(),
        secret in "\\PC{0,24}",
    ) {
        let params: ParamSet = pairs.into_iter().collect();
        prop_assert_eq!(sign(&params, &secret), sign(&params, &secret));
    }

    /// Property: insertion order does not affect the signature
    #[test]
    fn prop_signature_is_permutation_invariant(
        pairs in params_strategy(),
        secret in "\\PC{0,24}",
    ) {
        let forward: ParamSet = pairs.iter().cloned().collect();
        let reversed: ParamSet = pairs.iter().rev().cloned().collect();
        let mut rotated_pairs = pairs.clone();
        if !rotated_pairs.is_empty() {
            rotated_pairs.rotate_left(1);
        }
        let rotated: ParamSet = rotated_pairs.into_iter().collect();

        prop_assert_eq!(sign(&forward, &secret), sign(&reversed, &secret));
        prop_assert_eq!(sign(&forward, &secret), sign(&rotated, &secret));
    }

    /// Property: the streamed digest equals the digest of the canonical string
    #[test]
    fn prop_sign_matches_canonical_string(
        pairs in params_strategy(),
        secret in "\\PC{0,24}",
    ) {
        let params: ParamSet = pairs.into_iter().collect();
        prop_assert_eq!(
            sign(&params, &secret).to_hex(),
            md5_hex(&canonical_string(&params, &secret))
        );
    }
}
