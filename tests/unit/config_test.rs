//! Tests for configuration validation

use std::collections::HashMap;

use carpark_allocator::config::lot::{ENV_AUDIT_CAPACITY, ENV_COMPACT_SPACES, ENV_LARGE_SPACES};
use carpark_allocator::config::LotConfig;
use carpark_allocator::util::LotCapacity;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn test_lot_config_validation() {
    assert!(LotConfig::new(3, 3).validate().is_ok());
}

#[test]
fn test_lot_config_single_class_allowed() {
    assert!(LotConfig::new(0, 1).validate().is_ok());
    assert!(LotConfig::new(1, 0).validate().is_ok());
}

#[test]
fn test_lot_config_empty_lot_rejected() {
    assert!(LotConfig::new(0, 0).validate().is_err());
}

#[test]
fn test_lot_config_zero_audit_capacity_rejected() {
    let mut cfg = LotConfig::new(1, 1);
    cfg.audit_capacity = 0;
    assert!(cfg.validate().is_err());
}

#[test]
fn test_lot_config_capacity() {
    assert_eq!(LotConfig::new(4, 2).capacity(), LotCapacity::new(4, 2));
}

#[test]
fn test_lot_config_from_json() {
    let json = r#"{
        "compact_spaces": 12,
        "large_spaces": 4
    }"#;

    let config = LotConfig::from_json_str(json).unwrap();
    assert_eq!(config.compact_spaces, 12);
    assert_eq!(config.large_spaces, 4);
    assert_eq!(config.audit_capacity, 256);
}

#[test]
fn test_lot_config_from_json_invalid() {
    assert!(LotConfig::from_json_str(r#"{"compact_spaces": 0, "large_spaces": 0}"#).is_err());
    assert!(LotConfig::from_json_str(r#"{"compact_spaces": -1, "large_spaces": 2}"#).is_err());
    assert!(LotConfig::from_json_str("not json").is_err());
}

#[test]
fn test_lot_config_from_lookup() {
    let lookup = lookup_from(&[
        (ENV_COMPACT_SPACES, "5"),
        (ENV_LARGE_SPACES, " 2 "),
        (ENV_AUDIT_CAPACITY, "32"),
    ]);
    let config = LotConfig::from_lookup(lookup).unwrap();
    assert_eq!(config.compact_spaces, 5);
    assert_eq!(config.large_spaces, 2);
    assert_eq!(config.audit_capacity, 32);
}

#[test]
fn test_lot_config_from_lookup_missing_key() {
    let lookup = lookup_from(&[(ENV_COMPACT_SPACES, "5")]);
    let err = LotConfig::from_lookup(lookup).unwrap_err();
    assert!(err.to_string().contains(ENV_LARGE_SPACES));
}

#[test]
fn test_lot_config_from_lookup_bad_number() {
    let lookup = lookup_from(&[(ENV_COMPACT_SPACES, "five"), (ENV_LARGE_SPACES, "2")]);
    assert!(LotConfig::from_lookup(lookup).is_err());
}
