use std::fs;

use fsieve_core::{SegmentedSieve, SieveConfig, SieveError};
use tempfile::tempdir;

#[test]
fn config_file_drives_engine() {
    let dir = tempdir().expect("tempdir should be created");
    let path = dir.path().join("fsieve.toml");
    fs::write(&path, "max_chunk_size = 250\n").expect("config should be written");

    let config = SieveConfig::from_toml_file(&path).expect("config should load");
    assert_eq!(config.max_chunk_size, 250);

    let sieve = SegmentedSieve::new(config).expect("config should be valid");
    assert_eq!(sieve.config().max_chunk_size, 250);
    assert_eq!(sieve.nth_prime(986).expect("lookup should succeed"), 7793);
}

#[test]
fn missing_config_file_is_config_error() {
    let dir = tempdir().expect("tempdir should be created");
    let path = dir.path().join("absent.toml");
    let err = SieveConfig::from_toml_file(&path).expect_err("missing file must fail");
    assert!(matches!(err, SieveError::InvalidConfig { .. }), "{err}");
    assert!(err.to_string().contains("absent.toml"), "{err}");
}

#[test]
fn config_file_with_invalid_chunk_rejected() {
    let dir = tempdir().expect("tempdir should be created");
    let path = dir.path().join("zero.toml");
    fs::write(&path, "max_chunk_size = 0\n").expect("config should be written");
    let err = SieveConfig::from_toml_file(&path).expect_err("zero chunk must fail");
    assert!(err.is_user_error());
}
