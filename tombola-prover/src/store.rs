//! secret record persistence adapter
//!
//! Thin file wrapper around the core record format. The core stays pure;
//! this is the only place the record touches durable storage.

use std::fs;
use std::path::Path;

use thiserror::Error;

use tombola_core::record::{format_secret_record, parse_secret_record, RecordError};
use tombola_core::types::{Nullifier, Secret};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("record error: {0}")]
    Record(#[from] RecordError),
}

pub fn save_record(path: &Path, secret: &Secret, nullifier: &Nullifier) -> Result<(), StoreError> {
    let mut line = format_secret_record(secret, nullifier);
    line.push('\n');
    fs::write(path, line)?;
    Ok(())
}

pub fn load_record(path: &Path) -> Result<(Secret, Nullifier), StoreError> {
    let text = fs::read_to_string(path)?;
    Ok(parse_secret_record(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_file(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!(
            "tombola_store_test_{}_{}_{}",
            name,
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        path
    }

    #[test]
    fn test_save_load_roundtrip() {
        let path = temp_file("roundtrip");
        save_record(&path, &Secret::new(123456789), &Nullifier::new(987654321)).unwrap();

        let (secret, nullifier) = load_record(&path).unwrap();
        assert_eq!(secret.value(), 123456789);
        assert_eq!(nullifier.value(), 987654321);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file() {
        let path = temp_file("missing");
        assert!(matches!(load_record(&path), Err(StoreError::Io(_))));
    }

    #[test]
    fn test_load_malformed_record() {
        let path = temp_file("malformed");
        fs::write(&path, "not-a-record\n").unwrap();
        assert!(matches!(load_record(&path), Err(StoreError::Record(_))));
        let _ = fs::remove_file(&path);
    }
}
