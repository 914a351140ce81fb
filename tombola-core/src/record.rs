//! secret record format
//!
//! The only artifact a user ever exports: one line of
//! `"{secret},{nullifier}"` decimal text. Parsing tolerates surrounding
//! whitespace per field but is otherwise strict. The 31-bit generation bound
//! is deliberately not re-checked here; an oversized value fails later, at
//! commitment arithmetic or witness generation.

use thiserror::Error;

use crate::types::{Nullifier, Secret};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("expected exactly two comma-separated fields, found {0}")]
    FieldCount(usize),
    #[error("empty {0} field")]
    EmptyField(&'static str),
    #[error("invalid decimal value for {field}: {text:?}")]
    InvalidNumber { field: &'static str, text: String },
}

pub fn format_secret_record(secret: &Secret, nullifier: &Nullifier) -> String {
    format!("{},{}", secret.value(), nullifier.value())
}

pub fn parse_secret_record(text: &str) -> Result<(Secret, Nullifier), RecordError> {
    let fields: Vec<&str> = text.trim().split(',').collect();
    if fields.len() != 2 {
        return Err(RecordError::FieldCount(fields.len()));
    }
    let secret = parse_field("secret", fields[0])?;
    let nullifier = parse_field("nullifier", fields[1])?;
    Ok((Secret::new(secret), Nullifier::new(nullifier)))
}

fn parse_field(name: &'static str, raw: &str) -> Result<u32, RecordError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(RecordError::EmptyField(name));
    }
    trimmed.parse::<u32>().map_err(|_| RecordError::InvalidNumber {
        field: name,
        text: trimmed.to_string(),
    })
}
