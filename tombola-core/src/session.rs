//! claim session
//!
//! Explicit context object carrying one identity's secret material and the
//! public values derived from it. Every operation takes the session it acts
//! on; nothing lives in module-level state.

use thiserror::Error;

use crate::commitment::{
    compute_commitment, compute_nullifier_hash, generate_secret_material, CommitmentError,
    RandomError,
};
use crate::record::{format_secret_record, parse_secret_record, RecordError};
use crate::types::{Commitment, Nullifier, NullifierHash, Secret};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("randomness error: {0}")]
    Random(#[from] RandomError),
    #[error("record error: {0}")]
    Record(#[from] RecordError),
    #[error("commitment error: {0}")]
    Commitment(#[from] CommitmentError),
}

pub struct ClaimSession {
    secret: Secret,
    nullifier: Nullifier,
    commitment: Commitment,
    nullifier_hash: NullifierHash,
}

impl ClaimSession {
    /// Draws fresh secret material and derives its public values.
    pub fn generate() -> Result<Self, SessionError> {
        let (secret, nullifier) = generate_secret_material()?;
        Self::from_material(secret, nullifier)
    }

    /// Rebuilds a session from an exported `"{secret},{nullifier}"` record.
    pub fn from_record(text: &str) -> Result<Self, SessionError> {
        let (secret, nullifier) = parse_secret_record(text)?;
        Self::from_material(secret, nullifier)
    }

    pub fn from_material(secret: Secret, nullifier: Nullifier) -> Result<Self, SessionError> {
        let commitment = compute_commitment(&secret, &nullifier)?;
        let nullifier_hash = compute_nullifier_hash(&nullifier);
        Ok(Self {
            secret,
            nullifier,
            commitment,
            nullifier_hash,
        })
    }

    pub fn secret(&self) -> &Secret {
        &self.secret
    }

    pub fn nullifier(&self) -> &Nullifier {
        &self.nullifier
    }

    pub fn commitment(&self) -> Commitment {
        self.commitment
    }

    pub fn nullifier_hash(&self) -> NullifierHash {
        self.nullifier_hash
    }

    /// The exportable record; the only user-facing persisted artifact.
    pub fn record(&self) -> String {
        format_secret_record(&self.secret, &self.nullifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_derives_consistent_values() {
        let session = ClaimSession::generate().unwrap();
        let n = session.nullifier().value() as u64;
        assert_eq!(session.nullifier_hash().value(), n * n);

        let s = session.secret().value() as u64;
        assert_eq!(session.commitment().value(), s * s + n * n);
    }

    #[test]
    fn test_record_roundtrip() {
        let session = ClaimSession::generate().unwrap();
        let restored = ClaimSession::from_record(&session.record()).unwrap();
        assert_eq!(restored.commitment(), session.commitment());
        assert_eq!(restored.nullifier_hash(), session.nullifier_hash());
        assert_eq!(restored.record(), session.record());
    }

    #[test]
    fn test_from_record_known_vector() {
        let session = ClaimSession::from_record("123456789,987654321").unwrap();
        assert_eq!(session.commitment().value(), 990702636540161562);
        assert_eq!(session.nullifier_hash().value(), 975461057789971041);
    }

    #[test]
    fn test_from_record_rejects_malformed() {
        assert!(matches!(
            ClaimSession::from_record("123"),
            Err(SessionError::Record(_))
        ));
        assert!(matches!(
            ClaimSession::from_record("abc,123"),
            Err(SessionError::Record(_))
        ));
    }

    #[test]
    fn test_oversized_record_fails_at_commitment() {
        // the parser lets >31-bit values through; the overflow check catches
        // the ones whose squares-sum no longer fits in a u64
        let text = format!("{},{}", u32::MAX, u32::MAX);
        assert!(matches!(
            ClaimSession::from_record(&text),
            Err(SessionError::Commitment(CommitmentError::Overflow))
        ));
    }
}
