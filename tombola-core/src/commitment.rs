//! secret material generation and commitment arithmetic

use getrandom::getrandom;
use thiserror::Error;

use crate::types::{Commitment, Nullifier, NullifierHash, Secret};

/// Freshly generated secrets and nullifiers are bounded to 31 bits so that
/// `secret^2 + nullifier^2` always fits in a u64, the widest integer the
/// claim circuit works with.
pub const SECRET_BITS: u32 = 31;

const SECRET_MASK: u32 = (1 << SECRET_BITS) - 1;

#[derive(Debug, Error)]
pub enum RandomError {
    #[error("system randomness unavailable: {0}")]
    Unavailable(#[from] getrandom::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommitmentError {
    #[error("commitment overflows u64: inputs exceed the {SECRET_BITS}-bit bound")]
    Overflow,
}

fn draw_u31() -> Result<u32, RandomError> {
    let mut bytes = [0u8; 4];
    getrandom(&mut bytes)?;
    Ok(u32::from_be_bytes(bytes) & SECRET_MASK)
}

/// Draws a fresh secret/nullifier pair, each uniform over `[0, 2^31)`.
pub fn generate_secret_material() -> Result<(Secret, Nullifier), RandomError> {
    let secret = Secret::new(draw_u31()?);
    let nullifier = Nullifier::new(draw_u31()?);
    Ok((secret, nullifier))
}

/// `secret^2 + nullifier^2` with no modular reduction. Computed through u128
/// so an over-wide record-loaded value surfaces as [`CommitmentError::Overflow`]
/// instead of wrapping.
pub fn compute_commitment(
    secret: &Secret,
    nullifier: &Nullifier,
) -> Result<Commitment, CommitmentError> {
    let s = secret.value() as u128;
    let n = nullifier.value() as u128;
    let sum = s * s + n * n;
    u64::try_from(sum)
        .map(Commitment::new)
        .map_err(|_| CommitmentError::Overflow)
}

/// `nullifier^2`. A u32 square always fits in a u64.
pub fn compute_nullifier_hash(nullifier: &Nullifier) -> NullifierHash {
    let n = nullifier.value() as u64;
    NullifierHash::new(n * n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_within_bound() {
        for _ in 0..32 {
            let (secret, nullifier) = generate_secret_material().unwrap();
            assert!(secret.value() <= SECRET_MASK);
            assert!(nullifier.value() <= SECRET_MASK);
        }
    }

    #[test]
    fn test_generate_independent_draws() {
        let (secret, nullifier) = generate_secret_material().unwrap();
        let (secret2, nullifier2) = generate_secret_material().unwrap();
        // four independent 31-bit draws colliding pairwise is vanishingly unlikely
        assert!(
            secret.value() != secret2.value()
                || nullifier.value() != nullifier2.value()
        );
    }

    #[test]
    fn test_commitment_known_vector() {
        let secret = Secret::new(123456789);
        let nullifier = Nullifier::new(987654321);

        let commitment = compute_commitment(&secret, &nullifier).unwrap();
        assert_eq!(commitment.value(), 990702636540161562);

        let hash = compute_nullifier_hash(&nullifier);
        assert_eq!(hash.value(), 975461057789971041);
    }

    #[test]
    fn test_commitment_symmetric() {
        // sum of squares, so swapping the pair yields the same commitment;
        // the circuit relies on the nullifier hash, not the commitment, to
        // distinguish the two roles
        let a = 123456789u32;
        let b = 987654321u32;
        let c1 = compute_commitment(&Secret::new(a), &Nullifier::new(b)).unwrap();
        let c2 = compute_commitment(&Secret::new(b), &Nullifier::new(a)).unwrap();
        assert_eq!(c1, c2);
    }

    #[test]
    fn test_commitment_max_in_bound_inputs() {
        let max = SECRET_MASK;
        let commitment =
            compute_commitment(&Secret::new(max), &Nullifier::new(max)).unwrap();
        assert_eq!(commitment.value(), 2 * (max as u64) * (max as u64));
    }

    #[test]
    fn test_commitment_overflow_detected() {
        // u32::MAX is loadable from a record but its squares-sum exceeds u64
        let err = compute_commitment(&Secret::new(u32::MAX), &Nullifier::new(u32::MAX))
            .expect_err("expected overflow");
        assert_eq!(err, CommitmentError::Overflow);
    }

    #[test]
    fn test_commitment_matches_masked_variant() {
        // circuit-compatible reference: square and sum masked to 64 bits must
        // agree with the checked path whenever no overflow occurs
        let secret = 123456789u64;
        let nullifier = 987654321u64;
        let masked = (secret * secret).wrapping_add(nullifier * nullifier);

        let checked =
            compute_commitment(&Secret::new(secret as u32), &Nullifier::new(nullifier as u32))
                .unwrap();
        assert_eq!(checked.value(), masked);
    }

    #[test]
    fn test_nullifier_hash_zero() {
        assert_eq!(compute_nullifier_hash(&Nullifier::new(0)).value(), 0);
    }
}
