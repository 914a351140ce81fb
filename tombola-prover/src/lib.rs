//! off-chain claim proof utilities

pub mod artifacts;
pub mod backend;
pub mod proof;
pub mod store;

pub use artifacts::{CircuitArtifacts, PROVING_KEY_FILE, WITNESS_PROGRAM_FILE};
pub use backend::{CircuitInputs, ProofOutput, ProvingBackend, RawProof, SnarkjsBackend};
pub use proof::{encode_proof, generate_claim_proof, ClaimProof, ProofResult, ProverError};
pub use store::{load_record, save_record, StoreError};
