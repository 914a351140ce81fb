//! compiled circuit artifacts
//!
//! Two opaque blobs fixed per circuit version: the witness-computation
//! program and the Groth16 proving key. Located by their logical names under
//! a caller-supplied directory; both are required before proving starts.

use std::path::{Path, PathBuf};

use crate::proof::ProverError;

pub const WITNESS_PROGRAM_FILE: &str = "claim.wasm";
pub const PROVING_KEY_FILE: &str = "claim_final.zkey";

#[derive(Debug)]
pub struct CircuitArtifacts {
    pub witness_program: PathBuf,
    pub proving_key: PathBuf,
}

impl CircuitArtifacts {
    pub fn new(witness_program: PathBuf, proving_key: PathBuf) -> Self {
        Self {
            witness_program,
            proving_key,
        }
    }

    /// Resolves both artifacts under `dir` by their fixed names.
    pub fn locate(dir: &Path) -> Result<Self, ProverError> {
        let witness_program = dir.join(WITNESS_PROGRAM_FILE);
        if !witness_program.exists() {
            return Err(ProverError::MissingArtifact(witness_program));
        }
        let proving_key = dir.join(PROVING_KEY_FILE);
        if !proving_key.exists() {
            return Err(ProverError::MissingArtifact(proving_key));
        }
        Ok(Self {
            witness_program,
            proving_key,
        })
    }
}
