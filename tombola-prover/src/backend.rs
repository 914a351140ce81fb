//! proving backends
//!
//! The proving capability is external: given named circuit inputs, a witness
//! program, and a proving key, it yields a Groth16 proof in decimal-string
//! coordinate form plus the public signals. [`SnarkjsBackend`] drives the
//! snarkjs CLI; anything implementing [`ProvingBackend`] can stand in.

use std::ffi::OsStr;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

use serde::{Deserialize, Serialize};

use tombola_core::session::ClaimSession;

use crate::artifacts::CircuitArtifacts;
use crate::proof::ProverError;

/// Circuit inputs keyed by the exact names the claim circuit declares.
/// The names are an external contract; a mismatch fails inside the proving
/// capability with an input-binding error, not here.
#[derive(Debug, Clone, Serialize)]
pub struct CircuitInputs {
    pub secret: String,
    pub nullifier: String,
    pub commitment: String,
    #[serde(rename = "nullifierHash")]
    pub nullifier_hash: String,
}

impl CircuitInputs {
    pub fn from_session(session: &ClaimSession) -> Self {
        Self {
            secret: session.secret().value().to_string(),
            nullifier: session.nullifier().value().to_string(),
            commitment: session.commitment().value().to_string(),
            nullifier_hash: session.nullifier_hash().value().to_string(),
        }
    }
}

/// A Groth16 proof as the proving library hands it back: projective points
/// with arbitrary-precision decimal coordinates.
#[derive(Debug, Clone, Deserialize)]
pub struct RawProof {
    pub pi_a: Vec<String>,
    pub pi_b: Vec<Vec<String>>,
    pub pi_c: Vec<String>,
}

pub struct ProofOutput {
    pub proof: RawProof,
    pub public_signals: Vec<String>,
}

pub trait ProvingBackend {
    fn prove(
        &self,
        inputs: &CircuitInputs,
        artifacts: &CircuitArtifacts,
    ) -> Result<ProofOutput, ProverError>;
}

/// Shells out to `snarkjs groth16 fullprove`. The binary is looked up in
/// PATH, overridable through `SNARKJS_BIN`.
pub struct SnarkjsBackend {
    work_dir: PathBuf,
}

impl SnarkjsBackend {
    pub fn new(work_dir: PathBuf) -> Self {
        Self { work_dir }
    }
}

impl ProvingBackend for SnarkjsBackend {
    fn prove(
        &self,
        inputs: &CircuitInputs,
        artifacts: &CircuitArtifacts,
    ) -> Result<ProofOutput, ProverError> {
        let input_path = self.work_dir.join("claim_input.json");
        let proof_path = self.work_dir.join("claim_proof.json");
        let public_path = self.work_dir.join("claim_public.json");

        let _input_guard = TempFileGuard::new(input_path.clone());
        let _proof_guard = TempFileGuard::new(proof_path.clone());
        let _public_guard = TempFileGuard::new(public_path.clone());

        fs::write(&input_path, serde_json::to_vec(inputs)?)?;

        log::debug!("running snarkjs fullprove in {}", self.work_dir.display());
        run_cmd(
            Command::new(tool_path("snarkjs"))
                .arg("groth16")
                .arg("fullprove")
                .arg(&input_path)
                .arg(&artifacts.witness_program)
                .arg(&artifacts.proving_key)
                .arg(&proof_path)
                .arg(&public_path),
        )?;

        if !proof_path.exists() {
            return Err(ProverError::MissingOutput(proof_path));
        }
        if !public_path.exists() {
            return Err(ProverError::MissingOutput(public_path));
        }

        let proof: RawProof = serde_json::from_slice(&fs::read(&proof_path)?)?;
        let public_signals: Vec<String> = serde_json::from_slice(&fs::read(&public_path)?)?;
        log::debug!("proof generated with {} public signals", public_signals.len());

        Ok(ProofOutput {
            proof,
            public_signals,
        })
    }
}

fn tool_path<S: AsRef<OsStr>>(name: S) -> PathBuf {
    let name_ref = name.as_ref();
    let env_key = format!("{}_BIN", name_ref.to_string_lossy().to_uppercase());
    if let Some(path) = std::env::var_os(env_key) {
        PathBuf::from(path)
    } else {
        PathBuf::from(name_ref)
    }
}

fn run_cmd(cmd: &mut Command) -> Result<(), ProverError> {
    let cmd_str = format!("{:?}", cmd);
    let output = cmd.output().map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ProverError::MissingTool(cmd.get_program().to_string_lossy().to_string())
        } else {
            ProverError::Io(e)
        }
    })?;

    if !output.status.success() {
        return Err(ProverError::CommandFailed {
            cmd: cmd_str,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        });
    }
    Ok(())
}

struct TempFileGuard {
    path: PathBuf,
}

impl TempFileGuard {
    fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl Drop for TempFileGuard {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}
