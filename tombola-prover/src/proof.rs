//! proof orchestration and verifier-ready encoding

use std::path::PathBuf;

use num_bigint::BigUint;
use thiserror::Error;

use tombola_core::codec::{
    encode_g1_point, encode_g2_point, is_canonical_fq, parse_coordinate, CodecError,
    G1_POINT_BYTES, G2_POINT_BYTES,
};
use tombola_core::session::ClaimSession;

use crate::artifacts::CircuitArtifacts;
use crate::backend::{CircuitInputs, ProvingBackend, RawProof};

#[derive(Debug, Error)]
pub enum ProverError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("missing tool in PATH: {0}")]
    MissingTool(String),
    #[error("command failed: {cmd}\nstdout: {stdout}\nstderr: {stderr}")]
    CommandFailed {
        cmd: String,
        stdout: String,
        stderr: String,
    },
    #[error("missing expected output file: {0}")]
    MissingOutput(PathBuf),
    #[error("missing circuit artifact: {0}")]
    MissingArtifact(PathBuf),
    #[error("malformed {component}: expected {expected} affine coordinates")]
    MalformedPoint {
        component: &'static str,
        expected: usize,
    },
    #[error("{component} coordinate exceeds the BN254 base field")]
    NonCanonicalCoordinate { component: &'static str },
    #[error("encoding error: {0}")]
    Encoding(#[from] CodecError),
}

/// A claim proof in the byte layout the on-chain verifier consumes.
#[derive(Debug)]
pub struct ClaimProof {
    pub proof_a: [u8; G1_POINT_BYTES],
    pub proof_b: [u8; G2_POINT_BYTES],
    pub proof_c: [u8; G1_POINT_BYTES],
}

#[derive(Debug)]
pub struct ProofResult {
    pub proof: ClaimProof,
    pub public_signals: Vec<String>,
}

/// Drives the proving backend with the session's circuit inputs and encodes
/// the resulting points. Backend failures pass through untouched; diagnosing
/// a witness or constraint failure needs the underlying detail.
pub fn generate_claim_proof<B: ProvingBackend>(
    backend: &B,
    session: &ClaimSession,
    artifacts: &CircuitArtifacts,
) -> Result<ProofResult, ProverError> {
    let inputs = CircuitInputs::from_session(session);
    let output = backend.prove(&inputs, artifacts)?;
    log::debug!(
        "proving backend returned {} public signals",
        output.public_signals.len()
    );
    let proof = encode_proof(&output.proof)?;
    Ok(ProofResult {
        proof,
        public_signals: output.public_signals,
    })
}

/// Encodes a native proof (projective decimal-string coordinates) into the
/// verifier's fixed layout. Only the two affine components of each coordinate
/// are consumed; the trailing projective term is ignored.
pub fn encode_proof(raw: &RawProof) -> Result<ClaimProof, ProverError> {
    let (a_x, a_y) = g1_coordinates("proof_a", &raw.pi_a)?;
    let (b_x, b_y) = g2_coordinates("proof_b", &raw.pi_b)?;
    let (c_x, c_y) = g1_coordinates("proof_c", &raw.pi_c)?;

    Ok(ClaimProof {
        proof_a: encode_g1_point(&a_x, &a_y)?,
        proof_b: encode_g2_point(&b_x.0, &b_x.1, &b_y.0, &b_y.1)?,
        proof_c: encode_g1_point(&c_x, &c_y)?,
    })
}

fn g1_coordinates(
    component: &'static str,
    point: &[String],
) -> Result<(BigUint, BigUint), ProverError> {
    if point.len() < 2 {
        return Err(ProverError::MalformedPoint {
            component,
            expected: 2,
        });
    }
    let x = field_coordinate(component, &point[0])?;
    let y = field_coordinate(component, &point[1])?;
    Ok((x, y))
}

type G2Coordinate = (BigUint, BigUint);

fn g2_coordinates(
    component: &'static str,
    point: &[Vec<String>],
) -> Result<(G2Coordinate, G2Coordinate), ProverError> {
    // native form is [[x_c0, x_c1], [y_c0, y_c1]]; the verifier wants the
    // same c0-first order, so no limb swap happens here
    if point.len() < 2 || point[0].len() < 2 || point[1].len() < 2 {
        return Err(ProverError::MalformedPoint {
            component,
            expected: 4,
        });
    }
    let x_c0 = field_coordinate(component, &point[0][0])?;
    let x_c1 = field_coordinate(component, &point[0][1])?;
    let y_c0 = field_coordinate(component, &point[1][0])?;
    let y_c1 = field_coordinate(component, &point[1][1])?;
    Ok(((x_c0, x_c1), (y_c0, y_c1)))
}

fn field_coordinate(component: &'static str, text: &str) -> Result<BigUint, ProverError> {
    let value = parse_coordinate(text)?;
    if !is_canonical_fq(&value) {
        return Err(ProverError::NonCanonicalCoordinate { component });
    }
    Ok(value)
}
