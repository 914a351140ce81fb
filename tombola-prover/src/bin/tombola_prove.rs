use std::path::PathBuf;

use tombola_core::{encode_u64_field, ClaimSession, VerificationKey};
use tombola_prover::{generate_claim_proof, load_record, save_record, CircuitArtifacts, SnarkjsBackend};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: tombola_prove <artifact_dir> [record_file|random]");
        std::process::exit(1);
    }

    let vk = VerificationKey::from_embedded().expect("verification key integrity check failed");
    let summary = vk.summary();
    log::info!(
        "verification key loaded: {} {} ({} bytes, {} public inputs)",
        summary.protocol,
        summary.curve,
        summary.total_bytes,
        summary.public_inputs
    );

    let artifact_dir = PathBuf::from(&args[1]);
    let artifacts = CircuitArtifacts::locate(&artifact_dir).expect("circuit artifacts missing");

    let session = match args.get(2).map(|s| s.as_str()) {
        None | Some("random") => ClaimSession::generate().expect("secret generation failed"),
        Some(record_file) => {
            let path = PathBuf::from(record_file);
            if path.exists() {
                let (secret, nullifier) = load_record(&path).expect("failed to load record");
                ClaimSession::from_material(secret, nullifier).expect("invalid record values")
            } else {
                let session = ClaimSession::generate().expect("secret generation failed");
                save_record(&path, session.secret(), session.nullifier())
                    .expect("failed to save record");
                log::info!("new secret record written to {}", path.display());
                session
            }
        }
    };

    println!("commitment={}", session.commitment().value());
    println!("nullifier_hash={}", session.nullifier_hash().value());
    println!(
        "commitment_hex={}",
        hex::encode(encode_u64_field(session.commitment().value()))
    );
    println!(
        "nullifier_hash_hex={}",
        hex::encode(encode_u64_field(session.nullifier_hash().value()))
    );

    let backend = SnarkjsBackend::new(artifact_dir);
    let result =
        generate_claim_proof(&backend, &session, &artifacts).expect("proof generation failed");

    println!("proof_a_hex={}", hex::encode(result.proof.proof_a));
    println!("proof_b_hex={}", hex::encode(result.proof.proof_b));
    println!("proof_c_hex={}", hex::encode(result.proof.proof_c));
    println!("public_signals={}", result.public_signals.join(","));
}
