//! commitment and proof-encoding primitives for tombola claims

pub mod codec;
pub mod commitment;
pub mod record;
pub mod session;
pub mod types;
pub mod vk;

pub use codec::{
    decode_field_element, decode_hex, encode_field_element, encode_g1_point, encode_g2_point,
    encode_u64_field, is_canonical_fq, parse_coordinate, CodecError, FIELD_ELEMENT_BYTES,
    G1_POINT_BYTES, G2_POINT_BYTES,
};
pub use commitment::{
    compute_commitment, compute_nullifier_hash, generate_secret_material, CommitmentError,
    RandomError, SECRET_BITS,
};
pub use record::{format_secret_record, parse_secret_record, RecordError};
pub use session::{ClaimSession, SessionError};
pub use types::{Commitment, Nullifier, NullifierHash, Secret};
pub use vk::{VerificationKey, VkError, VkSummary};
