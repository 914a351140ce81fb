//! field and point encoding for the on-chain pairing verifier
//!
//! The verifier consumes fixed-width little-endian byte layouts: 32 bytes per
//! field element, 64 per G1 point, 128 per G2 point. The G2 coordinate order
//! (c0 before c1) is a wire contract with the verifier and must never follow
//! a pairing library's internal convention instead.

use ark_ff::PrimeField;
use num_bigint::BigUint;
use thiserror::Error;

pub const FIELD_ELEMENT_BYTES: usize = 32;
pub const G1_POINT_BYTES: usize = 2 * FIELD_ELEMENT_BYTES;
pub const G2_POINT_BYTES: usize = 4 * FIELD_ELEMENT_BYTES;

const FIELD_ELEMENT_BITS: u64 = 8 * FIELD_ELEMENT_BYTES as u64;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("value does not fit in {FIELD_ELEMENT_BYTES} bytes: needs {bits} bits")]
    ValueTooWide { bits: u64 },
    #[error("invalid hex string: {0}")]
    InvalidHex(#[from] hex::FromHexError),
    #[error("invalid decimal coordinate: {0:?}")]
    InvalidCoordinate(String),
}

/// Writes `value` little-endian into exactly 32 bytes, zero padded.
/// A value of 2^256 or larger is an upstream logic bug and fails loudly.
pub fn encode_field_element(value: &BigUint) -> Result<[u8; FIELD_ELEMENT_BYTES], CodecError> {
    if value.bits() > FIELD_ELEMENT_BITS {
        return Err(CodecError::ValueTooWide { bits: value.bits() });
    }
    let le = value.to_bytes_le();
    let mut out = [0u8; FIELD_ELEMENT_BYTES];
    out[..le.len()].copy_from_slice(&le);
    Ok(out)
}

/// Inverse of [`encode_field_element`].
pub fn decode_field_element(bytes: &[u8; FIELD_ELEMENT_BYTES]) -> BigUint {
    BigUint::from_bytes_le(bytes)
}

/// Little-endian widening of a u64 public input into a 32-byte field element.
/// Infallible: every u64 fits with leading zero padding.
pub fn encode_u64_field(value: u64) -> [u8; FIELD_ELEMENT_BYTES] {
    let mut out = [0u8; FIELD_ELEMENT_BYTES];
    out[..8].copy_from_slice(&value.to_le_bytes());
    out
}

/// Encodes a G1 point as `x || y`, 64 bytes.
pub fn encode_g1_point(x: &BigUint, y: &BigUint) -> Result<[u8; G1_POINT_BYTES], CodecError> {
    let mut out = [0u8; G1_POINT_BYTES];
    out[..FIELD_ELEMENT_BYTES].copy_from_slice(&encode_field_element(x)?);
    out[FIELD_ELEMENT_BYTES..].copy_from_slice(&encode_field_element(y)?);
    Ok(out)
}

/// Encodes a G2 point as `x_c0 || x_c1 || y_c0 || y_c1`, 128 bytes.
pub fn encode_g2_point(
    x_c0: &BigUint,
    x_c1: &BigUint,
    y_c0: &BigUint,
    y_c1: &BigUint,
) -> Result<[u8; G2_POINT_BYTES], CodecError> {
    let mut out = [0u8; G2_POINT_BYTES];
    out[..32].copy_from_slice(&encode_field_element(x_c0)?);
    out[32..64].copy_from_slice(&encode_field_element(x_c1)?);
    out[64..96].copy_from_slice(&encode_field_element(y_c0)?);
    out[96..].copy_from_slice(&encode_field_element(y_c1)?);
    Ok(out)
}

/// Decodes a hex string, two characters per byte, most significant nibble
/// first. Odd length and non-hex characters are errors.
pub fn decode_hex(text: &str) -> Result<Vec<u8>, CodecError> {
    Ok(hex::decode(text)?)
}

/// Parses an arbitrary-precision non-negative decimal coordinate string, the
/// native form proving libraries hand back curve points in.
pub fn parse_coordinate(text: &str) -> Result<BigUint, CodecError> {
    text.parse::<BigUint>()
        .map_err(|_| CodecError::InvalidCoordinate(text.to_string()))
}

/// True when `value` is a canonical BN254 base field element.
pub fn is_canonical_fq(value: &BigUint) -> bool {
    let modulus: BigUint = ark_bn254::Fq::MODULUS.into();
    value < &modulus
}

#[cfg(test)]
mod tests {
    use super::*;

    fn max_field_value() -> BigUint {
        (BigUint::from(1u8) << 256u32) - 1u8
    }

    #[test]
    fn test_encode_zero() {
        let bytes = encode_field_element(&BigUint::from(0u8)).unwrap();
        assert_eq!(bytes, [0u8; 32]);
    }

    #[test]
    fn test_encode_max() {
        let bytes = encode_field_element(&max_field_value()).unwrap();
        assert_eq!(bytes, [0xffu8; 32]);
    }

    #[test]
    fn test_encode_too_wide() {
        let too_wide = BigUint::from(1u8) << 256u32;
        let err = encode_field_element(&too_wide).expect_err("expected range error");
        match err {
            CodecError::ValueTooWide { bits } => assert_eq!(bits, 257),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_encode_little_endian() {
        let bytes = encode_field_element(&BigUint::from(0x0102u32)).unwrap();
        assert_eq!(bytes[0], 0x02);
        assert_eq!(bytes[1], 0x01);
        assert!(bytes[2..].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_field_roundtrip() {
        for value in [
            BigUint::from(0u8),
            BigUint::from(1u8),
            BigUint::from(u64::MAX),
            BigUint::parse_bytes(b"990702636540161562", 10).unwrap(),
            max_field_value(),
        ] {
            let bytes = encode_field_element(&value).unwrap();
            assert_eq!(decode_field_element(&bytes), value);
        }
    }

    #[test]
    fn test_encode_u64_field_matches_biguint() {
        for value in [0u64, 1, 255, u64::MAX, 990702636540161562] {
            let via_biguint = encode_field_element(&BigUint::from(value)).unwrap();
            assert_eq!(encode_u64_field(value), via_biguint);
        }
    }

    #[test]
    fn test_g1_point_layout() {
        let bytes = encode_g1_point(&BigUint::from(1u8), &BigUint::from(2u8)).unwrap();
        assert_eq!(bytes.len(), G1_POINT_BYTES);
        assert_eq!(bytes[0], 1);
        assert!(bytes[1..32].iter().all(|b| *b == 0));
        assert_eq!(bytes[32], 2);
        assert!(bytes[33..].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_g2_point_coordinate_order() {
        // distinct values per limb so any c0/c1 swap shows up
        let bytes = encode_g2_point(
            &BigUint::from(0x11u8),
            &BigUint::from(0x22u8),
            &BigUint::from(0x33u8),
            &BigUint::from(0x44u8),
        )
        .unwrap();
        assert_eq!(bytes.len(), G2_POINT_BYTES);
        assert_eq!(bytes[0], 0x11);
        assert_eq!(bytes[32], 0x22);
        assert_eq!(bytes[64], 0x33);
        assert_eq!(bytes[96], 0x44);
    }

    #[test]
    fn test_decode_hex_empty() {
        assert_eq!(decode_hex("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_decode_hex_bytes() {
        assert_eq!(decode_hex("00ff").unwrap(), vec![0u8, 255u8]);
    }

    #[test]
    fn test_decode_hex_odd_length() {
        assert!(decode_hex("abc").is_err());
    }

    #[test]
    fn test_decode_hex_bad_digit() {
        assert!(decode_hex("zz").is_err());
    }

    #[test]
    fn test_parse_coordinate() {
        let value = parse_coordinate("987654321").unwrap();
        assert_eq!(value, BigUint::from(987654321u64));
    }

    #[test]
    fn test_parse_coordinate_rejects_garbage() {
        assert!(parse_coordinate("").is_err());
        assert!(parse_coordinate("12x3").is_err());
        assert!(parse_coordinate("-5").is_err());
    }

    #[test]
    fn test_canonical_fq() {
        assert!(is_canonical_fq(&BigUint::from(0u8)));
        assert!(is_canonical_fq(&BigUint::from(u64::MAX)));
        // BN254 base field modulus itself is not canonical
        let modulus: BigUint = ark_bn254::Fq::MODULUS.into();
        assert!(!is_canonical_fq(&modulus));
        assert!(is_canonical_fq(&(modulus - 1u8)));
    }
}
