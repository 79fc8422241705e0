use sha2::{Digest, Sha256};
use sha3::Keccak256;

/// Constant string whose Keccak-256 digest seeds the message prefix.
pub const MAGIC_STRING: &str = "CHALLENGE_MAGIC";

/// Legacy Keccak-256 as used by the EVM (not NIST SHA3-256).
pub fn keccak256(input: &[u8]) -> [u8; 32] {
    Keccak256::digest(input).into()
}

pub fn sha256(input: &[u8]) -> [u8; 32] {
    Sha256::digest(input).into()
}

/// Keccak-256 of `magic`, the base digest embedded in every message.
pub fn magic_digest(magic: &str) -> [u8; 32] {
    keccak256(magic.as_bytes())
}
