//! The fixed message prefix hashed on every attempt.
//!
//! Layout: `selector ‖ base digest ‖ word(64) ‖ word(32)`, 100 bytes. The two
//! trailing words mirror the ABI head of an `isValidSignature` call and are
//! carried as opaque constants.

use crate::digest::sha256;
use crate::selector::{Selector, SELECTOR_LEN};
use crate::word::{encode_word, WORD_SIZE};

/// Opaque word following the digest (signature length in the ABI layout).
pub const SIGNATURE_LEN_WORD: u64 = 64;
/// Opaque word following the signature length (hash length).
pub const HASH_LEN_WORD: u64 = 32;

/// Total prefix length in bytes.
pub const PREFIX_LEN: usize = SELECTOR_LEN + 32 + 2 * WORD_SIZE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessagePrefix {
    bytes: Vec<u8>,
}

impl MessagePrefix {
    pub fn new(selector: &Selector, digest: &[u8; 32]) -> Self {
        let mut bytes = Vec::with_capacity(PREFIX_LEN + WORD_SIZE);
        bytes.extend_from_slice(selector.as_bytes());
        bytes.extend_from_slice(digest);
        bytes.extend_from_slice(&encode_word(SIGNATURE_LEN_WORD));
        bytes.extend_from_slice(&encode_word(HASH_LEN_WORD));
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    /// Full message for one attempt: the prefix followed by `word(counter)`.
    pub fn with_counter(&self, counter: u64) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.bytes.len() + WORD_SIZE);
        out.extend_from_slice(&self.bytes);
        out.extend_from_slice(&encode_word(counter));
        out
    }

    /// SHA-256 of the bare prefix, without any counter.
    pub fn hash(&self) -> [u8; 32] {
        sha256(&self.bytes)
    }
}
