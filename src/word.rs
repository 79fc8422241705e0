//! Fixed-width 32-byte words as used by the EVM ABI.
//!
//! A `u64` occupies the last 8 bytes of the word in big-endian order; the 24
//! leading bytes are always zero.

use crate::GrindError;

/// Width of an ABI word in bytes.
pub const WORD_SIZE: usize = 32;

const PAD: usize = WORD_SIZE - 8;

/// Encode `n` as a right-aligned big-endian 32-byte word.
pub fn encode_word(n: u64) -> [u8; WORD_SIZE] {
    let mut out = [0u8; WORD_SIZE];
    out[PAD..].copy_from_slice(&n.to_be_bytes());
    out
}

/// Decode a word produced by [`encode_word`].
///
/// Fails with [`GrindError::WordOverflow`] if the value does not fit in a
/// `u64`.
pub fn decode_word(word: &[u8; WORD_SIZE]) -> Result<u64, GrindError> {
    if word[..PAD].iter().any(|&b| b != 0) {
        return Err(GrindError::WordOverflow);
    }
    let mut low = [0u8; 8];
    low.copy_from_slice(&word[PAD..]);
    Ok(u64::from_be_bytes(low))
}

/// Like [`decode_word`] but accepts any slice and checks its length first.
pub fn decode_word_slice(bytes: &[u8]) -> Result<u64, GrindError> {
    let word: &[u8; WORD_SIZE] = bytes
        .try_into()
        .map_err(|_| GrindError::WordLength(bytes.len()))?;
    decode_word(word)
}
