//! Four-byte match targets.

use std::fmt;
use std::str::FromStr;

use crate::GrindError;

/// Number of bytes in a selector.
pub const SELECTOR_LEN: usize = 4;

/// A 4-byte target that the leading bytes of a hash must equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selector([u8; SELECTOR_LEN]);

impl Selector {
    /// `isValidSignature(bytes32,bytes)` from ERC-1271.
    pub const DEFAULT: Selector = Selector([0x16, 0x26, 0xba, 0x7e]);

    pub const fn new(bytes: [u8; SELECTOR_LEN]) -> Self {
        Self(bytes)
    }

    /// Parse a selector from hex, with or without a `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self, GrindError> {
        let s = s.trim();
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        let bytes = hex::decode(digits)?;
        let arr: [u8; SELECTOR_LEN] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| GrindError::SelectorLength(bytes.len()))?;
        Ok(Self(arr))
    }

    pub fn as_bytes(&self) -> &[u8; SELECTOR_LEN] {
        &self.0
    }

    /// True if the first `width` bytes of `hash` equal the first `width`
    /// selector bytes. `width` is clamped to the selector length.
    pub fn matches(&self, hash: &[u8], width: usize) -> bool {
        let width = width.min(SELECTOR_LEN);
        hash.len() >= width && hash[..width] == self.0[..width]
    }
}

impl Default for Selector {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromStr for Selector {
    type Err = GrindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_and_without_prefix() {
        assert_eq!(Selector::from_hex("1626ba7e").unwrap(), Selector::DEFAULT);
        assert_eq!(Selector::from_hex("0x1626BA7E").unwrap(), Selector::DEFAULT);
        assert_eq!(Selector::DEFAULT.to_string(), "1626ba7e");
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            Selector::from_hex("1626ba"),
            Err(GrindError::SelectorLength(3))
        ));
        assert!(matches!(
            Selector::from_hex("zz26ba7e"),
            Err(GrindError::InvalidHex(_))
        ));
    }

    #[test]
    fn partial_width_matching() {
        let sel = Selector::DEFAULT;
        let hash = [0x16, 0x26, 0x00, 0x00, 0xff];
        assert!(sel.matches(&hash, 1));
        assert!(sel.matches(&hash, 2));
        assert!(!sel.matches(&hash, 3));
        assert!(!sel.matches(&hash, 4));
    }
}
