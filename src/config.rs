use crate::digest::MAGIC_STRING;
use crate::search::{SearchParams, DEFAULT_STATUS_INTERVAL};
use crate::selector::{Selector, SELECTOR_LEN};
use crate::GrindError;

/// Runtime configuration for a search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Target bytes the hash must start with.
    pub selector: Selector,
    /// String hashed with Keccak-256 to produce the base digest.
    pub magic: String,
    /// Number of leading selector bytes that must match.
    pub match_width: usize,
    /// Counters between progress reports.
    pub status_interval: u64,
    /// First counter to try.
    pub start: u64,
    /// Optional cap on the number of hashes computed.
    pub max_attempts: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            selector: Selector::DEFAULT,
            magic: MAGIC_STRING.to_string(),
            match_width: SELECTOR_LEN,
            status_interval: DEFAULT_STATUS_INTERVAL,
            start: 0,
            max_attempts: None,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), GrindError> {
        if !(1..=SELECTOR_LEN).contains(&self.match_width) {
            return Err(GrindError::Config(format!(
                "match width must be between 1 and {SELECTOR_LEN}, got {}",
                self.match_width
            )));
        }
        if self.status_interval == 0 {
            return Err(GrindError::Config(
                "status interval must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn search_params(&self) -> SearchParams {
        SearchParams {
            width: self.match_width,
            status_interval: self.status_interval,
            start: self.start,
            max_attempts: self.max_attempts,
        }
    }
}
