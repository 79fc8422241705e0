//! Brute-force search for a counter whose SHA-256 message hash starts with a
//! fixed 4-byte selector.
//!
//! The message is `selector ‖ keccak256(magic) ‖ word(64) ‖ word(32) ‖
//! word(counter)`, where `word` is a 32-byte big-endian ABI word. Counters are
//! tried in order from zero; the first one whose hash begins with the
//! selector bytes wins.

pub mod config;
pub mod digest;
pub mod error;
pub mod io_utils;
pub mod message;
pub mod report;
pub mod search;
pub mod selector;
pub mod stats;
pub mod word;

pub use config::Config;
pub use digest::{keccak256, magic_digest, sha256, MAGIC_STRING};
pub use error::GrindError;
pub use message::{MessagePrefix, HASH_LEN_WORD, PREFIX_LEN, SIGNATURE_LEN_WORD};
pub use report::Report;
pub use search::{
    find_match, search, verify, Attempt, Attempts, Progress, SearchOutcome, SearchParams,
    DEFAULT_STATUS_INTERVAL,
};
pub use selector::{Selector, SELECTOR_LEN};
pub use stats::SearchStats;
pub use word::{decode_word, decode_word_slice, encode_word, WORD_SIZE};
