//! Brute-force counter search.
//!
//! [`Attempts`] lazily yields `(counter, hash)` pairs where
//! `hash = SHA-256(prefix ‖ word(counter))`. [`search`] walks that iterator in
//! order and stops at the first hash whose leading bytes equal the selector.
//! Progress reporting is left to a caller-supplied hook so the search itself
//! never prints.

use sha2::{Digest, Sha256};
use std::time::Duration;

use crate::message::MessagePrefix;
use crate::selector::{Selector, SELECTOR_LEN};
use crate::stats::SearchStats;
use crate::word::encode_word;

/// Default number of counters between progress callbacks.
pub const DEFAULT_STATUS_INTERVAL: u64 = 10_000_000;

/// One hashed counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attempt {
    pub counter: u64,
    pub hash: [u8; 32],
}

impl Attempt {
    pub fn hash_hex(&self) -> String {
        hex::encode(self.hash)
    }
}

/// Iterator over consecutive counters starting at `start`.
///
/// The SHA-256 state after absorbing the prefix is kept and cloned for each
/// attempt, so the prefix is only compressed once. The iterator ends after
/// yielding `u64::MAX`.
#[derive(Clone)]
pub struct Attempts {
    base: Sha256,
    next: Option<u64>,
}

impl Attempts {
    pub fn new(prefix: &MessagePrefix, start: u64) -> Self {
        let mut base = Sha256::new();
        base.update(prefix.as_bytes());
        Self {
            base,
            next: Some(start),
        }
    }
}

impl Iterator for Attempts {
    type Item = Attempt;

    fn next(&mut self) -> Option<Attempt> {
        let counter = self.next?;
        self.next = counter.checked_add(1);
        let hash: [u8; 32] = self
            .base
            .clone()
            .chain_update(encode_word(counter))
            .finalize()
            .into();
        Some(Attempt { counter, hash })
    }
}

/// Parameters of a single search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchParams {
    /// Number of leading selector bytes that must match (1..=4).
    pub width: usize,
    /// Progress hook fires when the next counter is a multiple of this.
    pub status_interval: u64,
    pub start: u64,
    /// Stop after this many hashes. `None` searches until a match.
    pub max_attempts: Option<u64>,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            width: SELECTOR_LEN,
            status_interval: DEFAULT_STATUS_INTERVAL,
            start: 0,
            max_attempts: None,
        }
    }
}

/// Snapshot handed to the progress hook.
#[derive(Debug, Clone, Copy)]
pub struct Progress {
    /// Next counter to be tried.
    pub counter: u64,
    pub stats: SearchStats,
}

/// Result of [`search`].
#[derive(Debug, Clone, Copy)]
pub struct SearchOutcome {
    pub found: Option<Attempt>,
    pub attempts: u64,
    pub elapsed: Duration,
}

/// Scan counters from `params.start` upward and return the first match.
pub fn search<F>(
    prefix: &MessagePrefix,
    selector: &Selector,
    params: &SearchParams,
    mut on_progress: F,
) -> SearchOutcome
where
    F: FnMut(&Progress),
{
    let mut stats = SearchStats::new();
    let limit = params.max_attempts.unwrap_or(u64::MAX);
    let interval = params.status_interval.max(1);

    for attempt in Attempts::new(prefix, params.start) {
        if stats.attempts() >= limit {
            break;
        }
        stats.tick();
        if selector.matches(&attempt.hash, params.width) {
            return SearchOutcome {
                found: Some(attempt),
                attempts: stats.attempts(),
                elapsed: stats.elapsed(),
            };
        }
        if let Some(next) = attempt.counter.checked_add(1) {
            if next % interval == 0 {
                on_progress(&Progress {
                    counter: next,
                    stats,
                });
            }
        }
    }

    SearchOutcome {
        found: None,
        attempts: stats.attempts(),
        elapsed: stats.elapsed(),
    }
}

/// [`search`] without the bookkeeping: just the matching attempt, if any.
pub fn find_match<F>(
    prefix: &MessagePrefix,
    selector: &Selector,
    params: &SearchParams,
    on_progress: F,
) -> Option<Attempt>
where
    F: FnMut(&Progress),
{
    search(prefix, selector, params, on_progress).found
}

/// Hash a single known counter and report whether it satisfies the selector.
pub fn verify(
    prefix: &MessagePrefix,
    selector: &Selector,
    counter: u64,
    width: usize,
) -> (Attempt, bool) {
    let hash: [u8; 32] = Sha256::digest(prefix.with_counter(counter)).into();
    let attempt = Attempt { counter, hash };
    let ok = selector.matches(&attempt.hash, width);
    (attempt, ok)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digest::{magic_digest, MAGIC_STRING};

    fn prefix() -> MessagePrefix {
        MessagePrefix::new(&Selector::DEFAULT, &magic_digest(MAGIC_STRING))
    }

    #[test]
    fn iterator_matches_direct_hash() {
        let p = prefix();
        for attempt in Attempts::new(&p, 10).take(3) {
            let (direct, _) = verify(&p, &Selector::DEFAULT, attempt.counter, 4);
            assert_eq!(attempt, direct);
        }
    }

    #[test]
    fn iterator_stops_at_u64_max() {
        let p = prefix();
        let counters: Vec<u64> = Attempts::new(&p, u64::MAX - 1).map(|a| a.counter).collect();
        assert_eq!(counters, vec![u64::MAX - 1, u64::MAX]);
    }

    #[test]
    fn progress_fires_on_interval() {
        let p = prefix();
        let params = SearchParams {
            width: 4,
            status_interval: 10,
            start: 0,
            max_attempts: Some(35),
        };
        let mut seen = Vec::new();
        let outcome = search(&p, &Selector::DEFAULT, &params, |prog| seen.push(prog.counter));
        assert!(outcome.found.is_none());
        assert_eq!(outcome.attempts, 35);
        assert_eq!(seen, vec![10, 20, 30]);
    }
}
