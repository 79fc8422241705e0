//! Run summary printed by the binary, as text or JSON.

use serde::Serialize;

use crate::message::MessagePrefix;
use crate::search::SearchOutcome;
use crate::selector::Selector;
use crate::GrindError;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Report {
    pub selector: String,
    pub digest: String,
    pub prefix: String,
    /// SHA-256 of the prefix alone.
    pub prefix_hash: String,
    pub counter: Option<u64>,
    pub hash: Option<String>,
    pub attempts: u64,
    pub elapsed_ms: u128,
}

impl Report {
    /// Report for a run that has not searched yet.
    pub fn new(selector: &Selector, digest: &[u8; 32], prefix: &MessagePrefix) -> Self {
        Self {
            selector: selector.to_string(),
            digest: hex::encode(digest),
            prefix: prefix.hex(),
            prefix_hash: hex::encode(prefix.hash()),
            counter: None,
            hash: None,
            attempts: 0,
            elapsed_ms: 0,
        }
    }

    pub fn record(&mut self, outcome: &SearchOutcome) {
        self.counter = outcome.found.map(|a| a.counter);
        self.hash = outcome.found.map(|a| a.hash_hex());
        self.attempts = outcome.attempts;
        self.elapsed_ms = outcome.elapsed.as_millis();
    }

    /// The header lines shown before the search starts.
    pub fn header_lines(&self) -> Vec<String> {
        vec![
            format!("Match Hex: {}", self.selector),
            format!("Magic Hashed Hex: {}", self.digest),
            format!("Concat: {}", self.prefix),
        ]
    }

    /// Lines shown once the search finished.
    pub fn result_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        match (self.counter, &self.hash) {
            (Some(counter), Some(hash)) => {
                lines.push("Match found!".to_string());
                lines.push(counter.to_string());
                lines.push(format!("Hash: {hash}"));
            }
            _ => lines.push(format!("No match after {} attempts", self.attempts)),
        }
        lines.push(format!("Hashed SHA256 Hex: {}", self.prefix_hash));
        lines
    }

    pub fn render_text(&self) -> String {
        let mut lines = self.header_lines();
        lines.extend(self.result_lines());
        lines.join("\n")
    }

    pub fn to_json(&self) -> Result<String, GrindError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Attempt;
    use std::time::Duration;

    fn report(found: Option<Attempt>) -> Report {
        let digest = [0u8; 32];
        let prefix = MessagePrefix::new(&Selector::DEFAULT, &digest);
        let outcome = SearchOutcome {
            found,
            attempts: 3,
            elapsed: Duration::from_millis(12),
        };
        let mut r = Report::new(&Selector::DEFAULT, &digest, &prefix);
        r.record(&outcome);
        r
    }

    #[test]
    fn text_for_match() {
        let r = report(Some(Attempt { counter: 2, hash: [0xab; 32] }));
        let text = r.render_text();
        assert!(text.starts_with("Match Hex: 1626ba7e"));
        assert!(text.contains("Match found!\n2\nHash: abab"));
        assert!(text.contains("Hashed SHA256 Hex: "));
    }

    #[test]
    fn json_for_miss() {
        let r = report(None);
        let value: serde_json::Value = serde_json::from_str(&r.to_json().unwrap()).unwrap();
        assert_eq!(value["counter"], serde_json::Value::Null);
        assert_eq!(value["attempts"], 3);
        assert_eq!(value["elapsed_ms"], 12);
        assert!(r.render_text().contains("No match after 3 attempts"));
    }
}
