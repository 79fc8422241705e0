use std::fmt;

#[derive(Debug)]
pub struct CliError {
    pub msg: String,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.msg.fmt(f)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Simple CLI error from string.
pub fn simple_cli_error(msg: &str) -> CliError {
    CliError {
        msg: msg.to_string(),
        source: None,
    }
}

/// Convert a library error into a CLI error with a hint.
pub fn grind_cli_error(context: &str, err: crate::GrindError) -> CliError {
    CliError {
        msg: format!("{}: {}", context, cli_hint(&err)),
        source: Some(Box::new(err)),
    }
}

/// Return an actionable hint for an error variant.
pub fn cli_hint(err: &crate::GrindError) -> String {
    use crate::GrindError::*;
    match err {
        InvalidHex(e) => format!("{e}. Pass hex digits only, optionally prefixed with 0x."),
        SelectorLength(n) => format!("selector is {n} bytes. Use exactly 8 hex digits."),
        WordLength(n) => format!("word is {n} bytes. Expected 32."),
        WordOverflow => "word does not fit in 64 bits.".to_string(),
        Config(msg) => format!("{msg}. Invalid configuration."),
        NotFound { attempts } => {
            format!("no match after {attempts} attempts. Raise --max-attempts or drop it.")
        }
        Json(e) => format!("{e}. This is a bug."),
    }
}
