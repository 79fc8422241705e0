use clap::Parser;
use selgrind::io_utils::{grind_cli_error, simple_cli_error};
use selgrind::{
    magic_digest, search, verify, Config, GrindError, MessagePrefix, Report, SearchOutcome,
    Selector, DEFAULT_STATUS_INTERVAL, MAGIC_STRING, SELECTOR_LEN,
};
use std::time::Instant;

/// Find the first counter whose SHA-256 message hash starts with the selector.
#[derive(Parser)]
#[command(name = "selgrind", version)]
struct Args {
    /// Target selector as hex (4 bytes)
    #[arg(long, default_value_t = Selector::DEFAULT.to_string())]
    selector: String,
    /// String hashed with Keccak-256 into the base digest
    #[arg(long, default_value = MAGIC_STRING)]
    magic: String,
    /// Number of leading selector bytes that must match
    #[arg(long, default_value_t = SELECTOR_LEN)]
    match_bytes: usize,
    /// Counters between progress lines on stderr
    #[arg(long, default_value_t = DEFAULT_STATUS_INTERVAL)]
    status_interval: u64,
    /// First counter to try
    #[arg(long, default_value_t = 0)]
    start: u64,
    /// Give up after this many hashes
    #[arg(long)]
    max_attempts: Option<u64>,
    /// Check a single counter instead of searching
    #[arg(long)]
    verify: Option<u64>,
    /// Print the report as JSON on stdout
    #[arg(long)]
    json: bool,
}

impl Args {
    fn config(&self) -> Result<Config, GrindError> {
        let cfg = Config {
            selector: Selector::from_hex(&self.selector)?,
            magic: self.magic.clone(),
            match_width: self.match_bytes,
            status_interval: self.status_interval,
            start: self.start,
            max_attempts: self.max_attempts,
        };
        cfg.validate()?;
        Ok(cfg)
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let cfg = args
        .config()
        .map_err(|e| grind_cli_error("invalid arguments", e))?;

    let digest = magic_digest(&cfg.magic);
    let prefix = MessagePrefix::new(&cfg.selector, &digest);
    let mut report = Report::new(&cfg.selector, &digest, &prefix);

    if !args.json {
        for line in report.header_lines() {
            println!("{line}");
        }
    }

    let outcome = match args.verify {
        Some(counter) => {
            let started = Instant::now();
            let (attempt, ok) = verify(&prefix, &cfg.selector, counter, cfg.match_width);
            if !ok {
                eprintln!(
                    "counter {} does not match: hash {}",
                    counter,
                    attempt.hash_hex()
                );
            }
            SearchOutcome {
                found: ok.then_some(attempt),
                attempts: 1,
                elapsed: started.elapsed(),
            }
        }
        None => search(&prefix, &cfg.selector, &cfg.search_params(), |progress| {
            eprintln!("{}", progress.stats.status_line(progress.counter));
        }),
    };
    report.record(&outcome);

    if args.json {
        let json = report
            .to_json()
            .map_err(|e| grind_cli_error("writing report", e))?;
        println!("{json}");
    } else {
        for line in report.result_lines() {
            println!("{line}");
        }
        eprintln!(
            "{} hashes in {:.2?}",
            outcome.attempts, outcome.elapsed
        );
    }

    if outcome.found.is_none() {
        return Err(match args.verify {
            Some(counter) => simple_cli_error(&format!(
                "counter {counter} does not satisfy selector {}",
                cfg.selector
            )),
            None => grind_cli_error(
                "search failed",
                GrindError::NotFound {
                    attempts: outcome.attempts,
                },
            ),
        }
        .into());
    }
    Ok(())
}
