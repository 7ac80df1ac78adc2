//! A fair test bed for string to signed integer parsers.
//!
//! Competitors are plain `fn(&str) -> i64` functions. Each one is run over a
//! freshly generated corpus for every digit length, timed by criterion and
//! checked against the expected value of every entry on every pass.

pub mod competitors;
pub mod config;
pub mod corpus;
pub mod error;
pub mod fixture;
pub mod harness;
pub mod preflight;
pub mod registry;

pub use config::HarnessConfig;
pub use corpus::{Corpus, CorpusEntry, DigitLength, CORPUS_SIZE};
pub use error::{HarnessError, Result};
pub use fixture::Fixture;
pub use registry::{BenchmarkCase, Competitor, ParseFn, Registry};

use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber, honouring `RUST_LOG`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("atoibench=info"));
    // a subscriber may already be installed, e.g. by the test harness
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// A registry of every bundled competitor over `config`'s digit lengths.
pub fn default_registry(config: &HarnessConfig) -> Result<Registry> {
    let mut registry = Registry::new(config.digit_lengths.clone());
    registry.register_all(competitors::all())?;
    Ok(registry)
}
