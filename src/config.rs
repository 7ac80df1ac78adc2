//! Harness configuration.
//!
//! Everything has a sensible default; `from_env` lets a run be narrowed or
//! pinned without touching criterion's own command line:
//!
//! - `ATOIBENCH_SEED`: base seed, makes corpora reproducible across runs
//! - `ATOIBENCH_DIGITS`: comma separated digit lengths, e.g. `1,5,10`
//! - `ATOIBENCH_SAMPLE_SIZE`: criterion sample size per case

use std::env;

use crate::corpus::DigitLength;
use crate::error::{HarnessError, Result};

pub const SEED_VAR: &str = "ATOIBENCH_SEED";
pub const DIGITS_VAR: &str = "ATOIBENCH_DIGITS";
pub const SAMPLE_SIZE_VAR: &str = "ATOIBENCH_SAMPLE_SIZE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Applied to every registered competitor.
    pub digit_lengths: Vec<DigitLength>,
    /// `None` seeds every fixture from OS entropy.
    pub seed: Option<u64>,
    pub sample_size: Option<usize>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            digit_lengths: DigitLength::all().collect(),
            seed: None,
            sample_size: None,
        }
    }
}

impl HarnessConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&'static str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(value) = lookup(SEED_VAR) {
            config.seed = Some(parse_var(SEED_VAR, &value)?);
        }

        if let Some(value) = lookup(DIGITS_VAR) {
            config.digit_lengths = parse_digit_lengths(&value)?;
        }

        if let Some(value) = lookup(SAMPLE_SIZE_VAR) {
            // criterion refuses fewer than 10 samples
            let sample_size: usize = parse_var(SAMPLE_SIZE_VAR, &value)?;
            if sample_size < 10 {
                return Err(config_error(SAMPLE_SIZE_VAR, &value));
            }
            config.sample_size = Some(sample_size);
        }

        Ok(config)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Repeated lengths are collapsed.
    pub fn with_digit_lengths(mut self, digit_lengths: Vec<DigitLength>) -> Self {
        self.digit_lengths = DigitLength::sorted_unique(digit_lengths);
        self
    }
}

fn parse_var<T: std::str::FromStr>(var: &'static str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| config_error(var, value))
}

fn parse_digit_lengths(value: &str) -> Result<Vec<DigitLength>> {
    let mut digit_lengths = Vec::new();
    for part in value.split(',') {
        let digits = DigitLength::new(parse_var(DIGITS_VAR, part)?)
            .map_err(|_| config_error(DIGITS_VAR, value))?;
        digit_lengths.push(digits);
    }
    Ok(DigitLength::sorted_unique(digit_lengths))
}

fn config_error(var: &'static str, value: &str) -> HarnessError {
    HarnessError::Config {
        var,
        value: value.to_owned(),
    }
}
