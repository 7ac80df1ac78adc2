//! Competitor registration.
//!
//! Competitors are registered explicitly, in the order they should run. Each
//! one is expanded into a [`BenchmarkCase`] per configured digit length.

use std::fmt;

use tracing::info;

use crate::corpus::DigitLength;
use crate::error::{HarnessError, Result};
use crate::fixture::Fixture;

/// Parses the decimal text of a signed integer.
pub type ParseFn = fn(&str) -> i64;

#[derive(Clone, Copy)]
pub struct Competitor {
    name: &'static str,
    parse: ParseFn,
}

impl Competitor {
    pub const fn new(name: &'static str, parse: ParseFn) -> Self {
        Self { name, parse }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline(always)]
    pub fn parse(&self, text: &str) -> i64 {
        (self.parse)(text)
    }
}

impl fmt::Debug for Competitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Competitor").field(&self.name).finish()
    }
}

/// One competitor bound to one digit length.
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkCase {
    pub competitor: Competitor,
    pub digits: DigitLength,
    /// Position in the run order, used to derive a per-case seed.
    pub ordinal: usize,
}

impl BenchmarkCase {
    /// A fresh fixture for this case. With a base seed every case still gets
    /// its own stream.
    pub fn fixture(&self, base_seed: Option<u64>) -> Fixture {
        Fixture::new(base_seed.map(|seed| case_seed(seed, self.ordinal)))
    }
}

fn case_seed(base: u64, ordinal: usize) -> u64 {
    base ^ (ordinal as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

#[derive(Debug)]
pub struct Registry {
    competitors: Vec<Competitor>,
    digit_lengths: Vec<DigitLength>,
}

impl Registry {
    /// Repeated digit lengths are collapsed, a (competitor, digits) pair
    /// only ever yields one case.
    pub fn new(digit_lengths: Vec<DigitLength>) -> Self {
        Self {
            competitors: Vec::new(),
            digit_lengths: DigitLength::sorted_unique(digit_lengths),
        }
    }

    pub fn register(&mut self, competitor: Competitor) -> Result<&mut Self> {
        if competitor.name.is_empty() {
            return Err(HarnessError::EmptyIdentifier);
        }
        if self.competitors.iter().any(|c| c.name == competitor.name) {
            return Err(HarnessError::DuplicateIdentifier(competitor.name.to_owned()));
        }

        info!(competitor = competitor.name, "registered competitor");
        self.competitors.push(competitor);
        Ok(self)
    }

    pub fn register_all(
        &mut self,
        competitors: impl IntoIterator<Item = Competitor>,
    ) -> Result<&mut Self> {
        for competitor in competitors {
            self.register(competitor)?;
        }
        Ok(self)
    }

    pub fn competitors(&self) -> &[Competitor] {
        &self.competitors
    }

    pub fn digit_lengths(&self) -> &[DigitLength] {
        &self.digit_lengths
    }

    /// Competitors in registration order, digit lengths ascending within each.
    pub fn cases(&self) -> impl Iterator<Item = BenchmarkCase> + '_ {
        self.competitors
            .iter()
            .flat_map(move |&competitor| {
                self.digit_lengths
                    .iter()
                    .map(move |&digits| (competitor, digits))
            })
            .enumerate()
            .map(|(ordinal, (competitor, digits))| BenchmarkCase {
                competitor,
                digits,
                ordinal,
            })
    }
}
