use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::corpus::{self, Corpus, DigitLength};
use crate::error::{HarnessError, Result};

/// Owns the corpus of a single benchmark run.
///
/// Each fixture carries its own random source, so two fixtures never share
/// generated values unless they were given the same seed.
pub struct Fixture {
    rng: StdRng,
    corpus: Option<Corpus>,
}

impl Fixture {
    /// `None` seeds from OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng, corpus: None }
    }

    /// Generates a fresh corpus. Fails if the previous one was not torn down.
    pub fn setup(&mut self, digits: DigitLength) -> Result<&Corpus> {
        if self.corpus.is_some() {
            return Err(HarnessError::FixtureBusy);
        }

        let corpus = corpus::generate(digits, &mut self.rng)?;
        debug!(digits = digits.get(), entries = corpus.len(), "fixture set up");
        Ok(self.corpus.insert(corpus))
    }

    pub fn corpus(&self) -> Option<&Corpus> {
        self.corpus.as_ref()
    }

    /// Releases the corpus, handing it back to the caller.
    pub fn teardown(&mut self) -> Option<Corpus> {
        let corpus = self.corpus.take();
        if let Some(corpus) = &corpus {
            debug!(digits = corpus.digits().get(), "fixture torn down");
        }
        corpus
    }

    /// Runs `f` between a setup and a teardown.
    pub fn scoped<T>(&mut self, digits: DigitLength, f: impl FnOnce(&Corpus) -> T) -> Result<T> {
        let output = f(self.setup(digits)?);
        self.teardown();
        Ok(output)
    }
}
