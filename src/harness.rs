//! The timed correctness loop.
//!
//! Every competitor goes through [`run_pass`]: each corpus entry is parsed,
//! checked against its expected value and passed through `black_box`. A wrong
//! answer panics, so a fast but incorrect parser never produces a timing.

use std::time::{Duration, Instant};

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use tracing::debug;

use crate::config::HarnessConfig;
use crate::corpus::{Corpus, CorpusEntry, DigitLength};
use crate::error::{HarnessError, Result};
use crate::registry::{Competitor, Registry};

/// Parses every entry of `corpus` once, in order.
///
/// # Panics
///
/// On the first entry the competitor gets wrong. Panics raised by the
/// competitor itself are not caught either.
#[inline]
pub fn run_pass(competitor: &Competitor, corpus: &Corpus) {
    for (index, entry) in corpus.entries().iter().enumerate() {
        let actual = competitor.parse(&entry.text);
        if actual != entry.expected {
            correctness_violation(competitor, corpus.digits(), index, entry, actual);
        }
        black_box(actual);
    }
}

/// Times `iters` full passes over `corpus`.
pub fn time_iterations(competitor: &Competitor, corpus: &Corpus, iters: u64) -> Duration {
    let start = Instant::now();
    for _ in 0..iters {
        run_pass(competitor, corpus);
    }
    start.elapsed()
}

/// Untimed check returning the first mismatch instead of panicking.
pub fn verify(competitor: &Competitor, corpus: &Corpus) -> Result<()> {
    corpus
        .entries()
        .iter()
        .enumerate()
        .find_map(|(index, entry)| {
            let actual = competitor.parse(&entry.text);
            (actual != entry.expected)
                .then(|| violation(competitor, corpus.digits(), index, entry, actual))
        })
        .map_or(Ok(()), Err)
}

/// Runs every registered case through criterion.
///
/// Competitors become benchmark groups and digit lengths their parameters,
/// so results are reported as `<competitor>/<digits>`. Each case gets its own
/// fixture, set up before and torn down after its measurement.
pub fn bench_registry(
    c: &mut Criterion,
    registry: &Registry,
    config: &HarnessConfig,
) -> Result<()> {
    // cases are grouped by competitor, one run of digit lengths each
    let cases = registry.cases().collect::<Vec<_>>();
    let per_competitor = registry.digit_lengths().len().max(1);

    for cases in cases.chunks(per_competitor) {
        let competitor = cases[0].competitor;
        let mut group = c.benchmark_group(competitor.name());
        if let Some(sample_size) = config.sample_size {
            group.sample_size(sample_size);
        }

        for case in cases {
            debug!(
                competitor = competitor.name(),
                digits = case.digits.get(),
                "starting case"
            );

            let mut fixture = case.fixture(config.seed);
            let corpus = fixture.setup(case.digits)?;
            group.throughput(Throughput::Elements(corpus.len() as u64));
            group.bench_with_input(BenchmarkId::from_parameter(case.digits), corpus, |b, corpus| {
                b.iter_custom(|iters| time_iterations(&case.competitor, corpus, iters))
            });
            fixture.teardown();
        }

        group.finish();
    }

    Ok(())
}

fn violation(
    competitor: &Competitor,
    digits: DigitLength,
    index: usize,
    entry: &CorpusEntry,
    actual: i64,
) -> HarnessError {
    HarnessError::CorrectnessViolation {
        competitor: competitor.name().to_owned(),
        digits: digits.get(),
        index,
        text: entry.text.clone(),
        expected: entry.expected,
        actual,
    }
}

#[cold]
#[inline(never)]
fn correctness_violation(
    competitor: &Competitor,
    digits: DigitLength,
    index: usize,
    entry: &CorpusEntry,
    actual: i64,
) -> ! {
    panic!("{}", violation(competitor, digits, index, entry, actual))
}
