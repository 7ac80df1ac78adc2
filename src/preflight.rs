//! Untimed correctness sweep over every registered case.
//!
//! Unlike the timed loop this keeps going after a failure, so one run lists
//! every broken (competitor, digit length) pair. Nothing is measured here,
//! which is why the cases may run in parallel.

use rayon::prelude::*;
use tracing::{error, info};

use crate::config::HarnessConfig;
use crate::corpus::DigitLength;
use crate::error::HarnessError;
use crate::harness;
use crate::registry::Registry;

#[derive(Debug)]
pub struct CaseReport {
    pub competitor: &'static str,
    pub digits: DigitLength,
    pub outcome: Result<(), HarnessError>,
}

impl CaseReport {
    pub fn passed(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Reports come back in registration order.
pub fn preflight(registry: &Registry, config: &HarnessConfig) -> Vec<CaseReport> {
    let cases = registry.cases().collect::<Vec<_>>();

    let reports = cases
        .par_iter()
        .map(|case| {
            let mut fixture = case.fixture(config.seed);
            let outcome = fixture
                .scoped(case.digits, |corpus| harness::verify(&case.competitor, corpus))
                .and_then(|verified| verified);

            CaseReport {
                competitor: case.competitor.name(),
                digits: case.digits,
                outcome,
            }
        })
        .collect::<Vec<_>>();

    for report in &reports {
        match &report.outcome {
            Ok(()) => info!(
                competitor = report.competitor,
                digits = report.digits.get(),
                "ok"
            ),
            Err(err) => error!(
                competitor = report.competitor,
                digits = report.digits.get(),
                "{err}"
            ),
        }
    }

    reports
}
