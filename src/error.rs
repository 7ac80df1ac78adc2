use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error(
        "correctness violation in `{competitor}` (digits = {digits}, entry #{index}): \
         parse({text:?}) returned {actual}, expected {expected}"
    )]
    CorrectnessViolation {
        competitor: String,
        digits: u8,
        index: usize,
        text: String,
        expected: i64,
        actual: i64,
    },

    #[error("failed to allocate corpus for digits = {digits}: {source}")]
    ResourceExhaustion {
        digits: u8,
        #[source]
        source: TryReserveError,
    },

    #[error("competitor `{0}` is already registered")]
    DuplicateIdentifier(String),

    #[error("competitor identifier must not be empty")]
    EmptyIdentifier,

    #[error("digit length {0} is outside 1..=10")]
    InvalidDigitLength(u8),

    #[error("fixture already holds a corpus; call teardown first")]
    FixtureBusy,

    #[error("invalid value {value:?} for {var}")]
    Config { var: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, HarnessError>;
