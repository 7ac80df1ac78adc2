//! Test data for one benchmark run.
//!
//! A corpus is a fixed number of `(text, expected)` pairs whose magnitudes all
//! have the same number of decimal digits. The text keeps the digit sequence
//! exactly as drawn, so `"003"` is a valid three digit entry with expected
//! value `3`. Zero is never rendered with a sign.

use std::fmt;

use rand::Rng;

use crate::error::{HarnessError, Result};

pub const CORPUS_SIZE: usize = 1000;

/// Number of decimal digits (sign excluded) of every value in a corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DigitLength(u8);

impl DigitLength {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn new(digits: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&digits) {
            Ok(Self(digits))
        } else {
            Err(HarnessError::InvalidDigitLength(digits))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Every supported length, ascending.
    pub fn all() -> impl Iterator<Item = DigitLength> {
        (Self::MIN..=Self::MAX).map(DigitLength)
    }

    /// Sorts ascending and drops repeats, so each length yields one case.
    pub fn sorted_unique(mut lengths: Vec<DigitLength>) -> Vec<DigitLength> {
        lengths.sort_unstable();
        lengths.dedup();
        lengths
    }
}

impl fmt::Display for DigitLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusEntry {
    pub text: String,
    pub expected: i64,
}

impl CorpusEntry {
    pub fn new(text: impl Into<String>, expected: i64) -> Self {
        Self {
            text: text.into(),
            expected,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    digits: DigitLength,
    entries: Vec<CorpusEntry>,
}

impl Corpus {
    /// Wraps hand-written entries of any length.
    #[cfg(test)]
    pub(crate) fn from_entries(digits: DigitLength, entries: Vec<CorpusEntry>) -> Self {
        Self { digits, entries }
    }

    pub fn digits(&self) -> DigitLength {
        self.digits
    }

    pub fn entries(&self) -> &[CorpusEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Draws [`CORPUS_SIZE`] entries of `digits` digits from `rng`.
///
/// The corpus storage is reserved up front; if that fails the error is
/// returned and no entries are generated.
pub fn generate<R: Rng + ?Sized>(digits: DigitLength, rng: &mut R) -> Result<Corpus> {
    let mut entries = Vec::new();
    entries
        .try_reserve_exact(CORPUS_SIZE)
        .map_err(|source| HarnessError::ResourceExhaustion {
            digits: digits.get(),
            source,
        })?;

    for _ in 0..CORPUS_SIZE {
        entries.push(generate_entry(digits, || rng.gen_range(0..10)));
    }

    Ok(Corpus { digits, entries })
}

/// Builds one entry from `digits + 1` draws in `0..=9`: one per digit, most
/// significant first, then the sign draw (negative when `>= 5`).
fn generate_entry(digits: DigitLength, mut draw: impl FnMut() -> u8) -> CorpusEntry {
    let len = digits.get() as usize;
    let mut text = String::with_capacity(len + 1);
    let mut magnitude = 0i64;

    for _ in 0..len {
        let digit = draw();
        magnitude = magnitude * 10 + i64::from(digit);
        text.push(char::from(b'0' + digit));
    }

    // The sign draw is always consumed, zero just ignores it.
    let negative = draw() >= 5 && magnitude != 0;
    if negative {
        text.insert(0, '-');
    }

    CorpusEntry {
        text,
        expected: if negative { -magnitude } else { magnitude },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use quickcheck_macros::quickcheck;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn scripted(digits: u8, draws: &[u8]) -> CorpusEntry {
        let mut draws = draws.iter().copied();
        generate_entry(DigitLength::new(digits).unwrap(), || draws.next().unwrap())
    }

    fn any_digits(raw: u8) -> DigitLength {
        DigitLength::new(raw % DigitLength::MAX + 1).unwrap()
    }

    #[test]
    fn rejects_out_of_range_digit_lengths() {
        assert!(matches!(
            DigitLength::new(0),
            Err(HarnessError::InvalidDigitLength(0))
        ));
        assert!(matches!(
            DigitLength::new(11),
            Err(HarnessError::InvalidDigitLength(11))
        ));
        assert_eq!(DigitLength::new(10).unwrap().get(), 10);
    }

    #[test]
    fn all_lengths_are_ascending() {
        let all = DigitLength::all().map(DigitLength::get).collect::<Vec<_>>();
        assert_eq!(all, (1..=10).collect::<Vec<u8>>());
    }

    #[test]
    fn sorted_unique_drops_repeats() {
        let lengths = [5, 3, 5, 1, 3]
            .into_iter()
            .map(|d| DigitLength::new(d).unwrap())
            .collect::<Vec<_>>();
        let unique = DigitLength::sorted_unique(lengths)
            .into_iter()
            .map(DigitLength::get)
            .collect::<Vec<_>>();
        assert_eq!(unique, vec![1, 3, 5]);
    }

    #[test]
    fn positive_three_digit_entry() {
        assert_eq!(scripted(3, &[4, 1, 2, 3]), CorpusEntry::new("412", 412));
    }

    #[test]
    fn negative_single_digit_entry() {
        assert_eq!(scripted(1, &[7, 9]), CorpusEntry::new("-7", -7));
        assert_eq!(scripted(1, &[7, 5]), CorpusEntry::new("-7", -7));
        assert_eq!(scripted(1, &[7, 4]), CorpusEntry::new("7", 7));
    }

    #[test]
    fn leading_zeros_are_kept_in_text() {
        let entry = scripted(3, &[0, 0, 3, 0]);
        assert_eq!(entry, CorpusEntry::new("003", 3));
        assert_eq!(entry.text.parse::<i64>().unwrap(), 3);

        assert_eq!(scripted(4, &[0, 4, 1, 0, 8]), CorpusEntry::new("-0410", -410));
    }

    #[test]
    fn zero_never_carries_a_sign() {
        assert_eq!(scripted(1, &[0, 9]), CorpusEntry::new("0", 0));
        assert_eq!(scripted(3, &[0, 0, 0, 9]), CorpusEntry::new("000", 0));
    }

    #[test]
    fn ten_digits_fit() {
        let entry = scripted(10, &[9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 6]);
        assert_eq!(entry, CorpusEntry::new("-9999999999", -9_999_999_999));
    }

    #[test]
    fn generates_exactly_corpus_size_entries() {
        let mut rng = StdRng::seed_from_u64(7);
        for digits in DigitLength::all() {
            let corpus = generate(digits, &mut rng).unwrap();
            assert_eq!(corpus.len(), CORPUS_SIZE);
            assert_eq!(corpus.digits(), digits);
        }
    }

    #[test]
    fn same_seed_same_corpus() {
        let digits = DigitLength::new(6).unwrap();
        let a = generate(digits, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = generate(digits, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn both_signs_show_up() {
        let digits = DigitLength::new(5).unwrap();
        let corpus = generate(digits, &mut StdRng::seed_from_u64(1)).unwrap();
        assert!(corpus.entries().iter().any(|entry| entry.expected < 0));
        assert!(corpus.entries().iter().any(|entry| entry.expected > 0));
    }

    #[quickcheck]
    fn text_parses_to_expected(seed: u64, raw_digits: u8) -> bool {
        let digits = any_digits(raw_digits);
        let corpus = generate(digits, &mut StdRng::seed_from_u64(seed)).unwrap();
        corpus
            .entries()
            .iter()
            .all(|entry| entry.text.parse::<i64>() == Ok(entry.expected))
    }

    #[quickcheck]
    fn text_has_fixed_shape(seed: u64, raw_digits: u8) -> bool {
        let digits = any_digits(raw_digits);
        let corpus = generate(digits, &mut StdRng::seed_from_u64(seed)).unwrap();
        corpus.entries().iter().all(|entry| {
            let negative = entry.expected < 0;
            let body = entry.text.strip_prefix('-').unwrap_or(&entry.text);
            entry.text.len() == digits.get() as usize + usize::from(negative)
                && entry.text.starts_with('-') == negative
                && body.bytes().all(|byte| byte.is_ascii_digit())
        })
    }
}
