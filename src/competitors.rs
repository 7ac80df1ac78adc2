//! Bundled parsers.
//!
//! `std_parse` is the baseline everything is compared against. The others
//! assume well formed input, a sign followed by at most 18 ASCII digits, just
//! like the corpus produces.

use crate::registry::Competitor;

/// Every bundled competitor, in the order they are benchmarked.
pub fn all() -> [Competitor; 4] {
    [
        Competitor::new("std_parse", std_parse),
        Competitor::new("naive", naive),
        Competitor::new("unrolled", unrolled),
        Competitor::new("swar", swar),
    ]
}

/// `str::parse`, falling back to 0 like `atoi` does.
pub fn std_parse(text: &str) -> i64 {
    text.parse().unwrap_or(0)
}

/// One digit per step, stopping at the first non-digit.
pub fn naive(text: &str) -> i64 {
    let (negative, digits) = split_sign(text.as_bytes());

    let mut value = 0i64;
    for &byte in digits {
        if !byte.is_ascii_digit() {
            break;
        }
        value = value.wrapping_mul(10).wrapping_add(i64::from(byte - b'0'));
    }

    apply_sign(negative, value)
}

/// Four digits per step, then the remainder one at a time.
pub fn unrolled(text: &str) -> i64 {
    let (negative, mut digits) = split_sign(text.as_bytes());

    let mut value = 0i64;
    while let [a, b, c, d, rest @ ..] = digits {
        value = value.wrapping_mul(10_000).wrapping_add(
            digit(*a) * 1000 + digit(*b) * 100 + digit(*c) * 10 + digit(*d),
        );
        digits = rest;
    }
    for &byte in digits {
        value = value.wrapping_mul(10).wrapping_add(digit(byte));
    }

    apply_sign(negative, value)
}

/// Eight digits at a time, reduced inside a `u64` register.
pub fn swar(text: &str) -> i64 {
    let (negative, digits) = split_sign(text.as_bytes());

    let head = digits.len() % 8;
    let mut value = if head == 0 { 0 } else { parse_chunk(&digits[..head]) };
    for chunk in digits[head..].chunks_exact(8) {
        value = value.wrapping_mul(100_000_000).wrapping_add(parse_chunk(chunk));
    }

    apply_sign(negative, value as i64)
}

const ASCII_ZEROS: u64 = 0x3030_3030_3030_3030;
const LOW_BYTE_PAIRS: u64 = 0x0000_00FF_0000_00FF;
// 100 + (1_000_000 << 32)
const MUL_HIGH: u64 = 0x000F_4240_0000_0064;
// 1 + (10_000 << 32)
const MUL_LOW: u64 = 0x0000_2710_0000_0001;

/// Up to eight ASCII digits, most significant first.
#[inline]
fn parse_chunk(digits: &[u8]) -> u64 {
    let mut buf = [b'0'; 8];
    buf[8 - digits.len()..].copy_from_slice(digits);

    // first digit lands in the lowest byte
    let mut chunk = u64::from_le_bytes(buf).wrapping_sub(ASCII_ZEROS);
    chunk = chunk.wrapping_mul(10).wrapping_add(chunk >> 8);
    (chunk & LOW_BYTE_PAIRS)
        .wrapping_mul(MUL_HIGH)
        .wrapping_add(((chunk >> 16) & LOW_BYTE_PAIRS).wrapping_mul(MUL_LOW))
        >> 32
}

#[inline]
fn split_sign(bytes: &[u8]) -> (bool, &[u8]) {
    match bytes {
        [b'-', rest @ ..] => (true, rest),
        [b'+', rest @ ..] => (false, rest),
        _ => (false, bytes),
    }
}

#[inline]
fn apply_sign(negative: bool, value: i64) -> i64 {
    if negative {
        value.wrapping_neg()
    } else {
        value
    }
}

#[inline]
fn digit(byte: u8) -> i64 {
    i64::from(byte.wrapping_sub(b'0'))
}
