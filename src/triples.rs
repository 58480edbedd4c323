//! Counting triples of indices where exactly two of the three selected
//! elements are equal.
//!
//! A triple with exactly two equal elements has a single "pair value", so
//! grouping by that value counts each triple once: for a value occurring `c`
//! times in a sequence of length `n`, there are `C(c, 2)` ways to choose the
//! pair and `n - c` ways to choose the odd one out.

use error::InvalidInput;
use failure::Error;
use frequency::FrequencyTable;
use itertools::Itertools;
use std::fmt;
use std::str::FromStr;

/// Number of unordered pairs that can be drawn from `c` items.
fn choose2(c: usize) -> u128 {
    let c = c as u128;
    // c * (c - 1) is a product of consecutive integers, so it's even.
    c * c.saturating_sub(1) / 2
}

/// Count the triples of indices whose elements contain exactly one pair of
/// equal values, using the per-value closed form. O(n).
///
/// Every value must lie in `1..=values.len()`. Anything else, including a
/// sequence like `[5, 5, 5]` whose elements are all equal but too large, is
/// rejected with `InvalidInput::OutOfRange` rather than counted as zero.
pub fn count(values: &[i64]) -> Result<u128, InvalidInput> {
    let table = FrequencyTable::from_values(values)?;
    debug!(
        "formula: n = {}, {} distinct values",
        table.len(),
        table.distinct()
    );
    Ok(count_table(&table))
}

/// Apply the closed form to an already-built table.
pub fn count_table(table: &FrequencyTable) -> u128 {
    let n = table.len() as u128;
    table
        .iter()
        .map(|(_value, c)| choose2(c) * (n - c as u128))
        .sum()
}

/// Like `count`, but consider each unordered pair of distinct values
/// separately: with `c1` copies of one and `c2` of the other, there are
/// `C(c1, 2) * c2 + C(c2, 2) * c1` triples drawing on just those two values.
///
/// O(n + d²) for `d` distinct values.
pub fn count_pairwise(values: &[i64]) -> Result<u128, InvalidInput> {
    let table = FrequencyTable::from_values(values)?;
    let counts: Vec<usize> = table.iter().map(|(_value, c)| c).collect();
    debug!(
        "pairwise: n = {}, {} distinct values",
        table.len(),
        counts.len()
    );
    Ok(counts
        .iter()
        .tuple_combinations::<(_, _)>()
        .map(|(&c1, &c2)| choose2(c1) * c2 as u128 + choose2(c2) * c1 as u128)
        .sum())
}

fn exactly_two_equal(a: i64, b: i64, c: i64) -> bool {
    (a == b) as u8 + (b == c) as u8 + (a == c) as u8 == 1
}

/// Check every triple of indices directly. O(n³), so only sensible for short
/// sequences.
pub fn count_brute(values: &[i64]) -> Result<u128, InvalidInput> {
    FrequencyTable::from_values(values)?;
    debug!("brute force: n = {}", values.len());
    Ok(values
        .iter()
        .tuple_combinations::<(_, _, _)>()
        .filter(|&(&a, &b, &c)| exactly_two_equal(a, b, c))
        .count() as u128)
}

/// Which counter to run.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Method {
    Formula,
    Pairwise,
    Brute,
}

impl Default for Method {
    fn default() -> Method {
        Method::Formula
    }
}

impl Method {
    pub fn count(&self, values: &[i64]) -> Result<u128, InvalidInput> {
        match *self {
            Method::Formula => count(values),
            Method::Pairwise => count_pairwise(values),
            Method::Brute => count_brute(values),
        }
    }
}

impl FromStr for Method {
    type Err = Error;
    fn from_str(s: &str) -> Result<Method, Error> {
        match s {
            "formula" => Ok(Method::Formula),
            "pairwise" => Ok(Method::Pairwise),
            "brute" => Ok(Method::Brute),
            _ => Err(format_err!("unknown counting method: {:?}", s)),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            Method::Formula => "formula",
            Method::Pairwise => "pairwise",
            Method::Brute => "brute",
        })
    }
}
