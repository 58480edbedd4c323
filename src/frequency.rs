//! Multiplicities of the values in a sequence whose values are bounded by its
//! length.

use error::InvalidInput;

/// How many times each value in `1..=n` occurs in a sequence of length `n`.
///
/// The counts always sum to `n`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FrequencyTable {
    counts: Vec<usize>, // counts[v - 1] is the multiplicity of v
}

impl FrequencyTable {
    /// Tally `values`, checking that the sequence is non-empty and that every
    /// element lies in `1..=values.len()`.
    pub fn from_values(values: &[i64]) -> Result<FrequencyTable, InvalidInput> {
        let n = values.len();
        if n == 0 {
            return Err(InvalidInput::NonPositiveCount(0));
        }

        let mut counts = vec![0; n];
        for (index, &value) in values.iter().enumerate() {
            if value < 1 || value as u64 > n as u64 {
                return Err(InvalidInput::OutOfRange { value, index, n });
            }
            counts[value as usize - 1] += 1;
        }

        Ok(FrequencyTable { counts })
    }

    /// The length of the sequence this table was built from.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// The number of times `value` occurs. Values outside `1..=n` occur zero
    /// times.
    pub fn get(&self, value: i64) -> usize {
        if value < 1 || value as u64 > self.counts.len() as u64 {
            return 0;
        }
        self.counts[value as usize - 1]
    }

    /// Iterate over `(value, count)` pairs for the values that occur at least
    /// once, in increasing order of value.
    pub fn iter<'a>(&'a self) -> impl Iterator<Item = (usize, usize)> + 'a {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > 0)
            .map(|(i, &c)| (i + 1, c))
    }

    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }
}
