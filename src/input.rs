//! The puzzle's text format: a line holding `n`, then a line of `n`
//! whitespace-separated values.

use error::InvalidInput;
use std::str::FromStr;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Problem {
    values: Vec<i64>,
}

impl Problem {
    /// Pair a declared length with the values actually supplied.
    pub fn new(declared: i64, values: Vec<i64>) -> Result<Problem, InvalidInput> {
        if declared <= 0 {
            return Err(InvalidInput::NonPositiveCount(declared));
        }
        if declared as u64 != values.len() as u64 {
            return Err(InvalidInput::LengthMismatch {
                declared: declared as usize,
                actual: values.len(),
            });
        }
        Ok(Problem { values })
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}

impl FromStr for Problem {
    type Err = InvalidInput;
    fn from_str(s: &str) -> Result<Problem, InvalidInput> {
        let mut lines = s.lines();

        let count = lines.next().map(str::trim).unwrap_or("");
        if count.is_empty() {
            return Err(InvalidInput::MissingCount);
        }
        let declared =
            i64::from_str(count).map_err(|_| InvalidInput::BadCount(count.to_owned()))?;
        if declared <= 0 {
            return Err(InvalidInput::NonPositiveCount(declared));
        }

        let values = lines.next().ok_or(InvalidInput::MissingValues)?;
        let values = values
            .split_whitespace()
            .map(|tok| i64::from_str(tok).map_err(|_| InvalidInput::BadValue(tok.to_owned())))
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(extra) = lines.map(str::trim).find(|l| !l.is_empty()) {
            return Err(InvalidInput::TrailingInput(extra.to_owned()));
        }

        Problem::new(declared, values)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    #[rustfmt::skip]
    fn test_problem_fromstr() {
        assert_eq!(Problem::from_str("4\n1 1 2 2\n"),
                   Ok(Problem { values: vec![1, 1, 2, 2] }));
        assert_eq!(Problem::from_str("  5 \n 2\t2 2  1 1"),
                   Ok(Problem { values: vec![2, 2, 2, 1, 1] }));
        assert_eq!(Problem::from_str("3\r\n3 3 3\r\n\r\n\n"),
                   Ok(Problem { values: vec![3, 3, 3] }));
        assert_eq!(Problem::from_str("1\n1").unwrap().len(), 1);
        assert_eq!(Problem::from_str("2\n2 1").unwrap().values(), &[2, 1]);
    }

    #[test]
    #[rustfmt::skip]
    fn test_problem_new() {
        assert_eq!(Problem::new(2, vec![1, 1]).unwrap().values(), &[1, 1]);
        assert_eq!(Problem::new(0, vec![]), Err(InvalidInput::NonPositiveCount(0)));
        assert_eq!(Problem::new(-1, vec![1]), Err(InvalidInput::NonPositiveCount(-1)));
        assert_eq!(Problem::new(2, vec![1]),
                   Err(InvalidInput::LengthMismatch { declared: 2, actual: 1 }));
    }

    #[test]
    #[rustfmt::skip]
    fn test_problem_fromstr_rejects() {
        assert_eq!(Problem::from_str(""), Err(InvalidInput::MissingCount));
        assert_eq!(Problem::from_str("  \n1 2"), Err(InvalidInput::MissingCount));
        assert_eq!(Problem::from_str("four\n1 1 2 2"),
                   Err(InvalidInput::BadCount("four".to_owned())));
        assert_eq!(Problem::from_str("0\n"), Err(InvalidInput::NonPositiveCount(0)));
        assert_eq!(Problem::from_str("-2\n1 1"), Err(InvalidInput::NonPositiveCount(-2)));
        assert_eq!(Problem::from_str("3"), Err(InvalidInput::MissingValues));
        assert_eq!(Problem::from_str("3\n1 x 2"),
                   Err(InvalidInput::BadValue("x".to_owned())));
        assert_eq!(Problem::from_str("3\n1 2"),
                   Err(InvalidInput::LengthMismatch { declared: 3, actual: 2 }));
        assert_eq!(Problem::from_str("3\n1 2 3 3"),
                   Err(InvalidInput::LengthMismatch { declared: 3, actual: 4 }));
        assert_eq!(Problem::from_str("3\n1 2 3\n4"),
                   Err(InvalidInput::TrailingInput("4".to_owned())));
    }
}
