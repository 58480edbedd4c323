/// Reasons a problem instance can be rejected.
///
/// Every counter checks its input before doing any arithmetic, so a caller
/// either gets a count for a well-formed sequence or one of these.
#[derive(Debug, Fail, Clone, Eq, PartialEq)]
pub enum InvalidInput {
    #[fail(display = "missing element count")]
    MissingCount,

    #[fail(display = "element count is not an integer: {:?}", _0)]
    BadCount(String),

    #[fail(display = "element count must be positive, got {}", _0)]
    NonPositiveCount(i64),

    #[fail(display = "missing line of values")]
    MissingValues,

    #[fail(display = "value is not an integer: {:?}", _0)]
    BadValue(String),

    #[fail(display = "expected {} values, found {}", declared, actual)]
    LengthMismatch { declared: usize, actual: usize },

    #[fail(display = "value {} at index {} is outside 1..={}", value, index, n)]
    OutOfRange { value: i64, index: usize, n: usize },

    #[fail(display = "unexpected input after values: {:?}", _0)]
    TrailingInput(String),
}

#[test]
fn test_invalid_input_display() {
    let out_of_range = InvalidInput::OutOfRange {
        value: 5,
        index: 0,
        n: 3,
    };
    assert_eq!(out_of_range.to_string(), "value 5 at index 0 is outside 1..=3");
    assert_eq!(
        InvalidInput::LengthMismatch {
            declared: 4,
            actual: 2
        }
        .to_string(),
        "expected 4 values, found 2"
    );
    assert_eq!(
        InvalidInput::BadValue("x".to_owned()).to_string(),
        "value is not an integer: \"x\""
    );
    assert_eq!(
        InvalidInput::NonPositiveCount(-1).to_string(),
        "element count must be positive, got -1"
    );
}
