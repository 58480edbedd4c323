//! Count triples of indices in a sequence where exactly two of the three
//! selected elements are equal.

#[macro_use]
extern crate failure;
extern crate itertools;
#[macro_use]
extern crate log;

pub mod error;
pub mod frequency;
pub mod input;
pub mod triples;

pub use error::InvalidInput;
pub use frequency::FrequencyTable;
pub use input::Problem;
pub use triples::{count, count_brute, count_pairwise, Method};
