//! Test inventory records produced by extraction.

mod test_case;
mod test_suite;

pub use test_case::TestCase;
pub use test_suite::TestSuite;
