//! Sample payloads for conformance tests.

/// Payload type used by the conformance suites.
///
/// Wraps an integer so tests can observe that payloads survive merges
/// untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TestData {
    /// Value carried by the payload.
    pub val: usize,
}

impl TestData {
    /// Creates a payload carrying `val`.
    #[must_use]
    pub const fn new(val: usize) -> Self {
        Self { val }
    }
}

impl From<usize> for TestData {
    fn from(val: usize) -> Self {
        Self { val }
    }
}

/// Generates `n` payloads where the payload at index `i` is built from `i`.
///
/// # Examples
/// ```
/// use dsu_test_support::samples::{TestData, generate_sample};
///
/// let sample: Vec<TestData> = generate_sample(3);
/// assert_eq!(sample, vec![TestData::new(0), TestData::new(1), TestData::new(2)]);
/// ```
#[must_use]
pub fn generate_sample<T: From<usize>>(n: usize) -> Vec<T> {
    (0..n).map(T::from).collect()
}
