//! Crate-wide error type.

use std::fmt;

/// Errors reported by the cost model and the evolutionary engine.
///
/// Every error is terminal for the current run; nothing here is transient.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A location label that is not part of the cost model.
    InvalidLocation(String),

    /// An empty tour, or a tour referencing an unknown location.
    InvalidTour(String),

    /// Selection was attempted on a population with no individuals.
    EmptyPopulation,

    /// An operator produced an individual that breaks the problem invariant
    /// (for tours: not a permutation of every location).
    InvariantViolation(String),

    /// The cost matrix is malformed.
    InvalidCostMatrix(String),

    /// The same location label appears twice.
    DuplicateLocation(String),

    /// A configuration parameter is out of range.
    InvalidConfig(String),
}

/// Shorthand for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidLocation(loc) => write!(f, "unknown location: {loc}"),
            Error::InvalidTour(msg) => write!(f, "invalid tour: {msg}"),
            Error::EmptyPopulation => f.write_str("cannot select from empty population"),
            Error::InvariantViolation(msg) => write!(f, "invariant violation: {msg}"),
            Error::InvalidCostMatrix(msg) => write!(f, "invalid cost matrix: {msg}"),
            Error::DuplicateLocation(loc) => write!(f, "duplicate location: {loc}"),
            Error::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            Error::InvalidLocation("\"Z\"".into()).to_string(),
            "unknown location: \"Z\""
        );
        assert_eq!(
            Error::EmptyPopulation.to_string(),
            "cannot select from empty population"
        );
        assert!(Error::InvalidConfig("population_size must be at least 2".into())
            .to_string()
            .contains("population_size"));
    }

    #[test]
    fn test_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(Error::InvalidTour("empty".into()));
        assert_eq!(err.to_string(), "invalid tour: empty");
    }
}
