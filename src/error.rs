//! Error types for the xorgen library.

use std::fmt;

use crate::engine::Algorithm;

/// Errors produced by the xorgen library.
///
/// Every variant is raised while *building* a state or a generator. Drawing
/// from a generator never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RandomError {
    /// Seed material does not have the shape the algorithm requires.
    InvalidSeed {
        /// Algorithm the seed was offered to.
        algorithm: Algorithm,
        /// Number of seed words the algorithm consumes.
        expected: usize,
        /// Number of seed words actually supplied.
        actual: usize,
    },
    /// A distribution or utility argument is outside its valid range.
    InvalidParameter(&'static str),
}

impl fmt::Display for RandomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RandomError::InvalidSeed {
                algorithm,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid seed for {}: expected {} words, got {}",
                    algorithm, expected, actual
                )
            }
            RandomError::InvalidParameter(reason) => {
                write!(f, "Invalid parameter: {}", reason)
            }
        }
    }
}

impl std::error::Error for RandomError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_seed() {
        let err = RandomError::InvalidSeed {
            algorithm: Algorithm::Xorshift,
            expected: 4,
            actual: 3,
        };
        assert_eq!(
            format!("{}", err),
            "Invalid seed for xorshift128: expected 4 words, got 3"
        );
    }

    #[test]
    fn test_display_invalid_parameter() {
        let err = RandomError::InvalidParameter("lower bound exceeds upper bound");
        assert_eq!(
            format!("{}", err),
            "Invalid parameter: lower bound exceeds upper bound"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            RandomError::InvalidParameter("p"),
            RandomError::InvalidParameter("p")
        );
        assert_ne!(
            RandomError::InvalidParameter("p"),
            RandomError::InvalidSeed {
                algorithm: Algorithm::Xorshift,
                expected: 4,
                actual: 0,
            }
        );
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(RandomError::InvalidParameter("rate"));
        assert_eq!(err.to_string(), "Invalid parameter: rate");
    }
}
