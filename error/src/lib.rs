use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // Cursor token protocol
    #[error("Malformed token: {0}")]
    MalformedToken(String),

    #[error("Token carries an inherently invalid direction")]
    InherentlyInvalidDirection,

    #[error("Token direction mismatch: expected {expected}, found {found}")]
    DirectionMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("Both next and prev tokens cannot be provided")]
    AmbiguousDirection,

    #[error("Limit must be between {min} and {max}")]
    InvalidLimit { min: i32, max: i32 },

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    // Request boundary
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InternalServerError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_limit_message_names_bounds() {
        let err = Error::InvalidLimit { min: 1, max: 100 };
        assert_eq!(err.to_string(), "Limit must be between 1 and 100");
    }
}
