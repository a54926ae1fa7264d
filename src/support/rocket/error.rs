use thiserror::Error;

/// Errors returned when a rocket relation rejects its inputs.
///
/// Each variant carries every message produced by its validation phase, in
/// the order the fields were checked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelationError {
    /// One or more inputs are not floating-point numbers.
    #[error("invalid type: {}", .0.join("; "))]
    InvalidType(Vec<String>),

    /// Every input is a number, but one or more lie outside their domain.
    #[error("out of range: {}", .0.join("; "))]
    OutOfRange(Vec<String>),
}

impl RelationError {
    /// Returns the ordered violation messages.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        match self {
            Self::InvalidType(messages) | Self::OutOfRange(messages) => messages,
        }
    }
}
