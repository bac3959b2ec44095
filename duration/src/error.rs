use thiserror::Error;

/// Errors returned when parsing a duration.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("can not parse non string input")]
    NonString,
    #[error("invalid duration \"{input}\"")]
    Invalid { input: String },
    #[error("unknown unit '{unit}' in {input}")]
    UnknownUnit { unit: String, input: String },
}

/// Broad classification of an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input was neither a string nor a number.
    Type,
    /// The input was empty or held no `<number><unit>` tokens.
    Syntax,
    /// A token used a unit symbol that is not recognized.
    Unit,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NonString => ErrorKind::Type,
            Self::Invalid { .. } => ErrorKind::Syntax,
            Self::UnknownUnit { .. } => ErrorKind::Unit,
        }
    }
}
