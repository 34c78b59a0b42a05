//! Error types for the media-type library.

/// The grammar every media type must satisfy, quoted in error messages.
pub const EXPECTED_GRAMMAR: &str =
    r#"type "/" [tree "."] subtype ["+" suffix] *[";" parameter]"#;

/// Errors that can occur while validating or decomposing a media type.
///
/// All error variants are marked with `#[non_exhaustive]` to allow
/// adding new error types without breaking changes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The input does not satisfy the media-type grammar.
    #[error("'{input}' is not a media type; expected {}", EXPECTED_GRAMMAR)]
    NotAMediaType {
        /// The offending input, exactly as given
        input: String,
    },

    /// The grammar matched but produced captures it never should have.
    ///
    /// This is a defect in the grammar itself, not in the caller's input.
    #[error("Media-type grammar is broken: {details}")]
    MatchRegexIsBroken {
        /// What was inconsistent
        details: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },
}

/// Machine-readable classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// See [`Error::NotAMediaType`]
    NotAMediaType,
    /// See [`Error::MatchRegexIsBroken`]
    MatchRegexIsBroken,
    /// See [`Error::Config`]
    Config,
}

/// Convenience `Result` type alias for media-type operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a new `NotAMediaType` error for the given input.
    pub fn not_a_media_type<S: Into<String>>(input: S) -> Self {
        Error::NotAMediaType {
            input: input.into(),
        }
    }

    /// Creates a new `MatchRegexIsBroken` error.
    pub fn regex_is_broken<S: Into<String>>(details: S) -> Self {
        Error::MatchRegexIsBroken {
            details: details.into(),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Returns the machine-readable kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NotAMediaType { .. } => ErrorKind::NotAMediaType,
            Error::MatchRegexIsBroken { .. } => ErrorKind::MatchRegexIsBroken,
            Error::Config { .. } => ErrorKind::Config,
        }
    }

    /// Returns the offending input, if this error carries one.
    pub fn input(&self) -> Option<&str> {
        match self {
            Error::NotAMediaType { input } => Some(input),
            _ => None,
        }
    }

    /// Returns whether this error points at a bug in this library rather
    /// than at the caller's input.
    pub fn is_internal_defect(&self) -> bool {
        matches!(self, Error::MatchRegexIsBroken { .. })
    }
}

/// Errors raised while decomposing a raw parameter block.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParameterError {
    /// The block held nothing but blanks and separators.
    #[error("empty parameter block")]
    EmptyBlock,

    /// The block did not open with `;`.
    #[error("parameter block must start with ';': '{block}'")]
    MissingSemicolon {
        /// The block as given
        block: String,
    },

    /// A `;` was followed by nothing.
    #[error("empty parameter at position {index}")]
    EmptySegment {
        /// Zero-based index of the segment
        index: usize,
    },

    /// A segment had no `=`.
    #[error("parameter '{segment}' has no '='")]
    MissingEquals {
        /// The trimmed segment
        segment: String,
    },

    /// A segment started with `=`.
    #[error("parameter '{segment}' has an empty name")]
    EmptyKey {
        /// The trimmed segment
        segment: String,
    },

    /// A quoted value ran to the end of the block.
    #[error("parameter '{segment}' has an unterminated quoted value")]
    UnterminatedQuote {
        /// The trimmed segment
        segment: String,
    },
}
