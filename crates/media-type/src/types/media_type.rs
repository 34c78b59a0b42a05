//! A string that is known to be a valid media type.

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::MediaTypeParts;
use crate::config::FailurePolicy;
use crate::error::{Error, Result};
use crate::parser::{is_media_type, parse_media_type};

/// A validated media-type string.
///
/// The only way to obtain a `MediaType` is through validation, so holding
/// one proves the string satisfies the grammar. The original string is kept
/// verbatim, including case and blanks, and never changes afterwards.
///
/// Deserialization validates too.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MediaType(String);

impl MediaType {
    /// Validates `input` and wraps it.
    ///
    /// # Examples
    ///
    /// ```
    /// use media_type::MediaType;
    ///
    /// let media_type = MediaType::new("text/html; charset=UTF-8").unwrap();
    /// assert_eq!(media_type.to_string(), "text/html; charset=UTF-8");
    ///
    /// assert!(MediaType::new("text/").is_err());
    /// ```
    pub fn new<S: Into<String>>(input: S) -> Result<Self> {
        let input = input.into();
        if is_media_type(&input) {
            Ok(Self(input))
        } else {
            debug!("Refused to construct MediaType from '{input}'");
            Err(Error::NotAMediaType { input })
        }
    }

    /// Like [`MediaType::new`], handling failure according to `policy`.
    ///
    /// # Panics
    ///
    /// Panics with the [`Error`] as payload under [`FailurePolicy::Abort`].
    pub fn with_policy<S: Into<String>>(input: S, policy: FailurePolicy) -> Result<Self> {
        policy.enforce(Self::new(input))
    }

    /// Returns the media type as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts into the inner string.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Decomposes the media type into its named parts.
    ///
    /// Construction already proved the string valid, so this only fails if
    /// the grammar is defective, which is treated as an assertion.
    ///
    /// # Panics
    ///
    /// Panics with [`Error::MatchRegexIsBroken`] as payload if the grammar
    /// cannot decompose a string it previously accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use media_type::MediaType;
    ///
    /// let media_type: MediaType = "application/vnd.api+json".parse().unwrap();
    /// let parts = media_type.parse();
    /// assert_eq!(parts.tree(), Some("vnd"));
    /// assert_eq!(parts.suffix(), Some("json"));
    /// ```
    #[allow(clippy::panic)]
    pub fn parse(&self) -> MediaTypeParts {
        match self.parse_with(FailurePolicy::Report) {
            Ok(parts) => parts,
            Err(err) => std::panic::panic_any(err),
        }
    }

    /// Decomposes the media type, handling failure according to `policy`.
    ///
    /// Any error here is [`Error::MatchRegexIsBroken`].
    pub fn parse_with(&self, policy: FailurePolicy) -> Result<MediaTypeParts> {
        let outcome = parse_media_type(&self.0).map_err(|err| match err {
            Error::NotAMediaType { input } => Error::regex_is_broken(format!(
                "previously validated '{input}' no longer matches"
            )),
            other => other,
        });
        policy.enforce(outcome)
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for MediaType {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for MediaType {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for MediaType {
    type Error = Error;

    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<&str> for MediaType {
    type Error = Error;

    fn try_from(s: &str) -> std::result::Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<MediaType> for String {
    fn from(media_type: MediaType) -> Self {
        media_type.0
    }
}
