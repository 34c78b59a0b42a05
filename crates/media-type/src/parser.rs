//! Validation guard, parser and assertion entry points.
//!
//! Every entry point funnels through the standard [`Grammar`].
//!
//! # Example
//!
//! ```rust
//! use media_type::{is_media_type, must_be_media_type, parse_media_type};
//!
//! assert!(is_media_type("text/html; charset=UTF-8"));
//! assert!(!is_media_type("text/"));
//!
//! let parts = parse_media_type("text/html; charset=UTF-8").unwrap();
//! assert_eq!(parts.type_(), "text");
//! assert_eq!(parts.parameter("charset"), Some("UTF-8"));
//!
//! assert!(must_be_media_type("text/plain").is_ok());
//! assert!(must_be_media_type("text").is_err());
//! ```

use log::{debug, error, trace};

use crate::config::FailurePolicy;
use crate::error::{Error, Result};
use crate::grammar::Grammar;
use crate::parameters::decompose_parameters;
use crate::types::MediaTypeParts;

/// Returns `true` if `input` is a media type.
///
/// Never fails. If the grammar itself is defective the defect is logged and
/// `false` is returned.
pub fn is_media_type(input: &str) -> bool {
    match Grammar::standard() {
        Ok(grammar) => grammar.is_match(input),
        Err(e) => {
            error!("Cannot validate '{input}': {e}");
            false
        }
    }
}

/// Decomposes `input` into its named parts.
///
/// Fails with [`Error::NotAMediaType`] when the input does not satisfy the
/// grammar, and with [`Error::MatchRegexIsBroken`] when the grammar accepts
/// the input but yields parts that cannot be assembled.
pub fn parse_media_type(input: &str) -> Result<MediaTypeParts> {
    parse_with_grammar(Grammar::standard()?, input)
}

/// Like [`parse_media_type`], handling failure according to `policy`.
///
/// # Panics
///
/// Panics with the [`Error`] as payload under [`FailurePolicy::Abort`].
pub fn parse_media_type_with(input: &str, policy: FailurePolicy) -> Result<MediaTypeParts> {
    policy.enforce(parse_media_type(input))
}

/// Succeeds if `input` is a media type, discarding the decomposition.
pub fn must_be_media_type(input: &str) -> Result<()> {
    parse_media_type(input).map(|_| ())
}

/// Like [`must_be_media_type`], handling failure according to `policy`.
///
/// # Panics
///
/// Panics with the [`Error`] as payload under [`FailurePolicy::Abort`].
pub fn must_be_media_type_with(input: &str, policy: FailurePolicy) -> Result<()> {
    policy.enforce(must_be_media_type(input))
}

pub(crate) fn parse_with_grammar(grammar: &Grammar, input: &str) -> Result<MediaTypeParts> {
    let Some(caps) = grammar.match_media_type(input)? else {
        debug!("Rejected '{input}': not a media type");
        return Err(Error::not_a_media_type(input));
    };

    let parameters = decompose_parameters(caps.parameters).map_err(|e| {
        error!("Media-type grammar accepted '{input}' but its parameters did not decompose: {e}");
        Error::regex_is_broken(format!(
            "accepted '{input}' but its parameters did not decompose: {e}"
        ))
    })?;

    trace!("Parsed '{input}' as {}/{}", caps.type_, caps.subtype);
    Ok(MediaTypeParts::new(
        caps.type_,
        caps.tree,
        caps.subtype,
        caps.suffix,
        parameters,
    ))
}
