//! The media-type grammar and the matcher that applies it.
//!
//! The grammar follows RFC 6838 restricted names for the type, tree,
//! subtype and suffix, and RFC 2045 tokens / quoted-strings for parameters:
//!
//! ```text
//! type "/" [tree "."] subtype ["+" suffix] *[";" parameter]
//! ```
//!
//! Matching is anchored at both ends and case-preserving. Blanks are only
//! accepted around `;` and `=` inside the parameter block.
//!
//! # Example
//!
//! ```rust
//! use media_type::grammar::Grammar;
//!
//! let grammar = Grammar::standard().unwrap();
//! let caps = grammar.match_media_type("application/vnd.api+json").unwrap().unwrap();
//! assert_eq!(caps.type_, "application");
//! assert_eq!(caps.tree, Some("vnd"));
//! assert_eq!(caps.subtype, "api");
//! assert_eq!(caps.suffix, Some("json"));
//! assert_eq!(caps.parameters, None);
//!
//! assert!(grammar.match_media_type("text/").unwrap().is_none());
//! ```

use std::sync::LazyLock;

use log::{error, trace};
use regex::Regex;

use crate::error::{Error, Result};

/// Restricted name (RFC 6838 section 4.2). Type names may carry `.` and
/// `+` freely.
const TYPE_NAME: &str = "[A-Za-z0-9][A-Za-z0-9!#$&^_.+-]{0,126}";

/// Subtype and suffix names stop at `+`, which always opens the suffix.
const SUBTYPE_NAME: &str = "[A-Za-z0-9][A-Za-z0-9!#$&^_.-]{0,126}";

/// Registered facet prefixes (RFC 6838 section 3).
const TREE: &str = "(?i:vnd|prs|x)";

/// RFC 2045 token: any printable US-ASCII except SPACE and tspecials.
const TOKEN: &str = r"[!#$%&'*+.^_`|~0-9A-Za-z\{\}-]+";

/// RFC 2045 quoted-string with backslash escapes.
const QUOTED_STRING: &str = r#""(?:[^"\\\r\n]|\\[^\r\n])*""#;

/// Blanks allowed around `;` and `=`.
const BLANK: &str = "[ \t]*";

static STANDARD: LazyLock<Result<Grammar>> =
    LazyLock::new(|| Grammar::compile(&standard_pattern()));

/// Builds the full media-type pattern from its named fragments.
pub fn standard_pattern() -> String {
    let parameter =
        format!("{BLANK};{BLANK}{TOKEN}{BLANK}={BLANK}(?:{TOKEN}|{QUOTED_STRING})");
    format!(
        r"^(?P<type>{TYPE_NAME})/(?:(?P<tree>{TREE})\.)?(?P<subtype>{SUBTYPE_NAME})(?:\+(?P<suffix>{SUBTYPE_NAME}))?(?P<parameters>(?:{parameter})*)$"
    )
}

/// The named groups a successful match yields, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaTypeCaptures<'a> {
    /// Top-level type
    pub type_: &'a str,
    /// Registered tree, when the subtype is facet-prefixed
    pub tree: Option<&'a str>,
    /// Subtype, without tree and suffix
    pub subtype: &'a str,
    /// Structured syntax suffix
    pub suffix: Option<&'a str>,
    /// Raw parameter block starting at the first `;`, not yet split
    pub parameters: Option<&'a str>,
}

/// A compiled media-type grammar.
#[derive(Debug, Clone)]
pub struct Grammar {
    regex: Regex,
}

impl Grammar {
    /// Returns the process-wide standard grammar, compiled on first use.
    ///
    /// A compile failure is remembered and reported as
    /// [`Error::MatchRegexIsBroken`] on every call.
    pub fn standard() -> Result<&'static Grammar> {
        STANDARD.as_ref().map_err(Clone::clone)
    }

    /// Compiles a grammar from a pattern.
    ///
    /// The pattern must define the named groups `type`, `tree`, `subtype`,
    /// `suffix` and `parameters`.
    pub fn compile(pattern: &str) -> Result<Self> {
        Regex::new(pattern).map(|regex| Self { regex }).map_err(|e| {
            error!("Media-type grammar failed to compile: {e}");
            Error::regex_is_broken(format!("grammar failed to compile: {e}"))
        })
    }

    /// Returns `true` if the whole input satisfies the grammar.
    pub fn is_match(&self, input: &str) -> bool {
        self.regex.is_match(input)
    }

    /// Applies the grammar to `input`.
    ///
    /// Returns `Ok(None)` when the input is not a media type, and
    /// [`Error::MatchRegexIsBroken`] when the grammar matched without
    /// producing a required group.
    pub fn match_media_type<'a>(&self, input: &'a str) -> Result<Option<MediaTypeCaptures<'a>>> {
        trace!("Matching media type '{input}'");
        let Some(caps) = self.regex.captures(input) else {
            return Ok(None);
        };

        let group = |name: &str| caps.name(name).map(|m| m.as_str());
        let required = |name: &str| match group(name) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => {
                error!("Media-type grammar matched '{input}' without a {name}");
                Err(Error::regex_is_broken(format!(
                    "matched '{input}' without capturing a {name}"
                )))
            }
        };

        Ok(Some(MediaTypeCaptures {
            type_: required("type")?,
            tree: group("tree"),
            subtype: required("subtype")?,
            suffix: group("suffix"),
            parameters: group("parameters").filter(|block| !block.is_empty()),
        }))
    }
}
