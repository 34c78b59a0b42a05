//! The decomposed form of a media type.

use serde::Serialize;
use std::fmt;

use crate::parameters::{Parameters, format_parameter_value};

/// The named parts of a valid media type.
///
/// Instances only come out of a successful parse, so `type_` and `subtype`
/// are always non-empty. Optional parts are `None` when the input had no
/// such group, never an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaTypeParts {
    #[serde(rename = "type")]
    type_: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    tree: Option<String>,
    subtype: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parameters: Option<Parameters>,
}

impl MediaTypeParts {
    pub(crate) fn new(
        type_: &str,
        tree: Option<&str>,
        subtype: &str,
        suffix: Option<&str>,
        parameters: Option<Parameters>,
    ) -> Self {
        Self {
            type_: type_.to_string(),
            tree: tree.map(String::from),
            subtype: subtype.to_string(),
            suffix: suffix.map(String::from),
            parameters,
        }
    }

    /// Returns the top-level type, e.g. `text`.
    pub fn type_(&self) -> &str {
        &self.type_
    }

    /// Returns the registration tree, e.g. `vnd`.
    pub fn tree(&self) -> Option<&str> {
        self.tree.as_deref()
    }

    /// Returns the subtype without tree or suffix.
    pub fn subtype(&self) -> &str {
        &self.subtype
    }

    /// Returns the structured syntax suffix, e.g. `json`.
    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    /// Returns the parameters, if the media type had any.
    pub fn parameters(&self) -> Option<&Parameters> {
        self.parameters.as_ref()
    }

    /// Looks up a parameter by its exact (case-sensitive) name.
    pub fn parameter(&self, key: &str) -> Option<&str> {
        self.parameters.as_ref()?.get(key).map(String::as_str)
    }

    /// Returns the media type without its parameters.
    ///
    /// # Examples
    ///
    /// ```
    /// use media_type::parse_media_type;
    ///
    /// let parts = parse_media_type("application/vnd.api+json; charset=utf-8").unwrap();
    /// assert_eq!(parts.essence(), "application/vnd.api+json");
    /// ```
    pub fn essence(&self) -> String {
        let mut out = format!("{}/", self.type_);
        if let Some(tree) = &self.tree {
            out.push_str(tree);
            out.push('.');
        }
        out.push_str(&self.subtype);
        if let Some(suffix) = &self.suffix {
            out.push('+');
            out.push_str(suffix);
        }
        out
    }

    /// Compares the top-level type, ignoring ASCII case.
    pub fn is_type(&self, type_: &str) -> bool {
        self.type_.eq_ignore_ascii_case(type_)
    }

    /// Compares the subtype, ignoring ASCII case.
    pub fn is_subtype(&self, subtype: &str) -> bool {
        self.subtype.eq_ignore_ascii_case(subtype)
    }

    /// Compares type and subtype, ignoring ASCII case.
    pub fn is_type_and_subtype(&self, type_: &str, subtype: &str) -> bool {
        self.is_type(type_) && self.is_subtype(subtype)
    }

    /// Compares the suffix, ignoring ASCII case.
    pub fn has_suffix(&self, suffix: &str) -> bool {
        self.suffix
            .as_deref()
            .is_some_and(|s| s.eq_ignore_ascii_case(suffix))
    }
}

impl fmt::Display for MediaTypeParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.essence())?;
        for (key, value) in self.parameters.iter().flatten() {
            write!(f, "; {key}={}", format_parameter_value(value))?;
        }
        Ok(())
    }
}
