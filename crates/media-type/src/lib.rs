#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Media Type Library
//!
//! Validation and decomposition of media-type strings per RFC 2045 and
//! RFC 6838, plus a [`MediaType`] value type that can only hold a validated
//! string.
//!
//! # Modules
//!
//! - [`grammar`]: The media-type grammar and matcher
//! - [`parameters`]: Parameter-block decomposition
//! - [`parser`]: `is_media_type`, `parse_media_type`, `must_be_media_type`
//! - [`types`]: `MediaType` and `MediaTypeParts`
//! - [`config`]: Failure policy and configuration
//! - [`error`]: Error types and Result alias

pub mod config;
pub mod error;
pub mod grammar;
pub mod parameters;
pub mod parser;
pub mod types;

// Re-exports for convenience
pub use config::{Config, FailurePolicy};
pub use error::{Error, ErrorKind, ParameterError, Result};
pub use parameters::{Parameters, decompose_parameters};
pub use parser::{
    is_media_type, must_be_media_type, must_be_media_type_with, parse_media_type,
    parse_media_type_with,
};
pub use types::{MediaType, MediaTypeParts};
