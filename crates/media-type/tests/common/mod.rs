//! Shared fixtures for the media-type integration tests.

/// Inputs that satisfy the grammar.
pub const VALID: &[&str] = &[
    "text/plain",
    "text/html; charset=UTF-8",
    "text/html; charset=UTF-8; charset=ASCII",
    "application/json",
    "application/vnd.api+json",
    "application/ld+json; profile=\"http://www.w3.org/ns/json-ld#expanded\"",
    "application/x-www-form-urlencoded",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "image/svg+xml",
    "multipart/form-data; boundary=----WebKitFormBoundary7MA4YWxkTrZu0gW",
    "text/prs.fallenstein.rst",
    "audio/x.custom+ogg; rate=44100",
    "Text/HTML ; Charset = utf-8",
];

/// Inputs that do not.
pub const INVALID: &[&str] = &[
    "",
    "   ",
    "text",
    "/plain",
    "text/",
    "text/plain;",
    "text/plain; charset",
    "text/plain; =utf-8",
    "text/plain+",
    "text/plain ",
    " text/plain",
    "text/pl ain",
    "text/plain; charset=\"utf-8",
    "text/plain, text/html",
];
