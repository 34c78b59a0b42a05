//! Property-based tests for media types.
