//! Shared setup for the wellhead demos.
pub mod common;
