//! # Formats Module
//!
//! Conversions between Bestiary types and serialized text.
//!
//! Pure transformations only: reading files is the caller's job.

mod json;

pub use json::*;
