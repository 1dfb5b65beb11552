//! # Bestiary
//!
//! Library half of the Bestiary binary: CLI parsing, command rendering and
//! configuration. The analytics live in `bestiary-core`.

pub mod cli;
pub mod config;
