//! # procmap
//!
//! Command-line front end for `procmap-core`.
//!
//! Exposes the CLI and configuration layers so integration tests can drive
//! them without spawning the binary.

pub mod cli;
pub mod config;
