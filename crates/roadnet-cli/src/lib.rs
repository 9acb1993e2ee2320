//! roadnet CLI library.
//!
//! This crate provides the output formatting used by the `roadnet-cli`
//! binary.

pub mod output;
