//! CLI library components for the NAICS code-set checker.
//!
//! The binary lives in `main.rs`; logging is exposed as a library module
//! so tests can initialize it the same way the binary does.

pub mod logging;
