//! Common utilities for the selkit selector builder.
//!
//! This crate provides shared infrastructure used by the library and the CLI:
//! - **Warning System** - colored terminal output for suspicious selector input

pub mod warning;
