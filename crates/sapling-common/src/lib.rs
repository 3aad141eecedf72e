//! Common utilities for the Sapling HTML parser.
//!
//! This crate provides shared infrastructure used by all Sapling components:
//! - **Warning System** - colored terminal output for recoverable oddities

pub mod warning;
