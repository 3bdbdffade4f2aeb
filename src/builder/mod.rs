//! Builder API for ergonomic machine construction.
//!
//! This module provides a fluent builder and a declarative macro for
//! assembling configurations without writing the JSON document by hand.

pub mod machine;
pub mod macros;

pub use machine::ConfigBuilder;
