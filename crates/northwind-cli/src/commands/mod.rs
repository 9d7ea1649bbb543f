//! CLI command implementations.

pub mod all;
pub mod list;
pub mod run;
