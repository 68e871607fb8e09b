//! Shared utilities for the workspace crates.

pub mod logging;
