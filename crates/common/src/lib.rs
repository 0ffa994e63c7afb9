//! Shared runtime helpers for the directory workspace: logging setup and
//! data directory checks.

pub mod env;
pub mod utils;
