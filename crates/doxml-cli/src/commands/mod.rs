//! Command implementations for the doxml CLI
//!
//! Each command module handles the CLI interface and delegates to
//! the doxml library for the conversion itself.

pub mod convert;
pub mod tags;
