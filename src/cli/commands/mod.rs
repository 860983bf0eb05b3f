//! Command implementations for the CLI.
//!
//! Each command is implemented in its own module.

pub mod init;
pub mod lookup;
pub mod regenerate;
pub mod reindex;
