//! Command-line shell for snapclean.
//!
//! - **cli**: clap argument definitions
//! - **commands**: `clean`, `validate` and `view`
//! - **logging**: subscriber setup
//! - **summary**: table rendering for the terminal

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
