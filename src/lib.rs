//! tui-blockfall (workspace facade crate).
//!
//! Re-exports the member crates under `tui_blockfall::{core,input,term,types}`
//! and hosts the pieces shared by the binary: CLI parsing, logging setup and
//! headless runs.

pub use tui_blockfall_core as core;
pub use tui_blockfall_input as input;
pub use tui_blockfall_term as term;
pub use tui_blockfall_types as types;

pub mod cli;
pub mod headless;
pub mod logging;
