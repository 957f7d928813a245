//! Stackfall (workspace facade crate).
//!
//! Re-exports the member crates under `stackfall::{core,input,term,types}` and
//! hosts the application-level configuration and logging setup used by the
//! `stackfall` binary.

pub mod config;
pub mod logging;

pub use stackfall_core as core;
pub use stackfall_input as input;
pub use stackfall_term as term;
pub use stackfall_types as types;

pub use config::AppConfig;
