//! Pinfall (workspace facade crate).
//!
//! Re-exports the member crates under `pinfall::{core,input,term,types}` and
//! holds the binary's configuration and logging setup.

pub use pinfall_core as core;
pub use pinfall_input as input;
pub use pinfall_term as term;
pub use pinfall_types as types;

pub mod config;
pub mod telemetry;
