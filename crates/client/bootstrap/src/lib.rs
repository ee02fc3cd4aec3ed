//! Shared bootstrap utilities for client front-ends.
//!
//! Provides configuration loading, authority construction and the one-shot
//! hero roster fetch that can be reused by CLI, UI, or other front-end crates.
pub mod builder;
pub mod config;

pub use builder::{AuthorityBuilder, AuthoritySetup};
pub use config::{ClientConfig, LogConfig};
