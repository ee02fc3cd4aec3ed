//! Remote game authority boundary.
//!
//! # Architecture
//!
//! ```text
//! GameAuthority (async trait)
//!   ├── HttpAuthority   JSON over HTTP, `/api/*` endpoints
//!   └── MockAuthority   in-memory, deterministic (feature `mock`)
//! ```
//!
//! Every failure is reported as an [`AuthorityError`]. Callers treat all of
//! them as transport failures: nothing from a failed call is applied.
//!
//! # Usage
//!
//! ```ignore
//! use client_authority::{AuthorityConfig, GameAuthority, HttpAuthority};
//!
//! let authority = HttpAuthority::new(&AuthorityConfig::from_env())?;
//! let dungeon = authority.generate_dungeon(Difficulty::Medium, None).await?;
//! ```

pub mod config;
pub mod http;
pub mod traits;
pub mod types;

#[cfg(feature = "mock")]
pub mod mock;

pub use config::AuthorityConfig;
pub use http::HttpAuthority;
pub use traits::{AuthorityError, GameAuthority};
pub use types::{CombatAction, CombatOutcome, HeroSelection, MoveOutcome};

#[cfg(feature = "mock")]
pub use mock::{MockAuthority, Operation};
