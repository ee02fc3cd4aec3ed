//! Top-level client wiring the authority and a frontend together.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ Authority (remote game server, or an in-memory stand-in)
//!   └─→ Frontend (UI layer - CLI, GUI, etc.)
//! ```
//!
//! The client owns nothing but the wiring: it creates the `GameController`
//! from the frontend configuration and the hero roster, then hands the
//! controller and the authority to the frontend.

mod builder;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use std::sync::Arc;

use anyhow::Result;
use client_authority::GameAuthority;
use client_frontend_core::{FrontendConfig, GameController};
use game_core::HeroRoster;

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. `Client::builder()` collects the authority, roster and frontend
/// 2. `Client::run()` creates the controller on the menu screen
/// 3. `Client::run()` transfers control to the frontend until the user quits
pub struct Client {
    authority: Arc<dyn GameAuthority>,
    roster: HeroRoster,
    frontend_config: FrontendConfig,
    frontend: Box<dyn Frontend>,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend fails.
    pub async fn run(self) -> Result<()> {
        let Client {
            authority,
            roster,
            frontend_config,
            mut frontend,
        } = self;

        if roster.is_empty() {
            tracing::warn!("Hero roster is empty; hero selection will show no stats");
        }

        let controller = GameController::new(&frontend_config, roster);
        frontend.run(controller, authority).await
    }
}
