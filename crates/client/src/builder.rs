//! Client builder with dependency injection pattern.

use std::sync::Arc;

use anyhow::{Context, Result};
use client_authority::GameAuthority;
use client_bootstrap::AuthoritySetup;
use client_frontend_core::FrontendConfig;
use game_core::HeroRoster;

use crate::{Client, Frontend};

/// Builder for constructing a Client with proper validation.
///
/// The authority and the frontend are required; the frontend configuration
/// and the hero roster default to empty values.
#[derive(Default)]
pub struct ClientBuilder {
    authority: Option<Arc<dyn GameAuthority>>,
    roster: HeroRoster,
    frontend_config: FrontendConfig,
    frontend: Option<Box<dyn Frontend>>,
}

impl ClientBuilder {
    /// Create a new ClientBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the authority and roster produced by `AuthorityBuilder` (required).
    pub fn setup(mut self, setup: AuthoritySetup) -> Self {
        self.authority = Some(setup.authority);
        self.roster = setup.roster;
        self
    }

    /// Set the authority directly, keeping the current roster.
    pub fn authority(mut self, authority: Arc<dyn GameAuthority>) -> Self {
        self.authority = Some(authority);
        self
    }

    pub fn roster(mut self, roster: HeroRoster) -> Self {
        self.roster = roster;
        self
    }

    pub fn frontend_config(mut self, config: FrontendConfig) -> Self {
        self.frontend_config = config;
        self
    }

    /// Set the frontend (required).
    ///
    /// The frontend handles UI rendering and user input. It receives the
    /// controller and the authority when the client runs.
    pub fn frontend(mut self, frontend: impl Frontend + 'static) -> Self {
        self.frontend = Some(Box::new(frontend));
        self
    }

    /// Build the Client.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Authority is not set (required)
    /// - Frontend is not set (required)
    pub fn build(self) -> Result<Client> {
        let authority = self
            .authority
            .context("Authority is required. Use .setup() or .authority() to set it.")?;

        let frontend = self
            .frontend
            .context("Frontend is required. Use .frontend() to set it.")?;

        Ok(Client {
            authority,
            roster: self.roster,
            frontend_config: self.frontend_config,
            frontend,
        })
    }
}
