//! Builds the authority connection and the hero roster used by front-ends.
use std::sync::Arc;

use anyhow::{Context, Result};
use client_authority::{AuthorityConfig, GameAuthority, HttpAuthority};
use game_core::HeroRoster;

/// Builder that assembles the authority and the data fetched once at startup.
pub struct AuthorityBuilder {
    config: AuthorityConfig,
    authority: Option<Arc<dyn GameAuthority>>,
}

impl AuthorityBuilder {
    pub fn new() -> Self {
        Self {
            config: AuthorityConfig::default(),
            authority: None,
        }
    }

    pub fn config(mut self, config: AuthorityConfig) -> Self {
        self.config = config;
        self
    }

    /// Provide a ready-made authority instead of the HTTP one (e.g. a mock).
    pub fn authority(mut self, authority: impl GameAuthority + 'static) -> Self {
        self.authority = Some(Arc::new(authority));
        self
    }

    /// Connects to the authority and fetches the hero roster.
    ///
    /// The health check and the roster fetch never fail the build: an
    /// unreachable authority is reported when the player first needs it, and
    /// a missing roster only leaves the hero picker without stats.
    pub async fn build(self) -> Result<AuthoritySetup> {
        let authority = match self.authority {
            Some(authority) => authority,
            None => {
                let http = HttpAuthority::new(&self.config)
                    .context("failed to construct the HTTP authority")?;
                tracing::info!("Authority endpoint: {}", http.api_url());
                Arc::new(http) as Arc<dyn GameAuthority>
            }
        };

        match authority.ping().await {
            Ok(greeting) => {
                tracing::info!("{} authority reachable: {}", authority.name(), greeting)
            }
            Err(e) => tracing::warn!("{} authority health check failed: {}", authority.name(), e),
        }

        let roster = match authority.fetch_heroes().await {
            Ok(roster) => {
                tracing::info!("Loaded hero roster ({} classes)", roster.classes().count());
                roster
            }
            Err(e) => {
                tracing::warn!("Failed to load hero roster: {}. Continuing without it.", e);
                HeroRoster::empty()
            }
        };

        Ok(AuthoritySetup {
            config: self.config,
            authority,
            roster,
        })
    }
}

impl Default for AuthorityBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub struct AuthoritySetup {
    pub config: AuthorityConfig,
    pub authority: Arc<dyn GameAuthority>,
    pub roster: HeroRoster,
}
