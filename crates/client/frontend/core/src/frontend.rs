//! Trait describing a runnable client front-end.
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use client_authority::GameAuthority;

use crate::controller::GameController;

/// Frontend abstraction for UI layers.
///
/// Frontends own the input loop. They feed input into the
/// [`GameController`], execute the tickets it hands out against the
/// authority with [`crate::dispatch::execute`], and pass the completions
/// back through [`GameController::apply`].
///
/// # Implementations
///
/// - `CliFrontend`: Terminal-based UI (ratatui + crossterm)
#[async_trait]
pub trait Frontend: Send {
    /// Run the frontend event loop until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend encounters a fatal error.
    async fn run(
        &mut self,
        controller: GameController,
        authority: Arc<dyn GameAuthority>,
    ) -> Result<()>;
}
