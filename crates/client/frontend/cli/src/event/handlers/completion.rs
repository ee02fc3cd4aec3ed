//! Authority request handling.

use std::sync::Arc;

use client_authority::{AuthorityError, GameAuthority};
use client_frontend_core::{Applied, Completion, ControlError, Ticket, execute};

use super::super::EventLoop;

impl EventLoop {
    /// Execute `ticket` on a background task; its completion arrives on the
    /// loop's channel.
    pub(in crate::event) fn spawn_request(&self, ticket: Ticket) {
        let authority = Arc::clone(&self.authority);
        let tx = self.tx_completion.clone();

        tokio::spawn(async move {
            let completion = run_ticket(authority, ticket).await;
            if tx.send(completion).await.is_err() {
                tracing::debug!("Completion channel closed, dropping response");
            }
        });
    }

    pub(in crate::event) fn handle_completion(&mut self, completion: Completion) {
        match self.controller.apply(completion) {
            Ok(Applied::Started) => tracing::info!("Game view entered"),
            Ok(Applied::Moved { success, in_combat }) => {
                tracing::debug!(success, in_combat, "Move applied");
            }
            Ok(Applied::Fought { ended, defeated }) => {
                tracing::debug!(ended, defeated, "Combat round applied");
            }
            // Already logged (and reported to the player) by the controller.
            Err(ControlError::StaleResponse { .. }) => {}
            Err(e) => tracing::debug!("Completion not applied: {}", e),
        }
    }
}

/// Runs `ticket` on its own task. A panic inside the round trip still yields
/// a completion, reported as a transport failure.
async fn run_ticket(authority: Arc<dyn GameAuthority>, ticket: Ticket) -> Completion {
    let request = ticket.clone();
    let task = tokio::spawn(async move { execute(authority.as_ref(), request).await });

    match task.await {
        Ok(completion) => completion,
        Err(e) => {
            tracing::error!(request = ticket.request.name(), "Request task failed: {}", e);
            Completion::aborted(&ticket, AuthorityError::Network(format!("request aborted: {e}")))
        }
    }
}
