//! Dungeon game client binary.
//!
//! Main entry point for the Dungeon game client.
//!
//! # Architecture
//!
//! This binary is the composition root that assembles:
//! 1. Authority (remote game server) via AuthorityBuilder
//! 2. Frontend (UI) - CLI, GUI, etc.
//!
//! Both are built independently and injected into the Client container.
//!
//! # Features
//!
//! - `frontend-cli`: Terminal-based UI (default)
//!
//! # Examples
//!
//! ```bash
//! DUNGEON_API_URL=http://127.0.0.1:8001 cargo run -p dungeon-client
//! MOVEMENT_STRATEGY=local cargo run -p dungeon-client
//! ```

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli, ...)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use client_bootstrap::{AuthorityBuilder, ClientConfig};
    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};
    use dungeon_client::Client;

    // 1. Load configuration from environment
    let client_config = ClientConfig::from_env();
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging
    let _log_guard = logging::setup_logging(&client_config.log)?;

    tracing::info!("Starting Dungeon client");
    tracing::info!("Authority: {}", client_config.authority.base_url);
    tracing::info!("Movement: {}", frontend_config.movement);

    // 3. Build Authority (independent layer)
    tracing::debug!("Connecting to authority...");
    let setup = AuthorityBuilder::new()
        .config(client_config.authority)
        .build()
        .await?;

    tracing::info!("Authority ready");

    // 4. Build Frontend (independent layer)
    tracing::debug!("Building CLI frontend...");
    let frontend = CliFrontend::new(frontend_config.clone(), cli_config);

    // 5. Build and run
    let client = Client::builder()
        .setup(setup)
        .frontend_config(frontend_config)
        .frontend(frontend)
        .build()?;

    tracing::info!("Client assembled, starting...");
    if let Err(e) = client.run().await {
        tracing::error!("Frontend failed: {:#}", e);
        return Err(e);
    }

    tracing::info!("Client shutdown complete");
    Ok(())
}
