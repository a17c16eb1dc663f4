//! Mediator Bot API server binary.
//!
//! Loads `.env`, resolves the Cerebras credential, and serves `GET /` and
//! `POST /chat` until interrupted.

use std::sync::Arc;

use clap::Parser;
use mediator_api::config::ApiConfig;
use mediator_core::completion::CompletionClient;
use mediator_core::completion::cerebras::CerebrasClient;
use mediator_core::completion::config::CompletionConfig;
use mediator_core::mediation::MediationProcessor;
use tracing::{info, warn};

/// CLI arguments for the API server.
#[derive(Parser, Debug)]
#[command(name = "mediator_api_server", about = "Mediator Bot API server", version)]
struct Args {
    /// Address to listen on; overrides `MEDIATOR_BIND_ADDR` (port 0 = ephemeral).
    #[arg(long)]
    bind_addr: Option<String>,
}

/// Builds the completion client, or `None` when AI mediation is unavailable.
fn completion_client(config: &CompletionConfig) -> Option<Arc<dyn CompletionClient>> {
    match CerebrasClient::from_config(config) {
        Ok(Some(client)) => {
            info!(model = %config.model, endpoint = client.endpoint(), "AI mediation enabled");
            Some(Arc::new(client))
        }
        Ok(None) => {
            warn!("CEREBRAS_API_KEY not set, AI mediation disabled");
            None
        }
        Err(e) => {
            warn!(error = %e, "could not configure completion client, AI mediation disabled");
            None
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,mediator_api=debug,mediator_core=debug".into()),
        )
        .init();

    let args = Args::parse();

    let mut config = ApiConfig::from_env();
    if let Some(bind_addr) = args.bind_addr {
        config.bind_addr = bind_addr;
    }
    info!(
        version = mediator_core::version(),
        completion = ?config.completion,
        "starting mediator_api_server"
    );

    let processor = MediationProcessor::new(completion_client(&config.completion));
    info!(ai_enabled = processor.is_enabled(), "mediation processor ready");
    let state = mediator_api::AppState::new(processor);
    let app = mediator_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    let local_addr = listener.local_addr()?;
    info!(addr = %local_addr, "REST API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
