use std::error::Error;
use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::api::{create_routes, AppState};
use crate::config::Config;
use crate::gateway::GatewayClient;

type Result<T, E = Box<dyn Error + Send + Sync>> = std::result::Result<T, E>;

/// Runs the payment API with the given configuration until Ctrl-C.
///
/// # Arguments
/// * `config` - Listening port and gateway credentials
///
/// # Errors
/// Returns an error if:
/// * The gateway client cannot be built
/// * The port cannot be bound
/// * The server fails while serving
pub async fn run(config: Config) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    serve(listener, config).await
}

/// Serves the payment API on an already bound listener.
pub async fn serve(listener: TcpListener, config: Config) -> Result<()> {
    let gateway = GatewayClient::new(config.paystack_api_key)?;
    if !gateway.has_api_key() {
        warn!("PAYSTACK_API_KEY is not set, gateway requests will be unauthenticated");
    }

    let app = create_routes(AppState::new(gateway));

    info!(addr = %listener.local_addr()?, "payment API listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("payment API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
