mod response;
mod routes;

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::constructor::DishService;
use crate::error::Result;

pub use response::ErrorResponse;
pub use routes::router;

/// Serve the constructor API on `address` until Ctrl-C.
pub async fn serve(address: &str, service: Arc<DishService>) -> Result<()> {
    let listener = TcpListener::bind(address).await?;
    info!(address = %listener.local_addr()?, "Starting dish constructor server");

    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // Without a signal handler the server runs until killed.
        std::future::pending::<()>().await;
    }
}
