use tokio::net::TcpListener;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::http::connection::Connection;
use crate::routes::Router;

pub async fn run(cfg: Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.listen_addr).await?;
    info!("Listening on {}", cfg.listen_addr);

    serve(listener, Router::new(cfg.directory)).await
}

/// Accepts connections forever, one spawned task per connection with no
/// upper bound. A failed accept is logged and does not stop the listener.
pub async fn serve(listener: TcpListener, router: Router) -> anyhow::Result<()> {
    loop {
        match listener.accept().await {
            Ok((socket, peer)) => {
                debug!("Accepted connection from {}", peer);

                let router = router.clone();
                tokio::spawn(async move {
                    let mut conn = Connection::new(socket, router);
                    if let Err(e) = conn.run().await {
                        tracing::error!("Connection error from {}: {}", peer, e);
                    }
                });
            }

            Err(e) => {
                warn!("Failed to accept connection: {}", e);
            }
        }
    }
}
