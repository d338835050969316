pub mod handlers;
pub mod routes;
pub mod shared;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use tokio::net::TcpListener;

    shared::logging::init_tracing()?;

    let config = shared::config::get_config()?;
    let app = routes::configure_routes(config);
    let addr = config.socket_addr()?;

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
