use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Console plus `target/logs/backend.log`, filtered by `RUST_LOG`.
pub fn init_tracing() -> anyhow::Result<()> {
    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("backend.log"))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    Ok(())
}
