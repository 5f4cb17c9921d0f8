use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use vitalrisk_report::views::Views;
use vitalrisk_server::config::{self, LogFormat};
use vitalrisk_server::session::SessionStore;
use vitalrisk_server::state::AppState;
use vitalrisk_storage::Database;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let config = config::load_config()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt().with_env_filter(filter).json().init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }

    let db = Database::new(&config.database_path);
    db.init()?;

    let state = AppState {
        db,
        views: Arc::new(Views::new()?),
        sessions: SessionStore::default(),
    };

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(
        addr = %config.bind_addr,
        database = %config.database_path.display(),
        "listening"
    );
    axum::serve(listener, vitalrisk_server::router(state)).await?;
    Ok(())
}
