use std::sync::Arc;

use vitalrisk_report::views::Views;
use vitalrisk_storage::Database;
use vitalrisk_storage::error::StorageError;

use crate::error::ApiError;
use crate::session::SessionStore;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub views: Arc<Views>,
    pub sessions: SessionStore,
}

impl AppState {
    /// Run a blocking store call off the async runtime, leaving the
    /// store's own error for the caller to inspect.
    pub async fn try_with_db<T, F>(&self, f: F) -> Result<Result<T, StorageError>, ApiError>
    where
        T: Send + 'static,
        F: FnOnce(&Database) -> Result<T, StorageError> + Send + 'static,
    {
        let db = self.db.clone();
        Ok(tokio::task::spawn_blocking(move || f(&db)).await?)
    }

    pub async fn with_db<T, F>(&self, f: F) -> Result<T, ApiError>
    where
        T: Send + 'static,
        F: FnOnce(&Database) -> Result<T, StorageError> + Send + 'static,
    {
        Ok(self.try_with_db(f).await??)
    }
}
