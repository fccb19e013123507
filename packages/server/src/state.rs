use std::sync::Arc;

use common::Clock;
use sea_orm::DatabaseConnection;

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: AppConfig,
    /// Time source for document numbers.
    pub clock: Arc<dyn Clock>,
}
