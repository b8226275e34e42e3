use std::sync::Arc;

use common::storage::FileStore;

use crate::config::AppConfig;
use crate::repository::Store;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub files: Arc<dyn FileStore>,
    pub config: AppConfig,
}
