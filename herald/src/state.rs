use std::sync::Arc;

use crate::{config::Config, infrastructure::github::AnnouncementStore};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: AnnouncementStore,
}

impl AppState {
    pub fn new(config: Arc<Config>, store: AnnouncementStore) -> Self {
        Self { config, store }
    }
}
