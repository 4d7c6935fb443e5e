use std::sync::Arc;

use crate::infrastructure::{
    config::Config, query::QueryDocument, upstream::ReportGateway, views::Views,
};

/// Read-only after startup; shared by every request without locking.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub query: QueryDocument,
    pub gateway: Arc<dyn ReportGateway>,
    pub views: Arc<Views>,
}

impl AppState {
    pub fn new(
        config: Arc<Config>,
        query: QueryDocument,
        gateway: Arc<dyn ReportGateway>,
        views: Arc<Views>,
    ) -> Self {
        Self {
            config,
            query,
            gateway,
            views,
        }
    }
}
