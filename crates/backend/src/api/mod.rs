pub mod handlers;

use std::sync::Arc;

use crate::dashboards::d400_sales_overview::service::SalesSnapshot;
use crate::shared::config::DashboardSettings;

/// Shared, read-only state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub snapshot: Arc<SalesSnapshot>,
    pub settings: Arc<DashboardSettings>,
}

impl AppState {
    pub fn new(snapshot: SalesSnapshot, settings: DashboardSettings) -> Self {
        Self {
            snapshot: Arc::new(snapshot),
            settings: Arc::new(settings),
        }
    }
}
