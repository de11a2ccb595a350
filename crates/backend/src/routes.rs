use axum::{routing::get, Router};

use crate::api::{handlers, AppState};

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // D400 Sales overview
        .route(
            "/api/d400/overview",
            get(handlers::d400_sales_overview::get_overview),
        )
        .route(
            "/api/d400/cities",
            get(handlers::d400_sales_overview::list_cities),
        )
        .route(
            "/api/d400/segments",
            get(handlers::d400_sales_overview::list_segments),
        )
        .route(
            "/api/d400/totals",
            get(handlers::d400_sales_overview::get_totals),
        )
        // KPI metadata
        .route(
            "/api/indicators/catalog",
            get(handlers::indicators::get_catalog),
        )
        .with_state(state)
}
