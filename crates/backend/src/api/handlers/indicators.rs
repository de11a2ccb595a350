use axum::{extract::State, Json};
use contracts::shared::indicators::IndicatorCatalogResponse;

use crate::api::AppState;
use crate::shared::indicators::metadata::build_catalog;

/// GET /api/indicators/catalog
pub async fn get_catalog(State(state): State<AppState>) -> Json<IndicatorCatalogResponse> {
    Json(build_catalog(&state.settings.currency_symbol))
}
