use axum::{
    extract::{Query, State},
    Json,
};
use contracts::dashboards::d400_sales_overview::{
    CitySummary, GlobalTotals, SalesOverviewRequest, SalesOverviewResponse, SegmentSummary,
};

use crate::api::AppState;
use crate::dashboards::d400_sales_overview::service;

/// GET /api/d400/overview?search=rec
pub async fn get_overview(
    State(state): State<AppState>,
    Query(request): Query<SalesOverviewRequest>,
) -> Json<SalesOverviewResponse> {
    let response = service::build_overview(&state.snapshot, &request, &state.settings);

    tracing::info!(
        "D400 Dashboard: overview with {} of {} cities (search: {:?})",
        response.table_match_count,
        response.city_count,
        request.search
    );

    Json(response)
}

/// GET /api/d400/cities?search=rec
pub async fn list_cities(
    State(state): State<AppState>,
    Query(request): Query<SalesOverviewRequest>,
) -> Json<Vec<CitySummary>> {
    let cities = service::search_cities(&state.snapshot, &request);
    tracing::debug!("D400 Dashboard: returning {} cities", cities.len());
    Json(cities)
}

/// GET /api/d400/segments
pub async fn list_segments(State(state): State<AppState>) -> Json<Vec<SegmentSummary>> {
    Json(state.snapshot.segments().to_vec())
}

/// GET /api/d400/totals
pub async fn get_totals(State(state): State<AppState>) -> Json<GlobalTotals> {
    Json(*state.snapshot.totals())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d400_sales_overview::service::SalesSnapshot;
    use crate::shared::config::DashboardSettings;
    use crate::shared::data::source::sample_records;

    fn state() -> AppState {
        let snapshot = SalesSnapshot::build(sample_records().unwrap());
        AppState::new(snapshot, DashboardSettings::default())
    }

    #[tokio::test]
    async fn test_overview_handler_on_sample_data() {
        let Json(overview) = get_overview(
            State(state()),
            Query(SalesOverviewRequest::default()),
        )
        .await;

        assert_eq!(overview.city_count, 16);
        assert_eq!(overview.top_cities.len(), 10);
        assert_eq!(overview.top_segments.len(), 5);
        assert_eq!(overview.top_cities[0].city, "Recife");
        assert_eq!(overview.table_match_count, 16);
    }

    #[tokio::test]
    async fn test_cities_handler_search() {
        let Json(cities) = list_cities(
            State(state()),
            Query(SalesOverviewRequest {
                search: Some("santa".into()),
            }),
        )
        .await;

        assert_eq!(cities.len(), 1);
        assert_eq!(cities[0].city, "Santa Cruz do Capibaribe");
    }

    #[tokio::test]
    async fn test_totals_and_segments_are_consistent() {
        let state = state();
        let Json(totals) = get_totals(State(state.clone())).await;
        let Json(segments) = list_segments(State(state)).await;

        assert_eq!(totals.total_clients, 24);
        let segment_clients: usize = segments.iter().map(|s| s.count).sum();
        assert_eq!(segment_clients, totals.total_clients);

        let segment_revenue: f64 = segments.iter().map(|s| s.total_revenue).sum();
        assert!((segment_revenue - totals.total_revenue).abs() < 1e-6);
    }
}
