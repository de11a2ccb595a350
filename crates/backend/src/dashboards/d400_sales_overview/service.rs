use once_cell::sync::Lazy;

use contracts::dashboards::d400_sales_overview::{
    filter_cities, CitySummary, CityTableRow, GlobalTotals, RawSaleRecord,
    SalesOverviewRequest, SalesOverviewResponse, SegmentSummary,
};

use super::aggregation;
use crate::shared::config::DashboardSettings;
use crate::shared::indicators::metadata::ids;
use crate::shared::indicators::registry::{IndicatorInputs, IndicatorRegistry};

static REGISTRY: Lazy<IndicatorRegistry> = Lazy::new(IndicatorRegistry::new);

/// Loaded records together with their aggregates.
///
/// Aggregation runs once, when the snapshot is built; requests only filter
/// and slice the stored summaries.
#[derive(Debug, Clone)]
pub struct SalesSnapshot {
    records: Vec<RawSaleRecord>,
    cities: Vec<CitySummary>,
    segments: Vec<SegmentSummary>,
    totals: GlobalTotals,
}

impl SalesSnapshot {
    pub fn build(records: Vec<RawSaleRecord>) -> Self {
        let cities = aggregation::aggregate_by_city(&records);
        let segments = aggregation::aggregate_by_segment(&records);
        let totals = aggregation::compute_global_totals(&records);

        tracing::info!(
            "D400 Dashboard: aggregated {} records into {} cities and {} segments",
            records.len(),
            cities.len(),
            segments.len()
        );

        Self {
            records,
            cities,
            segments,
            totals,
        }
    }

    pub fn records(&self) -> &[RawSaleRecord] {
        &self.records
    }

    /// Cities, descending by revenue
    pub fn cities(&self) -> &[CitySummary] {
        &self.cities
    }

    /// Segments, descending by revenue
    pub fn segments(&self) -> &[SegmentSummary] {
        &self.segments
    }

    pub fn totals(&self) -> &GlobalTotals {
        &self.totals
    }
}

/// Build the full overview screen model
pub fn build_overview(
    snapshot: &SalesSnapshot,
    request: &SalesOverviewRequest,
    settings: &DashboardSettings,
) -> SalesOverviewResponse {
    let input = IndicatorInputs {
        totals: snapshot.totals(),
        cities: snapshot.cities(),
        currency_symbol: &settings.currency_symbol,
    };
    let kpis = REGISTRY.compute(&ids::overview_cards(), &input);

    let cities = snapshot.cities();
    let top_cities = cities.iter().take(settings.top_cities).cloned().collect();
    let top_segments = snapshot
        .segments()
        .iter()
        .take(settings.top_segments)
        .cloned()
        .collect();

    let table: Vec<CityTableRow> = search_cities(snapshot, request)
        .into_iter()
        .map(|summary| CityTableRow::new(summary, settings.high_revenue_threshold))
        .collect();

    SalesOverviewResponse {
        kpis,
        city_count: cities.len(),
        top_cities,
        top_segments,
        scatter: cities.to_vec(),
        table_match_count: table.len(),
        table,
    }
}

/// City summaries matching the request's search term
pub fn search_cities(snapshot: &SalesSnapshot, request: &SalesOverviewRequest) -> Vec<CitySummary> {
    let term = request.search.as_deref().unwrap_or("");
    filter_cities(snapshot.cities(), term)
}
