use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::indicators::IndicatorValue;

/// Profitability (percent) above which a city is highlighted in the table
pub const PROFITABILITY_HIGHLIGHT_PERCENT: f64 = 25.0;

/// One sale record as delivered by the data source (one per client)
///
/// Field aliases accept the column names used by the original spreadsheet
/// export (`cidade`, `vlrUltima`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSaleRecord {
    #[serde(alias = "regiao")]
    pub region: String,
    #[serde(alias = "segmento")]
    pub segment: String,
    #[serde(alias = "cidade")]
    pub city: String,
    #[serde(alias = "mediaPedido")]
    pub average_order_value: f64,
    #[serde(alias = "dsc")]
    pub discount: f64,
    #[serde(alias = "dataUltima")]
    pub last_order_date: String,
    /// Monetary amount attributed to this record, base unit of every revenue sum
    #[serde(alias = "vlrUltima")]
    pub last_order_value: f64,
    /// Fraction, e.g. 0.23 = 23%
    #[serde(alias = "profitMargin")]
    pub profit_margin: f64,
}

impl RawSaleRecord {
    /// Parse `last_order_date` as `YYYY-MM-DD` or `DD/MM/YYYY`
    pub fn last_order_date_parsed(&self) -> Option<NaiveDate> {
        let raw = self.last_order_date.trim();
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .or_else(|_| NaiveDate::parse_from_str(raw, "%d/%m/%Y"))
            .ok()
    }
}

/// Per-city aggregate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CitySummary {
    pub city: String,
    pub client_count: usize,
    pub total_revenue: f64,
    /// total_revenue / client_count
    pub average_ticket: f64,
    /// Revenue-weighted profit margin, 0..100 scale
    pub average_profitability: f64,
}

/// Per-segment aggregate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentSummary {
    pub segment: String,
    pub count: usize,
    pub total_revenue: f64,
}

/// Scalars computed over the whole record set
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GlobalTotals {
    pub total_revenue: f64,
    pub total_clients: usize,
    pub global_average_ticket: f64,
    /// Revenue-weighted profit margin over all records, 0..100 scale
    pub average_profitability: f64,
}

/// Productivity label shown in the city table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CityStatus {
    HighProductivity,
    Regular,
}

impl CityStatus {
    /// Strictly above `threshold` is high productivity
    pub fn classify(total_revenue: f64, threshold: f64) -> Self {
        if total_revenue > threshold {
            CityStatus::HighProductivity
        } else {
            CityStatus::Regular
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CityStatus::HighProductivity => "Alta Prod.",
            CityStatus::Regular => "Regular",
        }
    }
}

/// Row of the consolidated city table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityTableRow {
    pub summary: CitySummary,
    pub status: CityStatus,
    /// Profitability above [`PROFITABILITY_HIGHLIGHT_PERCENT`]
    pub profitability_highlight: bool,
}

impl CityTableRow {
    pub fn new(summary: CitySummary, high_revenue_threshold: f64) -> Self {
        let status = CityStatus::classify(summary.total_revenue, high_revenue_threshold);
        let profitability_highlight =
            summary.average_profitability > PROFITABILITY_HIGHLIGHT_PERCENT;
        Self {
            summary,
            status,
            profitability_highlight,
        }
    }
}

/// Query for the sales overview dashboard
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SalesOverviewRequest {
    /// City search term, case-insensitive substring
    #[serde(default)]
    pub search: Option<String>,
}

/// Everything the sales overview screen renders
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesOverviewResponse {
    /// KPI cards, in display order
    pub kpis: Vec<IndicatorValue>,
    /// Number of distinct cities served
    pub city_count: usize,
    /// Revenue bar chart (top N by revenue)
    pub top_cities: Vec<CitySummary>,
    /// Segment donut chart (top N by revenue, sized by client count)
    pub top_segments: Vec<SegmentSummary>,
    /// Profitability vs ticket scatter, every city
    pub scatter: Vec<CitySummary>,
    /// City table after applying the search term
    pub table: Vec<CityTableRow>,
    pub table_match_count: usize,
}

/// Case-insensitive substring filter over already sorted city summaries.
///
/// An empty (or blank) term keeps every city. Input order is preserved.
pub fn filter_cities(summaries: &[CitySummary], term: &str) -> Vec<CitySummary> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return summaries.to_vec();
    }

    summaries
        .iter()
        .filter(|s| s.city.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(city: &str, revenue: f64) -> CitySummary {
        CitySummary {
            city: city.to_string(),
            client_count: 1,
            total_revenue: revenue,
            average_ticket: revenue,
            average_profitability: 20.0,
        }
    }

    #[test]
    fn test_filter_cities_case_insensitive() {
        let cities = vec![
            summary("Recife", 300.0),
            summary("Olinda", 200.0),
            summary("Jaboatão dos Guararapes", 100.0),
        ];

        let found = filter_cities(&cities, "REC");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].city, "Recife");

        let found = filter_cities(&cities, "  guara ");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].city, "Jaboatão dos Guararapes");
    }

    #[test]
    fn test_filter_cities_keeps_order() {
        let cities = vec![
            summary("Caruaru", 300.0),
            summary("Arcoverde", 200.0),
            summary("Carpina", 100.0),
        ];

        let found = filter_cities(&cities, "car");
        let names: Vec<&str> = found.iter().map(|c| c.city.as_str()).collect();
        assert_eq!(names, vec!["Caruaru", "Carpina"]);
    }

    #[test]
    fn test_filter_cities_empty_term() {
        let cities = vec![summary("Recife", 1.0), summary("Olinda", 0.5)];
        assert_eq!(filter_cities(&cities, ""), cities);
        assert_eq!(filter_cities(&cities, "   "), cities);
        assert!(filter_cities(&cities, "natal").is_empty());
    }

    #[test]
    fn test_city_status_threshold_is_strict() {
        assert_eq!(CityStatus::classify(1000.0, 1000.0), CityStatus::Regular);
        assert_eq!(
            CityStatus::classify(1000.01, 1000.0),
            CityStatus::HighProductivity
        );
        assert_eq!(CityStatus::HighProductivity.label(), "Alta Prod.");
    }

    #[test]
    fn test_table_row_highlight() {
        let mut s = summary("Recife", 5000.0);
        s.average_profitability = 25.0;
        let row = CityTableRow::new(s.clone(), 1000.0);
        assert!(!row.profitability_highlight);
        assert_eq!(row.status, CityStatus::HighProductivity);

        s.average_profitability = 25.1;
        assert!(CityTableRow::new(s, 1000.0).profitability_highlight);
    }

    #[test]
    fn test_raw_record_accepts_source_column_names() {
        let json = r#"{
            "regiao": "Metropolitana",
            "segmento": "Padaria",
            "cidade": "Recife",
            "mediaPedido": 150.5,
            "dsc": 0.05,
            "dataUltima": "12/12/2025",
            "vlrUltima": 320.0,
            "profitMargin": 0.23
        }"#;

        let record: RawSaleRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.city, "Recife");
        assert_eq!(record.segment, "Padaria");
        assert_eq!(record.last_order_value, 320.0);
        assert_eq!(
            record.last_order_date_parsed(),
            NaiveDate::from_ymd_opt(2025, 12, 12)
        );
    }

    #[test]
    fn test_last_order_date_iso_and_invalid() {
        let mut record = RawSaleRecord {
            region: "Sertão".into(),
            segment: "Mercado".into(),
            city: "Petrolina".into(),
            average_order_value: 0.0,
            discount: 0.0,
            last_order_date: "2025-11-30".into(),
            last_order_value: 0.0,
            profit_margin: 0.0,
        };
        assert_eq!(
            record.last_order_date_parsed(),
            NaiveDate::from_ymd_opt(2025, 11, 30)
        );

        record.last_order_date = "ontem".into();
        assert_eq!(record.last_order_date_parsed(), None);
    }
}
