use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Indicator identity & display metadata
// ---------------------------------------------------------------------------

/// Unique indicator identifier, used as key in registry and API requests.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndicatorId(pub String);

impl IndicatorId {
    pub fn new(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// How the numeric value is rendered on the KPI card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ValueFormat {
    Money { currency: String },
    Number { decimals: u8 },
    Percent { decimals: u8 },
    Integer,
}

/// Visual status of the indicator (drives colour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicatorStatus {
    Good,
    Bad,
    Neutral,
    Warning,
}

/// Static metadata describing one KPI card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorMeta {
    pub id: IndicatorId,
    pub label: String,
    pub icon: String,
    pub format: ValueFormat,
    pub description: Option<String>,
}

// ---------------------------------------------------------------------------
// Computed values
// ---------------------------------------------------------------------------

/// A single computed indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorValue {
    pub id: IndicatorId,
    /// Raw numeric value (`None` when data is unavailable).
    pub value: Option<f64>,
    /// Value already formatted for display (currency, percent, ...).
    pub display: String,
    pub status: IndicatorStatus,
    /// Optional secondary text displayed below the value.
    pub subtitle: Option<String>,
}

/// Full catalogue returned by the metadata endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorCatalogResponse {
    pub indicators: Vec<IndicatorMeta>,
}
