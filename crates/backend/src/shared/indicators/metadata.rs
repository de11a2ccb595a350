use contracts::shared::indicators::*;

/// Well-known indicator IDs (constants to avoid typos).
pub mod ids {
    use super::*;

    pub fn total_revenue() -> IndicatorId {
        IndicatorId::new("sales_total_revenue")
    }
    pub fn cities_served() -> IndicatorId {
        IndicatorId::new("sales_cities_served")
    }
    pub fn avg_profitability() -> IndicatorId {
        IndicatorId::new("sales_avg_profitability")
    }
    pub fn avg_ticket() -> IndicatorId {
        IndicatorId::new("sales_avg_ticket")
    }

    /// KPI cards of the overview screen, in display order
    pub fn overview_cards() -> Vec<IndicatorId> {
        vec![total_revenue(), cities_served(), avg_profitability(), avg_ticket()]
    }
}

/// Build the full catalogue of KPI indicators.
pub fn build_catalog(currency_symbol: &str) -> IndicatorCatalogResponse {
    let indicators = vec![
        IndicatorMeta {
            id: ids::total_revenue(),
            label: "Faturamento Total".into(),
            icon: "shopping-bag".into(),
            format: ValueFormat::Money {
                currency: currency_symbol.into(),
            },
            description: Some("Soma do valor do último pedido de cada cliente".into()),
        },
        IndicatorMeta {
            id: ids::cities_served(),
            label: "Cidades Atendidas".into(),
            icon: "map-pin".into(),
            format: ValueFormat::Integer,
            description: Some("Quantidade de cidades distintas com vendas".into()),
        },
        IndicatorMeta {
            id: ids::avg_profitability(),
            label: "Lucratividade Média".into(),
            icon: "trending-up".into(),
            format: ValueFormat::Percent { decimals: 1 },
            description: Some("Margem de lucro ponderada pelo faturamento".into()),
        },
        IndicatorMeta {
            id: ids::avg_ticket(),
            label: "Ticket Médio Geral".into(),
            icon: "arrow-up-right".into(),
            format: ValueFormat::Money {
                currency: currency_symbol.into(),
            },
            description: Some("Faturamento total / quantidade de clientes".into()),
        },
    ];

    IndicatorCatalogResponse { indicators }
}
