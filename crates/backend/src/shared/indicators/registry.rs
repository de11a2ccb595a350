use contracts::dashboards::d400_sales_overview::{CitySummary, GlobalTotals};
use contracts::shared::indicators::*;
use std::collections::HashMap;

use super::compute::sales;
use super::metadata::ids;

/// Already aggregated data the KPI functions read from
pub struct IndicatorInputs<'a> {
    pub totals: &'a GlobalTotals,
    pub cities: &'a [CitySummary],
    pub currency_symbol: &'a str,
}

type ComputeFn = fn(&IndicatorInputs<'_>) -> IndicatorValue;

/// Central registry: maps `IndicatorId` to its compute function.
pub struct IndicatorRegistry {
    fns: HashMap<String, ComputeFn>,
}

impl IndicatorRegistry {
    pub fn new() -> Self {
        let mut fns: HashMap<String, ComputeFn> = HashMap::new();

        fns.insert(ids::total_revenue().0, sales::compute_total_revenue);
        fns.insert(ids::cities_served().0, sales::compute_cities_served);
        fns.insert(ids::avg_profitability().0, sales::compute_avg_profitability);
        fns.insert(ids::avg_ticket().0, sales::compute_avg_ticket);

        Self { fns }
    }

    /// Compute a batch of indicators, in request order.
    pub fn compute(&self, ids: &[IndicatorId], input: &IndicatorInputs<'_>) -> Vec<IndicatorValue> {
        let mut results = Vec::with_capacity(ids.len());

        for id in ids {
            if let Some(compute_fn) = self.fns.get(&id.0) {
                results.push(compute_fn(input));
            } else {
                tracing::warn!("indicator {} not found in registry", id.0);
            }
        }

        results
    }
}

impl Default for IndicatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city(name: &str) -> CitySummary {
        CitySummary {
            city: name.into(),
            client_count: 2,
            total_revenue: 700.0,
            average_ticket: 350.0,
            average_profitability: 24.0,
        }
    }

    #[test]
    fn test_compute_overview_cards() {
        let totals = GlobalTotals {
            total_revenue: 1400.0,
            total_clients: 4,
            global_average_ticket: 350.0,
            average_profitability: 23.3333,
        };
        let cities = vec![city("Recife"), city("Olinda")];
        let input = IndicatorInputs {
            totals: &totals,
            cities: &cities,
            currency_symbol: "R$",
        };

        let values = IndicatorRegistry::new().compute(&ids::overview_cards(), &input);
        assert_eq!(values.len(), 4);

        assert_eq!(values[0].display, "R$ 1.400,00");
        assert_eq!(values[1].display, "2");
        assert_eq!(values[1].subtitle.as_deref(), Some("4 clientes ativos"));
        assert_eq!(values[2].display, "23.3%");
        assert_eq!(values[2].status, IndicatorStatus::Good);
        assert_eq!(values[3].display, "R$ 350,00");
    }

    #[test]
    fn test_unknown_indicator_is_skipped() {
        let totals = GlobalTotals::default();
        let input = IndicatorInputs {
            totals: &totals,
            cities: &[],
            currency_symbol: "R$",
        };

        let values = IndicatorRegistry::new().compute(
            &[IndicatorId::new("sales_returns_sum"), ids::avg_ticket()],
            &input,
        );
        assert_eq!(values.len(), 1);
        assert_eq!(values[0].id, ids::avg_ticket());
        assert_eq!(values[0].display, "R$ 0,00");
    }
}
