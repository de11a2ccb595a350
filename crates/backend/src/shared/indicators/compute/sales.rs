use contracts::shared::indicators::*;

use crate::shared::format::{format_money, format_number, format_percent};
use crate::shared::indicators::metadata::ids;
use crate::shared::indicators::registry::IndicatorInputs;

pub fn compute_total_revenue(input: &IndicatorInputs<'_>) -> IndicatorValue {
    let revenue = input.totals.total_revenue;
    IndicatorValue {
        id: ids::total_revenue(),
        value: Some(revenue),
        display: format_money(revenue, input.currency_symbol),
        status: IndicatorStatus::Neutral,
        subtitle: Some("Baseado no valor do último pedido".into()),
    }
}

pub fn compute_cities_served(input: &IndicatorInputs<'_>) -> IndicatorValue {
    let cities = input.cities.len();
    IndicatorValue {
        id: ids::cities_served(),
        value: Some(cities as f64),
        display: format_number(cities),
        status: IndicatorStatus::Neutral,
        subtitle: Some(format!(
            "{} clientes ativos",
            format_number(input.totals.total_clients)
        )),
    }
}

pub fn compute_avg_profitability(input: &IndicatorInputs<'_>) -> IndicatorValue {
    let profitability = input.totals.average_profitability;
    IndicatorValue {
        id: ids::avg_profitability(),
        value: Some(profitability),
        display: format_percent(profitability, 1),
        status: IndicatorStatus::Good,
        subtitle: Some("Ponderada pelo faturamento".into()),
    }
}

pub fn compute_avg_ticket(input: &IndicatorInputs<'_>) -> IndicatorValue {
    let ticket = input.totals.global_average_ticket;
    IndicatorValue {
        id: ids::avg_ticket(),
        value: Some(ticket),
        display: format_money(ticket, input.currency_symbol),
        status: IndicatorStatus::Neutral,
        subtitle: Some("Valor por pedido".into()),
    }
}
