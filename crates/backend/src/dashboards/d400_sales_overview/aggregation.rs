//! Aggregation engine for the sales overview dashboard
//!
//! Pure functions over a fully loaded record slice. Every division by a
//! possibly-zero denominator resolves to 0 instead of NaN.

use contracts::dashboards::d400_sales_overview::{
    CitySummary, GlobalTotals, RawSaleRecord, SegmentSummary,
};
use std::collections::HashMap;

/// Running sums for one group key
#[derive(Debug, Clone, Default)]
struct GroupAcc {
    count: usize,
    revenue: f64,
    weighted_profit: f64,
}

impl GroupAcc {
    fn add(&mut self, record: &RawSaleRecord) {
        self.count += 1;
        self.revenue += record.last_order_value;
        self.weighted_profit += record.last_order_value * record.profit_margin;
    }
}

/// Group records by `key` in a single pass, keeping first-occurrence order
fn group_by<'a, F>(records: &'a [RawSaleRecord], key: F) -> Vec<(&'a str, GroupAcc)>
where
    F: Fn(&'a RawSaleRecord) -> &'a str,
{
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, GroupAcc)> = Vec::new();

    for record in records {
        let k = key(record);
        let slot = *index.entry(k).or_insert_with(|| {
            groups.push((k, GroupAcc::default()));
            groups.len() - 1
        });
        groups[slot].1.add(record);
    }

    groups
}

/// Division that yields 0 for a zero denominator
fn safe_div(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// One summary per distinct city, descending by revenue.
///
/// Ties keep the order in which each city first appears in `records`.
pub fn aggregate_by_city(records: &[RawSaleRecord]) -> Vec<CitySummary> {
    let mut summaries: Vec<CitySummary> = group_by(records, |r| r.city.as_str())
        .into_iter()
        .map(|(city, acc)| CitySummary {
            city: city.to_string(),
            client_count: acc.count,
            total_revenue: acc.revenue,
            average_ticket: safe_div(acc.revenue, acc.count as f64),
            average_profitability: safe_div(acc.weighted_profit, acc.revenue) * 100.0,
        })
        .collect();

    // sort_by is stable
    summaries.sort_by(|a, b| b.total_revenue.total_cmp(&a.total_revenue));
    summaries
}

/// One summary per distinct segment, descending by revenue, ties in
/// first-occurrence order.
pub fn aggregate_by_segment(records: &[RawSaleRecord]) -> Vec<SegmentSummary> {
    let mut summaries: Vec<SegmentSummary> = group_by(records, |r| r.segment.as_str())
        .into_iter()
        .map(|(segment, acc)| SegmentSummary {
            segment: segment.to_string(),
            count: acc.count,
            total_revenue: acc.revenue,
        })
        .collect();

    summaries.sort_by(|a, b| b.total_revenue.total_cmp(&a.total_revenue));
    summaries
}

/// Totals over every record. Empty input gives all zeros.
pub fn compute_global_totals(records: &[RawSaleRecord]) -> GlobalTotals {
    let mut acc = GroupAcc::default();
    for record in records {
        acc.add(record);
    }

    GlobalTotals {
        total_revenue: acc.revenue,
        total_clients: acc.count,
        global_average_ticket: safe_div(acc.revenue, acc.count as f64),
        average_profitability: safe_div(acc.weighted_profit, acc.revenue) * 100.0,
    }
}
