use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;

/// Date range covered by a billing query.
///
/// Cost Explorer treats `start` as inclusive and `end` as exclusive, so a
/// month-to-date period runs from the 1st up to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BillingPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl BillingPeriod {
    /// Period from the first day of `today`'s month through `today`.
    pub fn month_to_date(today: NaiveDate) -> Self {
        let start = today.with_day(1).expect("day 1 exists in every month");
        BillingPeriod { start, end: today }
    }

    /// Month-to-date period for the current local date.
    pub fn current() -> Self {
        Self::month_to_date(Local::now().date_naive())
    }

    pub fn start_str(&self) -> String {
        self.start.format("%Y-%m-%d").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end.format("%Y-%m-%d").to_string()
    }
}

/// One row of the grouped Cost Explorer result: the dimension keys for the
/// group plus the UnblendedCost metric as returned on the wire.
///
/// The amount stays a string here; name extraction, numeric parsing, and
/// filtering all happen in the aggregator.
#[derive(Debug, Clone, Default)]
pub struct ServiceCostGroup {
    pub keys: Vec<String>,
    pub amount: Option<String>,
    /// Currency unit, e.g. "USD". Carried through but ignored downstream.
    pub unit: Option<String>,
}

/// A single billed service and its month-to-date cost.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BilledService {
    pub service: String,
    pub cost_usd: f64,
}

/// Aggregated month-to-date costs grouped by service.
#[derive(Debug, Clone, Serialize)]
pub struct CostReport {
    pub period: BillingPeriod,
    /// Services with a strictly positive cost, in API response order.
    pub billed: Vec<BilledService>,
    /// Every service seen in the period, in API response order. Includes
    /// zero-cost services, so `billed` is always a subset of this list.
    pub active: Vec<String>,
}

impl CostReport {
    /// Sum of all billed costs.
    pub fn total_usd(&self) -> f64 {
        self.billed.iter().map(|entry| entry.cost_usd).sum()
    }
}
