mod aggregate;
mod types;

pub use aggregate::aggregate;
pub use types::{BilledService, BillingPeriod, CostReport, ServiceCostGroup};
