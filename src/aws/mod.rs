mod cost;
mod credentials;

pub use cost::fetch_service_costs;
pub use credentials::assume_role;

use crate::config::AwsSettings;
use crate::error::Error;
use crate::report::{aggregate, BillingPeriod, CostReport};

/// Run the full billing pipeline for the current month: assume the
/// configured role, query Cost Explorer, aggregate into a report.
pub async fn month_to_date_report(settings: &AwsSettings) -> Result<CostReport, Error> {
    let period = BillingPeriod::current();
    eprintln!(
        "[costwatch] billing period {} to {}",
        period.start_str(),
        period.end_str()
    );

    let config = assume_role(settings).await?;
    let groups = fetch_service_costs(&config, &period).await?;
    aggregate(period, &groups)
}
