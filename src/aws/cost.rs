use aws_config::SdkConfig;
use aws_sdk_costexplorer::types::{
    DateInterval, Dimension, DimensionValues, Expression, Granularity, GroupDefinition,
    GroupDefinitionType,
};
use aws_sdk_costexplorer::Client;

use crate::error::Error;
use crate::report::{BillingPeriod, ServiceCostGroup};

/// Cost metric requested from Cost Explorer.
const METRIC: &str = "UnblendedCost";

/// Record types excluded from the query so credits and refunds never appear
/// as negative service costs.
const EXCLUDED_RECORD_TYPES: [&str; 2] = ["Credit", "Refund"];

/// Grouping dimension: one result row per AWS service.
const GROUP_BY_SERVICE: &str = "SERVICE";

/// Query unblended costs for the period, grouped by service.
///
/// Only the first time bucket of the response is consumed. With MONTHLY
/// granularity and a month-to-date period the API returns exactly one
/// bucket; a wider date range would have its later buckets silently
/// dropped.
pub async fn fetch_service_costs(
    config: &SdkConfig,
    period: &BillingPeriod,
) -> Result<Vec<ServiceCostGroup>, Error> {
    let client = Client::new(config);

    let time_period = DateInterval::builder()
        .start(period.start_str())
        .end(period.end_str())
        .build()
        .expect("start and end are always set");

    let exclude_credits = Expression::builder()
        .not(
            Expression::builder()
                .dimensions(
                    DimensionValues::builder()
                        .key(Dimension::RecordType)
                        .set_values(Some(
                            EXCLUDED_RECORD_TYPES.iter().map(|s| s.to_string()).collect(),
                        ))
                        .build(),
                )
                .build(),
        )
        .build();

    let response = client
        .get_cost_and_usage()
        .time_period(time_period)
        .granularity(Granularity::Monthly)
        .metrics(METRIC)
        .filter(exclude_credits)
        .group_by(
            GroupDefinition::builder()
                .r#type(GroupDefinitionType::Dimension)
                .key(GROUP_BY_SERVICE)
                .build(),
        )
        .send()
        .await
        .map_err(|e| Error::Query(e.into()))?;

    let bucket = response.results_by_time().first().ok_or_else(|| {
        Error::MalformedResponse("response contained no time buckets".to_string())
    })?;

    let groups = bucket
        .groups()
        .iter()
        .map(|group| {
            let metric = group.metrics().and_then(|metrics| metrics.get(METRIC));
            ServiceCostGroup {
                keys: group.keys().to_vec(),
                amount: metric.and_then(|value| value.amount()).map(str::to_string),
                unit: metric.and_then(|value| value.unit()).map(str::to_string),
            }
        })
        .collect();

    Ok(groups)
}
