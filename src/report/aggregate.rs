use crate::error::Error;

use super::types::{BilledService, BillingPeriod, CostReport, ServiceCostGroup};

/// Collapse the grouped rows of a single time bucket into a cost report.
///
/// Every group contributes its service name (the first dimension key) to
/// `active` in input order, duplicates included. Only services whose cost
/// parses to a value strictly greater than zero land in `billed`; zero-cost
/// services stay active-only, and negative amounts (the query filter
/// already excludes credits and refunds, so these should not occur) are
/// dropped by the same test.
///
/// Pure function of its input: no I/O, no side effects.
pub fn aggregate(period: BillingPeriod, groups: &[ServiceCostGroup]) -> Result<CostReport, Error> {
    let mut billed = Vec::new();
    let mut active = Vec::with_capacity(groups.len());

    for group in groups {
        let service = group.keys.first().ok_or_else(|| {
            Error::MalformedResponse("cost group has no dimension keys".to_string())
        })?;
        let amount = group.amount.as_deref().ok_or_else(|| {
            Error::MalformedResponse(format!("cost group {service:?} has no UnblendedCost amount"))
        })?;
        let cost: f64 = amount.parse().map_err(|_| {
            Error::MalformedResponse(format!(
                "unparseable cost amount {amount:?} for service {service:?}"
            ))
        })?;

        active.push(service.clone());
        if cost > 0.0 {
            billed.push(BilledService {
                service: service.clone(),
                cost_usd: cost,
            });
        }
    }

    Ok(CostReport {
        period,
        billed,
        active,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn period() -> BillingPeriod {
        BillingPeriod::month_to_date(NaiveDate::from_ymd_opt(2026, 8, 7).unwrap())
    }

    fn group(service: &str, amount: &str) -> ServiceCostGroup {
        ServiceCostGroup {
            keys: vec![service.to_string()],
            amount: Some(amount.to_string()),
            unit: Some("USD".to_string()),
        }
    }

    #[test]
    fn test_zero_cost_service_is_active_but_not_billed() {
        let groups = vec![group("EC2", "0.0"), group("S3", "5.25")];
        let report = aggregate(period(), &groups).unwrap();

        assert_eq!(report.billed.len(), 1);
        assert_eq!(report.billed[0].service, "S3");
        assert!((report.billed[0].cost_usd - 5.25).abs() < 1e-9);
        assert_eq!(report.active, vec!["EC2", "S3"]);
    }

    #[test]
    fn test_all_billed_costs_are_positive() {
        let groups = vec![
            group("AmazonEC2", "12.5"),
            group("AWSLambda", "0"),
            group("AmazonS3", "-0.75"),
            group("AmazonRDS", "0.0000001"),
        ];
        let report = aggregate(period(), &groups).unwrap();

        assert!(report.billed.iter().all(|entry| entry.cost_usd > 0.0));
        assert_eq!(report.billed.len(), 2);
    }

    #[test]
    fn test_active_preserves_order_and_length() {
        let groups = vec![
            group("AmazonRoute53", "0.5"),
            group("AmazonEC2", "0"),
            group("AmazonRoute53", "0.5"),
        ];
        let report = aggregate(period(), &groups).unwrap();

        // Duplicates from the API pass through unchanged.
        assert_eq!(report.active.len(), groups.len());
        assert_eq!(
            report.active,
            vec!["AmazonRoute53", "AmazonEC2", "AmazonRoute53"]
        );
    }

    #[test]
    fn test_billed_is_subset_of_active() {
        let groups = vec![
            group("AmazonEC2", "1.0"),
            group("AmazonS3", "0"),
            group("AWSLambda", "0.004"),
        ];
        let report = aggregate(period(), &groups).unwrap();

        for entry in &report.billed {
            assert!(report.active.contains(&entry.service));
        }
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let groups = vec![group("AmazonEC2", "12.5"), group("AmazonS3", "0")];
        let first = aggregate(period(), &groups).unwrap();
        let second = aggregate(period(), &groups).unwrap();

        assert_eq!(first.billed, second.billed);
        assert_eq!(first.active, second.active);
    }

    #[test]
    fn test_empty_input_yields_empty_report() {
        let report = aggregate(period(), &[]).unwrap();
        assert!(report.billed.is_empty());
        assert!(report.active.is_empty());
    }

    #[test]
    fn test_missing_keys_is_malformed() {
        let groups = vec![ServiceCostGroup {
            keys: vec![],
            amount: Some("1.0".to_string()),
            unit: None,
        }];
        let err = aggregate(period(), &groups).unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));
    }

    #[test]
    fn test_missing_amount_is_malformed() {
        let groups = vec![ServiceCostGroup {
            keys: vec!["AmazonEC2".to_string()],
            amount: None,
            unit: None,
        }];
        let err = aggregate(period(), &groups).unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));
    }

    #[test]
    fn test_unparseable_amount_is_malformed() {
        let groups = vec![group("AmazonEC2", "not-a-number")];
        let err = aggregate(period(), &groups).unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));
    }
}
