use thiserror::Error;

/// Failures a report run can hit, in pipeline order.
///
/// Role assumption and query failures abort the run. `Delivery` covers
/// transport-level Telegram failures only; a response that arrives with a
/// non-success status is handled at the send site and never becomes an
/// error.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to assume role {role_arn}")]
    AssumeRole {
        role_arn: String,
        #[source]
        source: aws_sdk_sts::Error,
    },

    #[error("cost and usage query failed")]
    Query(#[source] aws_sdk_costexplorer::Error),

    #[error("malformed cost response: {0}")]
    MalformedResponse(String),

    #[error("telegram request failed")]
    Delivery(#[from] reqwest::Error),
}
