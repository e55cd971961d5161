use std::time::{Duration, SystemTime};

use aws_config::meta::region::RegionProviderChain;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_sts::config::Credentials;

use crate::config::AwsSettings;
use crate::error::Error;

/// Exchange the configured role for temporary credentials and return an SDK
/// config wired to them.
///
/// Region resolution prefers an explicit override, then the usual provider
/// chain (AWS_REGION / AWS_DEFAULT_REGION, profile, IMDS).
pub async fn assume_role(settings: &AwsSettings) -> Result<SdkConfig, Error> {
    let base = aws_config::defaults(BehaviorVersion::latest())
        .region(region_provider(settings.region.as_deref()))
        .load()
        .await;

    let sts = aws_sdk_sts::Client::new(&base);
    let assumed = sts
        .assume_role()
        .role_arn(&settings.role_arn)
        .role_session_name(&settings.session_name)
        .send()
        .await
        .map_err(|e| Error::AssumeRole {
            role_arn: settings.role_arn.clone(),
            source: e.into(),
        })?;

    let credentials = assumed.credentials().ok_or_else(|| {
        Error::MalformedResponse("assume-role response carried no credentials".to_string())
    })?;

    let expiry = u64::try_from(credentials.expiration().secs())
        .ok()
        .map(|secs| SystemTime::UNIX_EPOCH + Duration::from_secs(secs));
    let provider = Credentials::new(
        credentials.access_key_id(),
        credentials.secret_access_key(),
        Some(credentials.session_token().to_string()),
        expiry,
        "costwatch-assumed-role",
    );

    let config = aws_config::defaults(BehaviorVersion::latest())
        .credentials_provider(provider)
        .region(region_provider(settings.region.as_deref()))
        .load()
        .await;

    Ok(config)
}

fn region_provider(region: Option<&str>) -> RegionProviderChain {
    match region {
        Some(explicit) => RegionProviderChain::first_try(Region::new(explicit.to_string()))
            .or_default_provider(),
        None => RegionProviderChain::default_provider(),
    }
}
