use anyhow::{Context, Result};
use std::env;

use crate::telegram::TelegramSettings;

pub const ENV_ROLE_ARN: &str = "COSTWATCH_ROLE_ARN";
pub const ENV_SESSION_NAME: &str = "COSTWATCH_SESSION_NAME";
pub const ENV_TELEGRAM_TOKEN: &str = "TELEGRAM_API_TOKEN";
pub const ENV_TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";

/// Session name recorded against the assumed role when none is configured.
pub const DEFAULT_SESSION_NAME: &str = "costwatch";

/// Role and region used for the Cost Explorer query.
#[derive(Debug, Clone)]
pub struct AwsSettings {
    pub role_arn: String,
    pub session_name: String,
    /// Explicit region override; `None` defers to the SDK provider chain.
    pub region: Option<String>,
}

impl AwsSettings {
    /// Load from the environment. Used by the Lambda entry point; the CLI
    /// sources the same variables through clap's `env` fallback instead.
    pub fn from_env() -> Result<Self> {
        Ok(AwsSettings {
            role_arn: required_env(ENV_ROLE_ARN)?,
            session_name: env::var(ENV_SESSION_NAME)
                .unwrap_or_else(|_| DEFAULT_SESSION_NAME.to_string()),
            region: None,
        })
    }
}

/// Everything a full notify run needs.
#[derive(Debug, Clone)]
pub struct Settings {
    pub aws: AwsSettings,
    pub telegram: TelegramSettings,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Ok(Settings {
            aws: AwsSettings::from_env()?,
            telegram: TelegramSettings::new(
                required_env(ENV_TELEGRAM_TOKEN)?,
                required_env(ENV_TELEGRAM_CHAT_ID)?,
            ),
        })
    }
}

fn required_env(name: &str) -> Result<String> {
    env::var(name).with_context(|| format!("{name} is not set"))
}
