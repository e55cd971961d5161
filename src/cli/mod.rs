pub mod commands;

use clap::{Args, Parser, Subcommand};

use crate::config::{
    AwsSettings, DEFAULT_SESSION_NAME, ENV_ROLE_ARN, ENV_SESSION_NAME, ENV_TELEGRAM_CHAT_ID,
    ENV_TELEGRAM_TOKEN,
};

#[derive(Parser, Debug)]
#[command(name = "costwatch")]
#[command(version, about = "Month-to-date AWS cost reports delivered to Telegram")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the month-to-date cost report to the terminal
    Report(ReportArgs),
    /// Fetch the report and deliver it to a Telegram chat
    Notify(NotifyArgs),
}

#[derive(Args, Debug)]
pub struct AwsArgs {
    /// IAM role assumed for the Cost Explorer query
    #[arg(long, env = ENV_ROLE_ARN)]
    pub role_arn: String,

    /// Session name recorded against the assumed role
    #[arg(long, env = ENV_SESSION_NAME, default_value = DEFAULT_SESSION_NAME)]
    pub session_name: String,

    /// AWS region override (otherwise the default provider chain decides)
    #[arg(long)]
    pub region: Option<String>,
}

impl AwsArgs {
    pub fn into_settings(self) -> AwsSettings {
        AwsSettings {
            role_arn: self.role_arn,
            session_name: self.session_name,
            region: self.region,
        }
    }
}

#[derive(Args, Debug)]
pub struct ReportArgs {
    #[command(flatten)]
    pub aws: AwsArgs,

    /// Emit the report as JSON instead of formatted text
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct NotifyArgs {
    #[command(flatten)]
    pub aws: AwsArgs,

    /// Telegram bot API token
    #[arg(long, env = ENV_TELEGRAM_TOKEN, hide_env_values = true)]
    pub api_token: String,

    /// Target chat identifier
    #[arg(long, env = ENV_TELEGRAM_CHAT_ID)]
    pub chat_id: String,

    /// Append the active-resources section to the message
    #[arg(long)]
    pub include_active: bool,

    /// Print the rendered message instead of sending it
    #[arg(long)]
    pub dry_run: bool,
}
