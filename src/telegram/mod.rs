use crate::error::Error;
use crate::report::CostReport;

const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Delivery target for the cost report, passed to the notifier at
/// construction.
///
/// `api_base` defaults to the Bot API host; tests point it at a local mock
/// server.
#[derive(Debug, Clone)]
pub struct TelegramSettings {
    pub api_token: String,
    pub chat_id: String,
    pub api_base: String,
}

impl TelegramSettings {
    pub fn new(api_token: String, chat_id: String) -> Self {
        TelegramSettings {
            api_token,
            chat_id,
            api_base: TELEGRAM_API_BASE.to_string(),
        }
    }
}

/// Sends a rendered cost report to a Telegram chat via the Bot API.
pub struct TelegramNotifier {
    http: reqwest::Client,
    settings: TelegramSettings,
}

impl TelegramNotifier {
    pub fn new(settings: TelegramSettings) -> Result<Self, Error> {
        let http = reqwest::Client::builder().build()?;
        Ok(TelegramNotifier { http, settings })
    }

    /// Render the report into the message body sent to the chat.
    ///
    /// One line per billed service, costs with exactly two decimal places,
    /// in billed (API response) order. The active-resources section lists
    /// every service seen in the period, zero-cost ones included.
    pub fn render_message(report: &CostReport, include_active: bool) -> String {
        let mut message = String::from("Current Billed Resources of this month:\n\n");
        for entry in &report.billed {
            message.push_str(&format!("{}: ${:.2}\n", entry.service, entry.cost_usd));
        }

        if include_active {
            message.push_str("\nActive Resources:\n");
            for service in &report.active {
                message.push_str(service);
                message.push('\n');
            }
        }

        message
    }

    /// Deliver `text` to the configured chat.
    ///
    /// Transport failures propagate as `Error::Delivery`. A response with a
    /// non-success status is logged and swallowed; the run still counts as
    /// complete. This mirrors the upstream delivery contract: the report
    /// was produced, only the notification was lost.
    pub async fn send(&self, text: &str) -> Result<(), Error> {
        let url = format!(
            "{}/bot{}/sendMessage",
            self.settings.api_base, self.settings.api_token
        );
        let response = self
            .http
            .get(&url)
            .query(&[
                ("chat_id", self.settings.chat_id.as_str()),
                ("text", text),
                ("parse_mode", "Markdown"),
            ])
            .send()
            .await?;

        if response.status().is_success() {
            eprintln!("[costwatch] message delivered to Telegram");
        } else {
            eprintln!(
                "[costwatch] failed to deliver Telegram message: HTTP {}",
                response.status()
            );
        }

        Ok(())
    }
}
