use anyhow::Result;

use crate::aws::month_to_date_report;
use crate::cli::NotifyArgs;
use crate::telegram::{TelegramNotifier, TelegramSettings};

/// Run the notify command: fetch the report and deliver it to Telegram
pub async fn run(args: NotifyArgs) -> Result<()> {
    let settings = args.aws.into_settings();
    let report = month_to_date_report(&settings).await?;
    let message = TelegramNotifier::render_message(&report, args.include_active);

    if args.dry_run {
        print!("{message}");
        return Ok(());
    }

    let telegram = TelegramSettings::new(args.api_token, args.chat_id);
    let notifier = TelegramNotifier::new(telegram)?;
    notifier.send(&message).await?;

    Ok(())
}
