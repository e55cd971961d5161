use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::{json, Value};

use costwatch::aws::month_to_date_report;
use costwatch::config::Settings;
use costwatch::telegram::TelegramNotifier;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // disabling time is handy because CloudWatch will add the ingestion time.
        .without_time()
        .init();

    run(service_fn(handler)).await
}

/// Scheduled-invocation handler: the event payload is ignored, all
/// configuration comes from the environment.
async fn handler(_event: LambdaEvent<Value>) -> Result<Value, Error> {
    let settings = Settings::from_env()?;

    let report = month_to_date_report(&settings.aws).await?;
    let message = TelegramNotifier::render_message(&report, false);

    let notifier = TelegramNotifier::new(settings.telegram)?;
    notifier.send(&message).await?;

    Ok(json!({ "statusCode": 200 }))
}
