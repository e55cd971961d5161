use anyhow::Result;
use colored::Colorize;

use crate::aws::month_to_date_report;
use crate::cli::ReportArgs;

/// Run the report command, printing month-to-date costs to the terminal
pub async fn run(args: ReportArgs) -> Result<()> {
    let settings = args.aws.into_settings();
    let report = month_to_date_report(&settings).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "\n{}",
        format!(
            "  Billed resources {} to {}",
            report.period.start_str(),
            report.period.end_str()
        )
        .bold()
        .bright_yellow()
    );
    println!("{}", "  ─────────────────────────────".dimmed());

    if report.billed.is_empty() {
        println!("\n  {}", "No billed resources this month".dimmed());
    } else {
        println!();
        for entry in &report.billed {
            println!(
                "  {} {}",
                format!("{:>32}", entry.service).cyan(),
                format!("${:.2}", entry.cost_usd).bright_yellow()
            );
        }
        println!(
            "\n  {} {}",
            format!("{:>32}", "Total").bold(),
            format!("${:.2}", report.total_usd()).bright_yellow().bold()
        );
    }

    if !report.active.is_empty() {
        println!("\n  {}", "Active resources:".bold());
        for service in &report.active {
            println!("    {}", service.dimmed());
        }
    }

    println!();
    Ok(())
}
