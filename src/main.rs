use clap::Parser;

use costwatch::cli::{commands, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Report(args) => commands::report::run(args).await,
        Command::Notify(args) => commands::notify::run(args).await,
    }
}
