use std::process::ExitCode;
use clap::Parser;
use issue_analyzer::structs::cli::Cli;
use issue_analyzer::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    CommandRunner::new().run_command(cli.command).await?;
    Ok(())
}
