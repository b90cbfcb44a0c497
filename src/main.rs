use clap::Parser;
use leak_detector::errors::ErrorHandler;
use leak_detector::structs::cli::Cli;
use leak_detector::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut runner = CommandRunner::new(cli.token);

    if let Err(e) = runner.run_command(cli.command).await {
        ErrorHandler::handle_error(&e);
        std::process::exit(ErrorHandler::exit_code(&e));
    }

    Ok(())
}
