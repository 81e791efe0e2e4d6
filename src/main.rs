use clap::Parser;
use roombook::{cli::Cli, commands, logging};
use std::process::ExitCode;
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match commands::dispatch(cli).await {
        Ok(code) => code,
        Err(err) => {
            error!(target = "roombook", error = %err, "run failed");
            ExitCode::FAILURE
        }
    }
}
