mod encrypt;
pub mod run;

use std::process::ExitCode;

use crate::cli::{Cli, Commands};
use crate::error::Result;

pub async fn dispatch(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Some(Commands::EncryptCredentials(args)) => {
            encrypt::execute(&args)?;
            Ok(ExitCode::SUCCESS)
        }
        None => run::execute(&cli.run).await,
    }
}
