use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "roombook")]
#[command(about = "Book university study rooms through the reservation portal")]
#[command(version)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(flatten)]
    pub run: RunArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Credentials file (plaintext JSON, or the encrypted blob with --encrypted)
    #[arg(long, value_name = "FILE", default_value = "credentials.json")]
    pub credentials: PathBuf,

    /// Reservation schedule file
    #[arg(long, value_name = "FILE", default_value = "reservationTime.json")]
    pub schedule: PathBuf,

    /// Treat the credentials file as encrypted at rest
    #[arg(long)]
    pub encrypted: bool,

    /// File holding the master key (otherwise read from ROOMBOOK_KEY)
    #[arg(long, value_name = "FILE")]
    pub key_file: Option<PathBuf>,

    /// Base URL of the reservation portal
    #[arg(
        long,
        value_name = "URL",
        default_value = "https://banner9.icesi.edu.co/ic_reservas"
    )]
    pub portal_url: String,

    /// WebDriver endpoint (a running chromedriver)
    #[arg(long, value_name = "URL", default_value = "http://localhost:9515")]
    pub webdriver_url: String,

    /// Show the browser window instead of running headless
    #[arg(long)]
    pub headed: bool,

    /// How long to wait for a page element before giving up (ms)
    #[arg(long, value_name = "MS", default_value = "10000")]
    pub timeout_ms: u64,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encrypt a plaintext credentials file for at-rest storage
    #[command(alias = "enc")]
    EncryptCredentials(EncryptArgs),
}

#[derive(Args, Debug)]
pub struct EncryptArgs {
    /// Plaintext credentials JSON to encrypt
    #[arg(short, long, value_name = "FILE", default_value = "credentials.json")]
    pub input: PathBuf,

    /// Where to write the encrypted blob
    #[arg(short, long, value_name = "FILE", default_value = "credentials.enc")]
    pub output: PathBuf,

    /// File holding the master key (otherwise read from ROOMBOOK_KEY)
    #[arg(long, value_name = "FILE")]
    pub key_file: Option<PathBuf>,
}
