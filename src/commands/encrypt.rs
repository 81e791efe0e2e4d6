//! Seal a plaintext credentials file for at-rest storage.

use tracing::info;

use crate::cli::EncryptArgs;
use crate::config::credentials::{self, Credentials};
use crate::config::MasterKey;
use crate::error::Result;

pub fn execute(args: &EncryptArgs) -> Result<()> {
    let key = MasterKey::resolve(args.key_file.as_deref())?;
    let loaded = Credentials::load(&args.input)?;
    credentials::encrypt_to_file(&loaded, &args.output, &key)?;

    info!(target = "roombook", output = %args.output.display(), "credentials encrypted");
    println!(
        "Encrypted credentials written to {}. You can now delete {} and run with --encrypted.",
        args.output.display(),
        args.input.display()
    );
    Ok(())
}
