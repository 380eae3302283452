//! Locate command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::utils::{start_dir, with_hint};
use pt::config::{find_upward, ConfigError, CONFIG_FILE_NAME};

#[derive(Args)]
pub struct LocateArgs {
    /// Directory to start searching from (defaults to the current directory)
    #[arg(short, long, value_name = "DIR")]
    pub dir: Option<PathBuf>,
}

pub fn run(args: LocateArgs) -> Result<()> {
    let start = start_dir(args.dir)?;
    match find_upward(&start, CONFIG_FILE_NAME) {
        Some(path) => {
            println!("{}", path.display());
            Ok(())
        }
        None => Err(with_hint(ConfigError::NotFound {
            file_name: CONFIG_FILE_NAME.to_string(),
            start,
        })),
    }
}
