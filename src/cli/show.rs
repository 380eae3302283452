//! Show command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::utils::{mask_secret, start_dir, with_hint};
use pt::config::{load, load_file, load_from};

#[derive(Args)]
pub struct ShowArgs {
    /// Directory to start searching from (defaults to the current directory)
    #[arg(short, long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Read this file instead of searching for .pt.yaml
    #[arg(short, long, value_name = "FILE", conflicts_with = "dir")]
    pub config: Option<PathBuf>,

    /// Print the API key in full
    #[arg(long)]
    pub reveal: bool,
}

pub fn run(args: ShowArgs) -> Result<()> {
    let loaded = match (args.config, args.dir) {
        (Some(path), _) => load_file(&path),
        (None, Some(dir)) => load_from(&start_dir(Some(dir))?),
        (None, None) => load(),
    };
    let config = loaded.map_err(with_hint)?;

    let api_key =
        if args.reveal { config.api_key().to_string() } else { mask_secret(config.api_key()) };

    println!("Config: {}", config.source().display());
    println!("  project: {}", config.project());
    println!("  user: {}", config.user());
    println!("  api_key: {}", api_key);

    Ok(())
}
