use clap::Parser;
use std::path::PathBuf;

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:4221";

/// Command line surface of the server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Base directory for files served and created under /files/
    #[arg(long)]
    pub directory: Option<PathBuf>,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub listen_addr: String,
    pub directory: Option<PathBuf>,
}

impl Config {
    pub fn from_args() -> Self {
        Args::parse().into()
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            directory: args.directory,
        }
    }
}
