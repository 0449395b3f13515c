use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "Serve a 2048 game over HTTP/JSON")]
pub struct Args {
    /// Optional TOML configuration (seed, best-score database, swipe threshold).
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Optional path to the UI dist directory to serve static files.
    #[arg(long)]
    pub ui_path: Option<PathBuf>,
    /// Host interface to bind (default 0.0.0.0).
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,
    /// Port to bind (default 8080).
    #[arg(long, default_value_t = 8080)]
    pub port: u16,
    /// Optional tracing filter, e.g. "info", "debug".
    #[arg(long, default_value = "info")]
    pub log: String,
}
