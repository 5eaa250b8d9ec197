mod api;
mod core;
#[cfg(test)]
mod test_support;
mod tui;

use clap::Parser;
use lounge::Environment;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "lounge", about = "Terminal client for the Lounge gaming platform")]
struct Args {
    /// Platform environment to talk to
    #[arg(short, long, default_value_t, value_enum)]
    environment: Environment,

    /// Route to open at startup (e.g. /games)
    #[arg(short, long)]
    route: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to lounge.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("lounge.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Lounge starting up ({:?})", args.environment);

    let config = core::config::load_config().map_err(|e| {
        eprintln!("lounge: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
    })?;

    let mut resolved = core::config::resolve(&config, args.route.as_deref());
    if matches!(args.environment, Environment::Staging) {
        resolved.base_url = core::config::DEFAULT_STAGING_BASE_URL.to_string();
    }

    tui::run(resolved)
}
