use std::process::ExitCode;

use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use winner::config;

fn main() -> ExitCode {
    // Diagnostics go to stderr; stdout is reserved for the result line
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "winner=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let base_dir = config::base_dir();
    debug!(?args, base_dir = %base_dir.display(), "Starting scoring run");

    match winner::execute(&args, &base_dir, std::io::stdout().lock()) {
        Ok(winners) => {
            info!(%winners, "Run complete");
            ExitCode::SUCCESS
        }
        Err(error) => {
            info!(%error, "Run failed");
            ExitCode::FAILURE
        }
    }
}
