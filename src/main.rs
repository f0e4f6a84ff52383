use contact_manager::prelude::{AppError, run_app};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), AppError> {
    // Logs go to stderr; stdout carries the contact listing.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    run_app()
}
