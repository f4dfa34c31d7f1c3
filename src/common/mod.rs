pub mod config;
pub mod errors;
pub mod event;
pub mod utils;

/// Installs the fmt subscriber shared by every binary.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_ansi(false)
        .without_time() // CloudWatch will add the ingestion time
        .with_target(false)
        .init();
}
