//! Atrium Shell - Main Entry Point

use atrium_shell::app::application::run_app;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Atrium...");

    run_app();
}
