//! WaHire web entry point
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web,server
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web,server
//! ```

use wahire_web::app::App;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    #[cfg(feature = "server")]
    install_registration_backend()?;

    // Launch the Dioxus app
    // In fullstack mode, this handles both server and client
    dioxus::launch(App);
    Ok(())
}

#[cfg(feature = "server")]
fn install_registration_backend() -> anyhow::Result<()> {
    use anyhow::Context;
    use wahire_web::config::Config;

    let config = Config::from_env().context("Failed to load configuration")?;

    match &config.registration_api_url {
        Some(url) => tracing::info!("Registration backend: {}", url),
        None => tracing::info!(
            "Registration backend: simulated ({} ms delay)",
            config.simulated_delay.as_millis()
        ),
    }

    wahire_web::registration::install_backend(config.backend());
    Ok(())
}
