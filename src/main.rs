//! Recipe Book
//!
//! Browse, create, edit and rate recipes stored behind a REST API.
//!
//! This is the entry point for both the web and the desktop build.

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() {
    // Initialize logging; the web launcher installs its own logger
    #[cfg(not(target_arch = "wasm32"))]
    {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_target(false)
            .finish();
        if tracing::subscriber::set_global_default(subscriber).is_err() {
            eprintln!("A global tracing subscriber is already installed");
        }
    }

    tracing::info!("{} v{}", recipe_ui::NAME, recipe_ui::VERSION);

    recipe_ui::launch();
}
