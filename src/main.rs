//! # Formline Main Entry Point
//!
//! Terminal form for posting JSON to a classification endpoint.

use anyhow::Result;
use formline::cmd_args::CommandLineArgs;
use formline::AppController;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cmd_args = CommandLineArgs::parse();

    // Logs go to stderr so they never fight the form for the screen
    let default_filter = if cmd_args.verbose() {
        "formline=debug"
    } else {
        "formline=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting formline");

    let mut app = AppController::new(cmd_args)?;
    app.run().await?;

    Ok(())
}
