//! Wiring & DI. Entry point: load config, build the pipeline, run one request.
//! No business logic here; the decision flow lives in EventPipeline.

use dotenv::dotenv;
use event_assist::adapters::ui::{ConsoleRunner, input_from_args};
use event_assist::ports::EventRequestPort;
use event_assist::shared::{AppConfig, build_pipeline};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    // Logs go to stderr; stdout carries only the confirmation text.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let cfg = AppConfig::load().map_err(|e| anyhow::anyhow!("config: {}", e))?;

    // Fails before any request is made when the credential is missing.
    let pipeline = build_pipeline(&cfg).map_err(|e| anyhow::anyhow!("{}", e))?;
    let port: Arc<dyn EventRequestPort> = Arc::new(pipeline);
    let runner = ConsoleRunner::new(port);

    let user_input = input_from_args(std::env::args().skip(1));
    let output = runner
        .run(&user_input)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;
    println!("{}", output);

    Ok(())
}
