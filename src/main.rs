#![warn(clippy::all, rust_2018_idioms)]

use anyhow::{anyhow, Context, Result};
use tokio::sync::mpsc;
use tracing_subscriber::prelude::*;

use awstopo::{run_fetch, FetchMode, SessionCredentials, TopologyBridge};

/// Region queried when none is configured.
const DEFAULT_REGION: &str = "eu-west-1";

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::builder()
            .parse("awstopo=info,aws_config=warn,aws_sigv4=warn,aws_smithy_runtime=warn,aws_smithy_runtime_api=warn,hyper=warn")
            .expect("Failed to parse env filter")
    });

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

fn require_env(name: &str) -> Result<String> {
    std::env::var(name).with_context(|| format!("{} must be set for live mode", name))
}

/// Configuration is read here, once, at the process edge; nothing below
/// this point touches the environment.
fn read_config() -> Result<(FetchMode, SessionCredentials)> {
    let mode: FetchMode = std::env::var("AWSTOPO_MODE")
        .unwrap_or_else(|_| "live".to_string())
        .parse()?;

    let credentials = match mode {
        FetchMode::Live => SessionCredentials {
            access_key_id: require_env("AWS_ACCESS_KEY_ID")?,
            secret_access_key: require_env("AWS_SECRET_ACCESS_KEY")?,
            session_token: std::env::var("AWS_SESSION_TOKEN").ok(),
            region: std::env::var("AWS_REGION").unwrap_or_else(|_| DEFAULT_REGION.to_string()),
        },
        FetchMode::Stubbed => SessionCredentials::default(),
    };

    Ok((mode, credentials))
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let (mode, credentials) = read_config()?;

    let (snapshot_tx, mut snapshot_rx) = mpsc::channel(1);
    let (failure_tx, mut failure_rx) = mpsc::channel::<String>(1);

    // Stand-in rendering consumer: the snapshot goes to stdout as JSON,
    // a failure becomes the process error.
    let consumer = tokio::spawn(async move {
        tokio::select! {
            Some(snapshot) = snapshot_rx.recv() => {
                let rendered = serde_json::to_string_pretty(&snapshot)
                    .context("Failed to serialize snapshot")?;
                println!("{}", rendered);
                Ok(())
            }
            Some(message) = failure_rx.recv() => Err(anyhow!(message)),
            else => Ok(()),
        }
    });

    let bridge = TopologyBridge::new(snapshot_tx, failure_tx);
    run_fetch(mode, credentials, &bridge).await?;
    drop(bridge);

    consumer.await.context("Consumer task aborted")?
}
