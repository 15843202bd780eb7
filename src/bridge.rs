use anyhow::{anyhow, Result};
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::credentials::SessionCredentials;
use crate::snapshot::{FetchOutcome, TopologySnapshot};
use crate::strategy::{select_strategy, FetchMode};

/// Outbound boundary to the rendering consumer.
///
/// Snapshots and failure messages travel on separate channels; exactly
/// one of the two carries a message per fetch. No retries, no
/// transformation beyond the dispatch.
pub struct TopologyBridge {
    snapshots: mpsc::Sender<TopologySnapshot>,
    failures: mpsc::Sender<String>,
}

impl TopologyBridge {
    pub fn new(snapshots: mpsc::Sender<TopologySnapshot>, failures: mpsc::Sender<String>) -> Self {
        Self {
            snapshots,
            failures,
        }
    }

    /// Publish one outcome on the matching channel. A disconnected
    /// consumer is an error for the caller, not a silent drop.
    pub async fn publish(&self, outcome: FetchOutcome) -> Result<()> {
        match outcome {
            FetchOutcome::Success(snapshot) => {
                info!(
                    "Publishing snapshot with {} resources",
                    snapshot.resource_count()
                );
                self.snapshots
                    .send(snapshot)
                    .await
                    .map_err(|_| anyhow!("Snapshot consumer disconnected"))
            }
            FetchOutcome::Failure(message) => {
                warn!("Publishing fetch failure: {}", message);
                self.failures
                    .send(message)
                    .await
                    .map_err(|_| anyhow!("Failure consumer disconnected"))
            }
        }
    }
}

/// Inbound boundary: run one fetch with the supplied credentials and
/// publish its outcome.
pub async fn run_fetch(
    mode: FetchMode,
    credentials: SessionCredentials,
    bridge: &TopologyBridge,
) -> Result<()> {
    let strategy = select_strategy(mode, credentials);
    let outcome = strategy.execute().await;
    bridge.publish(outcome).await
}
