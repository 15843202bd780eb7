use std::str::FromStr;
use std::sync::Arc;

use anyhow::anyhow;
use async_trait::async_trait;
use tracing::info;

use crate::aggregator::fetch_snapshot;
use crate::aws_client::AwsResourceClient;
use crate::credentials::SessionCredentials;
use crate::fixtures;
use crate::queries::ResourceQueries;
use crate::snapshot::FetchOutcome;

/// Where snapshot data comes from. Selected once at startup from
/// explicit configuration; anything but the two recognized values is a
/// configuration error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    Live,
    Stubbed,
}

impl FromStr for FetchMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "live" => Ok(FetchMode::Live),
            "stubbed" => Ok(FetchMode::Stubbed),
            other => Err(anyhow!(
                "Unrecognized fetch mode `{}` (expected `live` or `stubbed`)",
                other
            )),
        }
    }
}

/// One snapshot-producing strategy. Both variants expose the same
/// contract; the caller never learns which one it is holding.
#[async_trait]
pub trait FetchStrategy: Send + Sync {
    async fn execute(&self) -> FetchOutcome;
}

/// Queries the AWS APIs with the supplied credentials.
struct LiveFetch {
    credentials: SessionCredentials,
}

#[async_trait]
impl FetchStrategy for LiveFetch {
    async fn execute(&self) -> FetchOutcome {
        let client: Arc<dyn ResourceQueries> =
            Arc::new(AwsResourceClient::new(&self.credentials).await);
        fetch_snapshot(client).await
    }
}

/// Returns canned fixture data; ignores credentials, touches no network.
struct StubbedFetch;

#[async_trait]
impl FetchStrategy for StubbedFetch {
    async fn execute(&self) -> FetchOutcome {
        FetchOutcome::Success(fixtures::stub_snapshot())
    }
}

pub fn select_strategy(
    mode: FetchMode,
    credentials: SessionCredentials,
) -> Box<dyn FetchStrategy> {
    info!("Selected fetch strategy: {:?}", mode);
    match mode {
        FetchMode::Live => Box::new(LiveFetch { credentials }),
        FetchMode::Stubbed => Box::new(StubbedFetch),
    }
}
