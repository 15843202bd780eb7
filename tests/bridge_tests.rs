use pretty_assertions::assert_eq;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;

use awstopo::{
    fixtures, run_fetch, FetchMode, FetchOutcome, SessionCredentials, TopologyBridge,
    TopologySnapshot,
};

fn bridge_with_channels() -> (
    TopologyBridge,
    mpsc::Receiver<TopologySnapshot>,
    mpsc::Receiver<String>,
) {
    let (snapshot_tx, snapshot_rx) = mpsc::channel(1);
    let (failure_tx, failure_rx) = mpsc::channel(1);
    (
        TopologyBridge::new(snapshot_tx, failure_tx),
        snapshot_rx,
        failure_rx,
    )
}

#[tokio::test]
async fn test_success_reaches_only_the_snapshot_channel() {
    let (bridge, mut snapshot_rx, mut failure_rx) = bridge_with_channels();

    let snapshot = fixtures::stub_snapshot();
    bridge
        .publish(FetchOutcome::Success(snapshot.clone()))
        .await
        .unwrap();

    assert_eq!(snapshot_rx.recv().await.unwrap(), snapshot);
    assert!(matches!(failure_rx.try_recv(), Err(TryRecvError::Empty)));
}

#[tokio::test]
async fn test_failure_reaches_only_the_failure_channel() {
    let (bridge, mut snapshot_rx, mut failure_rx) = bridge_with_channels();

    bridge
        .publish(FetchOutcome::Failure("credentials rejected".to_string()))
        .await
        .unwrap();

    assert_eq!(failure_rx.recv().await.unwrap(), "credentials rejected");
    assert!(matches!(snapshot_rx.try_recv(), Err(TryRecvError::Empty)));
}

#[tokio::test]
async fn test_disconnected_snapshot_consumer_is_an_error() {
    let (bridge, snapshot_rx, _failure_rx) = bridge_with_channels();
    drop(snapshot_rx);

    let result = bridge
        .publish(FetchOutcome::Success(TopologySnapshot::default()))
        .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_run_fetch_stubbed_publishes_the_fixture_snapshot() {
    let (bridge, mut snapshot_rx, mut failure_rx) = bridge_with_channels();

    run_fetch(FetchMode::Stubbed, SessionCredentials::default(), &bridge)
        .await
        .unwrap();

    assert_eq!(snapshot_rx.recv().await.unwrap(), fixtures::stub_snapshot());
    assert!(matches!(failure_rx.try_recv(), Err(TryRecvError::Empty)));
}
