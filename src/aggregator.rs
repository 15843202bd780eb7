use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::discovery::discover_tasks;
use crate::queries::ResourceQueries;
use crate::snapshot::{FetchOutcome, TopologySnapshot};

/// Run one aggregation: fan out every resource family query plus the ECS
/// task discovery, wait for all of them, and produce either the fully
/// populated snapshot or a single consolidated failure.
///
/// All ten branches are spawned before any is awaited. The policy is
/// all-or-nothing: the first branch error settles the outcome as Failure
/// and the remaining in-flight branches run to completion with their
/// results discarded.
pub async fn fetch_snapshot(queries: Arc<dyn ResourceQueries>) -> FetchOutcome {
    match fetch_all(queries).await {
        Ok(snapshot) => {
            info!(
                "Topology snapshot complete: {} resources",
                snapshot.resource_count()
            );
            FetchOutcome::Success(snapshot)
        }
        Err(e) => {
            error!("Topology fetch failed: {:#}", e);
            FetchOutcome::Failure(format!("{:#}", e))
        }
    }
}

async fn fetch_all(queries: Arc<dyn ResourceQueries>) -> Result<TopologySnapshot> {
    info!("Starting topology queries");

    let vpcs = spawn_branch(&queries, |q| async move { q.list_vpcs().await });
    let subnets = spawn_branch(&queries, |q| async move { q.list_subnets().await });
    let security_groups =
        spawn_branch(&queries, |q| async move { q.list_security_groups().await });
    let route_tables = spawn_branch(&queries, |q| async move { q.list_route_tables().await });
    let network_acls = spawn_branch(&queries, |q| async move { q.list_network_acls().await });
    let network_interfaces =
        spawn_branch(&queries, |q| async move { q.list_network_interfaces().await });
    let instances = spawn_branch(&queries, |q| async move { q.list_instances().await });
    let db_instances = spawn_branch(&queries, |q| async move { q.list_db_instances().await });
    let load_balancers =
        spawn_branch(&queries, |q| async move { q.list_load_balancers().await });
    let ecs_tasks = spawn_branch(&queries, |q| async move { discover_tasks(q.as_ref()).await });

    let (
        vpcs,
        subnets,
        security_groups,
        route_tables,
        network_acls,
        network_interfaces,
        instances,
        db_instances,
        load_balancers,
        ecs_tasks,
    ) = tokio::try_join!(
        join_branch(vpcs),
        join_branch(subnets),
        join_branch(security_groups),
        join_branch(route_tables),
        join_branch(network_acls),
        join_branch(network_interfaces),
        join_branch(instances),
        join_branch(db_instances),
        join_branch(load_balancers),
        join_branch(ecs_tasks),
    )?;

    Ok(TopologySnapshot {
        vpcs,
        subnets,
        security_groups,
        route_tables,
        network_acls,
        network_interfaces,
        instances,
        db_instances,
        load_balancers,
        ecs_tasks,
    })
}

/// Spawn one query branch as an independent task so a failing sibling
/// does not cancel it.
fn spawn_branch<F, Fut>(
    queries: &Arc<dyn ResourceQueries>,
    query: F,
) -> JoinHandle<Result<Vec<serde_json::Value>>>
where
    F: FnOnce(Arc<dyn ResourceQueries>) -> Fut + Send + 'static,
    Fut: std::future::Future<Output = Result<Vec<serde_json::Value>>> + Send + 'static,
{
    let queries = Arc::clone(queries);
    tokio::spawn(async move { query(queries).await })
}

async fn join_branch(
    handle: JoinHandle<Result<Vec<serde_json::Value>>>,
) -> Result<Vec<serde_json::Value>> {
    handle.await.context("Resource query task aborted")?
}
