use anyhow::{Context, Result};
use futures::future::try_join_all;
use tracing::debug;

use crate::queries::ResourceQueries;

/// Task ARNs listed for one cluster. Stage-2 output, stage-3 input;
/// never leaves this module.
struct TaskReference {
    cluster: String,
    task_arns: Vec<String>,
}

/// Resolve all running ECS tasks for the account.
///
/// Three dependent stages: one cluster listing, then a concurrent task
/// listing per cluster, then a concurrent describe per cluster scoped to
/// exactly that cluster's task ARNs. A cluster with no running tasks
/// contributes nothing and triggers no describe call (the API rejects an
/// empty task list). Any stage failure fails the whole discovery.
pub async fn discover_tasks(queries: &dyn ResourceQueries) -> Result<Vec<serde_json::Value>> {
    let clusters = queries
        .list_clusters()
        .await
        .context("Failed to list ECS clusters")?;
    debug!("Discovered {} ECS clusters", clusters.len());

    let references: Vec<TaskReference> =
        try_join_all(clusters.into_iter().map(|cluster| async move {
            let task_arns = queries
                .list_tasks(&cluster)
                .await
                .with_context(|| format!("Failed to list tasks in cluster {}", cluster))?;
            Ok::<_, anyhow::Error>(TaskReference { cluster, task_arns })
        }))
        .await?;

    let described = try_join_all(references.iter().map(|reference| async move {
        if reference.task_arns.is_empty() {
            debug!("Cluster {} has no running tasks", reference.cluster);
            return Ok(Vec::new());
        }

        queries
            .describe_tasks(&reference.cluster, &reference.task_arns)
            .await
            .with_context(|| format!("Failed to describe tasks in cluster {}", reference.cluster))
    }))
    .await?;

    Ok(described.into_iter().flatten().collect())
}
