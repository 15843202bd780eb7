use anyhow::{Context, Result};
use aws_config::SdkConfig;
use aws_sdk_ecs as ecs;

/// Container orchestration queries.
///
/// Exposes the three discovery stages separately (cluster listing, task
/// listing per cluster, task describe per cluster); the resolver in
/// `discovery` owns the chaining between them.
pub struct EcsService {
    client: ecs::Client,
}

impl EcsService {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: ecs::Client::new(config),
        }
    }

    /// List ECS cluster ARNs
    pub async fn list_clusters(&self) -> Result<Vec<String>> {
        let mut clusters = Vec::new();
        let mut paginator = self.client.list_clusters().into_paginator().send();

        while let Some(page) = paginator.next().await {
            let page = page.context("Failed to list ECS clusters")?;
            if let Some(cluster_arns) = page.cluster_arns {
                clusters.extend(cluster_arns);
            }
        }

        Ok(clusters)
    }

    /// List task ARNs running in one cluster
    pub async fn list_tasks(&self, cluster: &str) -> Result<Vec<String>> {
        let mut tasks = Vec::new();
        let mut paginator = self
            .client
            .list_tasks()
            .cluster(cluster)
            .into_paginator()
            .send();

        while let Some(page) = paginator.next().await {
            let page =
                page.with_context(|| format!("Failed to list tasks in cluster {}", cluster))?;
            if let Some(task_arns) = page.task_arns {
                tasks.extend(task_arns);
            }
        }

        Ok(tasks)
    }

    /// Describe tasks scoped to one cluster.
    /// `task_arns` must be non-empty; the API rejects an empty task list.
    pub async fn describe_tasks(
        &self,
        cluster: &str,
        task_arns: &[String],
    ) -> Result<Vec<serde_json::Value>> {
        let response = self
            .client
            .describe_tasks()
            .cluster(cluster)
            .set_tasks(Some(task_arns.to_vec()))
            .send()
            .await
            .with_context(|| format!("Failed to describe tasks in cluster {}", cluster))?;

        let mut tasks = Vec::new();
        if let Some(task_list) = response.tasks {
            for task in task_list {
                tasks.push(self.task_to_json(&task));
            }
        }

        Ok(tasks)
    }

    fn task_to_json(&self, task: &ecs::types::Task) -> serde_json::Value {
        let mut json = serde_json::Map::new();

        if let Some(task_arn) = &task.task_arn {
            json.insert(
                "TaskArn".to_string(),
                serde_json::Value::String(task_arn.clone()),
            );
            // Task ID out of the ARN for display
            let task_id = task_arn.split('/').next_back().unwrap_or(task_arn);
            json.insert(
                "Name".to_string(),
                serde_json::Value::String(task_id.to_string()),
            );
        }

        if let Some(cluster_arn) = &task.cluster_arn {
            json.insert(
                "ClusterArn".to_string(),
                serde_json::Value::String(cluster_arn.clone()),
            );
        }

        if let Some(task_definition_arn) = &task.task_definition_arn {
            json.insert(
                "TaskDefinitionArn".to_string(),
                serde_json::Value::String(task_definition_arn.clone()),
            );
        }

        if let Some(last_status) = &task.last_status {
            json.insert(
                "LastStatus".to_string(),
                serde_json::Value::String(last_status.clone()),
            );
        }

        if let Some(desired_status) = &task.desired_status {
            json.insert(
                "DesiredStatus".to_string(),
                serde_json::Value::String(desired_status.clone()),
            );
        }

        if let Some(launch_type) = &task.launch_type {
            json.insert(
                "LaunchType".to_string(),
                serde_json::Value::String(launch_type.as_str().to_string()),
            );
        }

        if let Some(availability_zone) = &task.availability_zone {
            json.insert(
                "AvailabilityZone".to_string(),
                serde_json::Value::String(availability_zone.clone()),
            );
        }

        if let Some(cpu) = &task.cpu {
            json.insert("Cpu".to_string(), serde_json::Value::String(cpu.clone()));
        }

        if let Some(memory) = &task.memory {
            json.insert(
                "Memory".to_string(),
                serde_json::Value::String(memory.clone()),
            );
        }

        serde_json::Value::Object(json)
    }
}
