//! Shared test double for the resource-query backend.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde_json::json;

use awstopo::ResourceQueries;

/// Recording `ResourceQueries` implementation with canned responses,
/// injectable per-branch delays and injectable per-branch failures.
pub struct MockQueries {
    clusters: Vec<String>,
    tasks_by_cluster: HashMap<String, Vec<String>>,
    delays: HashMap<&'static str, Duration>,
    failures: HashMap<&'static str, String>,
    /// Every describe_tasks invocation: (cluster, task ARNs requested).
    pub describe_calls: Mutex<Vec<(String, Vec<String>)>>,
    /// Total queries issued across all branches.
    pub query_count: AtomicUsize,
}

impl Default for MockQueries {
    fn default() -> Self {
        Self::new()
    }
}

impl MockQueries {
    /// One cluster with one running task, plus one canned item per
    /// resource family.
    pub fn new() -> Self {
        let mut tasks_by_cluster = HashMap::new();
        tasks_by_cluster.insert("cluster-alpha".to_string(), vec!["task-1".to_string()]);

        Self {
            clusters: vec!["cluster-alpha".to_string()],
            tasks_by_cluster,
            delays: HashMap::new(),
            failures: HashMap::new(),
            describe_calls: Mutex::new(Vec::new()),
            query_count: AtomicUsize::new(0),
        }
    }

    /// Replace the cluster/task layout.
    pub fn with_clusters(mut self, layout: Vec<(&str, Vec<&str>)>) -> Self {
        self.clusters = layout.iter().map(|(name, _)| name.to_string()).collect();
        self.tasks_by_cluster = layout
            .into_iter()
            .map(|(name, tasks)| {
                (
                    name.to_string(),
                    tasks.into_iter().map(String::from).collect(),
                )
            })
            .collect();
        self
    }

    /// Make one branch fail with the given message.
    pub fn failing(mut self, branch: &'static str, message: &str) -> Self {
        self.failures.insert(branch, message.to_string());
        self
    }

    /// Delay one branch's response.
    pub fn delayed(mut self, branch: &'static str, delay: Duration) -> Self {
        self.delays.insert(branch, delay);
        self
    }

    async fn gate(&self, branch: &'static str) -> Result<()> {
        self.query_count.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delays.get(branch) {
            tokio::time::sleep(*delay).await;
        }

        if let Some(message) = self.failures.get(branch) {
            return Err(anyhow!("{}", message));
        }

        Ok(())
    }
}

#[async_trait]
impl ResourceQueries for MockQueries {
    async fn list_vpcs(&self) -> Result<Vec<serde_json::Value>> {
        self.gate("vpcs").await?;
        Ok(vec![json!({"VpcId": "vpc-1", "CidrBlock": "10.0.0.0/16"})])
    }

    async fn list_subnets(&self) -> Result<Vec<serde_json::Value>> {
        self.gate("subnets").await?;
        Ok(vec![json!({"SubnetId": "subnet-1", "VpcId": "vpc-1"})])
    }

    async fn list_security_groups(&self) -> Result<Vec<serde_json::Value>> {
        self.gate("security_groups").await?;
        Ok(vec![json!({"GroupId": "sg-1", "VpcId": "vpc-1"})])
    }

    async fn list_route_tables(&self) -> Result<Vec<serde_json::Value>> {
        self.gate("route_tables").await?;
        Ok(vec![json!({"RouteTableId": "rtb-1", "VpcId": "vpc-1"})])
    }

    async fn list_network_acls(&self) -> Result<Vec<serde_json::Value>> {
        self.gate("network_acls").await?;
        Ok(vec![json!({"NetworkAclId": "acl-1", "VpcId": "vpc-1"})])
    }

    async fn list_network_interfaces(&self) -> Result<Vec<serde_json::Value>> {
        self.gate("network_interfaces").await?;
        Ok(vec![json!({"NetworkInterfaceId": "eni-1", "SubnetId": "subnet-1"})])
    }

    async fn list_instances(&self) -> Result<Vec<serde_json::Value>> {
        self.gate("instances").await?;
        Ok(vec![json!({"InstanceId": "i-1", "SubnetId": "subnet-1"})])
    }

    async fn list_db_instances(&self) -> Result<Vec<serde_json::Value>> {
        self.gate("db_instances").await?;
        Ok(vec![json!({"DBInstanceIdentifier": "db-1", "VpcId": "vpc-1"})])
    }

    async fn list_load_balancers(&self) -> Result<Vec<serde_json::Value>> {
        self.gate("load_balancers").await?;
        Ok(vec![json!({"LoadBalancerName": "lb-1", "VpcId": "vpc-1"})])
    }

    async fn list_clusters(&self) -> Result<Vec<String>> {
        self.gate("clusters").await?;
        Ok(self.clusters.clone())
    }

    async fn list_tasks(&self, cluster: &str) -> Result<Vec<String>> {
        self.gate("tasks").await?;
        Ok(self
            .tasks_by_cluster
            .get(cluster)
            .cloned()
            .unwrap_or_default())
    }

    async fn describe_tasks(
        &self,
        cluster: &str,
        task_arns: &[String],
    ) -> Result<Vec<serde_json::Value>> {
        self.describe_calls
            .lock()
            .unwrap()
            .push((cluster.to_string(), task_arns.to_vec()));

        self.gate("describe_tasks").await?;

        Ok(task_arns
            .iter()
            .map(|arn| json!({"TaskArn": arn, "ClusterArn": cluster}))
            .collect())
    }
}

/// Every branch name the aggregation fans out over, including the three
/// nested discovery stages.
pub const ALL_BRANCHES: &[&str] = &[
    "vpcs",
    "subnets",
    "security_groups",
    "route_tables",
    "network_acls",
    "network_interfaces",
    "instances",
    "db_instances",
    "load_balancers",
    "clusters",
    "tasks",
    "describe_tasks",
];
