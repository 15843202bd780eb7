use anyhow::Result;
use async_trait::async_trait;

/// Contract every resource-query backend satisfies.
///
/// Nine independent family listings plus the three ECS discovery stages.
/// Each listing returns the family's normalized items in provider order.
/// The orchestrator and the task discovery resolver depend only on this
/// trait, so the live AWS backend and test doubles are interchangeable.
#[async_trait]
pub trait ResourceQueries: Send + Sync {
    async fn list_vpcs(&self) -> Result<Vec<serde_json::Value>>;
    async fn list_subnets(&self) -> Result<Vec<serde_json::Value>>;
    async fn list_security_groups(&self) -> Result<Vec<serde_json::Value>>;
    async fn list_route_tables(&self) -> Result<Vec<serde_json::Value>>;
    async fn list_network_acls(&self) -> Result<Vec<serde_json::Value>>;
    async fn list_network_interfaces(&self) -> Result<Vec<serde_json::Value>>;
    async fn list_instances(&self) -> Result<Vec<serde_json::Value>>;
    async fn list_db_instances(&self) -> Result<Vec<serde_json::Value>>;
    async fn list_load_balancers(&self) -> Result<Vec<serde_json::Value>>;

    /// List ECS cluster ARNs (discovery stage 1).
    async fn list_clusters(&self) -> Result<Vec<String>>;

    /// List task ARNs running in one cluster (discovery stage 2).
    async fn list_tasks(&self, cluster: &str) -> Result<Vec<String>>;

    /// Describe tasks scoped to one cluster (discovery stage 3).
    /// Callers must not pass an empty `task_arns`; the provider API
    /// rejects empty identifier lists.
    async fn describe_tasks(
        &self,
        cluster: &str,
        task_arns: &[String],
    ) -> Result<Vec<serde_json::Value>>;
}
