use anyhow::Result;
use async_trait::async_trait;
use aws_config::SdkConfig;

use crate::aws_services::{Ec2Service, EcsService, ElbService, RdsService};
use crate::credentials::SessionCredentials;
use crate::queries::ResourceQueries;

/// Live query backend against the AWS APIs.
///
/// Holds the SDK config built once from the invocation's credentials;
/// services are created lazily per call rather than pre-instantiated.
pub struct AwsResourceClient {
    config: SdkConfig,
}

impl AwsResourceClient {
    pub async fn new(credentials: &SessionCredentials) -> Self {
        Self {
            config: credentials.create_sdk_config().await,
        }
    }

    fn ec2(&self) -> Ec2Service {
        Ec2Service::new(&self.config)
    }

    fn rds(&self) -> RdsService {
        RdsService::new(&self.config)
    }

    fn ecs(&self) -> EcsService {
        EcsService::new(&self.config)
    }

    fn elb(&self) -> ElbService {
        ElbService::new(&self.config)
    }
}

#[async_trait]
impl ResourceQueries for AwsResourceClient {
    async fn list_vpcs(&self) -> Result<Vec<serde_json::Value>> {
        self.ec2().list_vpcs().await
    }

    async fn list_subnets(&self) -> Result<Vec<serde_json::Value>> {
        self.ec2().list_subnets().await
    }

    async fn list_security_groups(&self) -> Result<Vec<serde_json::Value>> {
        self.ec2().list_security_groups().await
    }

    async fn list_route_tables(&self) -> Result<Vec<serde_json::Value>> {
        self.ec2().list_route_tables().await
    }

    async fn list_network_acls(&self) -> Result<Vec<serde_json::Value>> {
        self.ec2().list_network_acls().await
    }

    async fn list_network_interfaces(&self) -> Result<Vec<serde_json::Value>> {
        self.ec2().list_network_interfaces().await
    }

    async fn list_instances(&self) -> Result<Vec<serde_json::Value>> {
        self.ec2().list_instances().await
    }

    async fn list_db_instances(&self) -> Result<Vec<serde_json::Value>> {
        self.rds().list_db_instances().await
    }

    async fn list_load_balancers(&self) -> Result<Vec<serde_json::Value>> {
        self.elb().list_load_balancers().await
    }

    async fn list_clusters(&self) -> Result<Vec<String>> {
        self.ecs().list_clusters().await
    }

    async fn list_tasks(&self, cluster: &str) -> Result<Vec<String>> {
        self.ecs().list_tasks(cluster).await
    }

    async fn describe_tasks(
        &self,
        cluster: &str,
        task_arns: &[String],
    ) -> Result<Vec<serde_json::Value>> {
        self.ecs().describe_tasks(cluster, task_arns).await
    }
}
