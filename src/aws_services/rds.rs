use anyhow::{Context, Result};
use aws_config::SdkConfig;
use aws_sdk_rds as rds;

/// Relational database queries.
pub struct RdsService {
    client: rds::Client,
}

impl RdsService {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: rds::Client::new(config),
        }
    }

    /// List RDS DB instances
    pub async fn list_db_instances(&self) -> Result<Vec<serde_json::Value>> {
        let mut instances = Vec::new();
        let mut paginator = self.client.describe_db_instances().into_paginator().send();

        while let Some(result) = paginator
            .try_next()
            .await
            .context("Failed to describe DB instances")?
        {
            let instance_list = result.db_instances.unwrap_or_default();
            for instance in instance_list {
                instances.push(self.db_instance_to_json(&instance));
            }
        }

        Ok(instances)
    }

    fn db_instance_to_json(&self, instance: &rds::types::DbInstance) -> serde_json::Value {
        let mut json = serde_json::Map::new();

        if let Some(identifier) = &instance.db_instance_identifier {
            json.insert(
                "DBInstanceIdentifier".to_string(),
                serde_json::Value::String(identifier.clone()),
            );
            json.insert(
                "Name".to_string(),
                serde_json::Value::String(identifier.clone()),
            );
        }

        if let Some(class) = &instance.db_instance_class {
            json.insert(
                "DBInstanceClass".to_string(),
                serde_json::Value::String(class.clone()),
            );
        }

        if let Some(engine) = &instance.engine {
            json.insert(
                "Engine".to_string(),
                serde_json::Value::String(engine.clone()),
            );
        }

        if let Some(engine_version) = &instance.engine_version {
            json.insert(
                "EngineVersion".to_string(),
                serde_json::Value::String(engine_version.clone()),
            );
        }

        if let Some(status) = &instance.db_instance_status {
            json.insert(
                "Status".to_string(),
                serde_json::Value::String(status.clone()),
            );
        }

        if let Some(availability_zone) = &instance.availability_zone {
            json.insert(
                "AvailabilityZone".to_string(),
                serde_json::Value::String(availability_zone.clone()),
            );
        }

        if let Some(endpoint) = &instance.endpoint {
            if let Some(address) = &endpoint.address {
                json.insert(
                    "Endpoint".to_string(),
                    serde_json::Value::String(address.clone()),
                );
            }
        }

        if let Some(subnet_group) = &instance.db_subnet_group {
            if let Some(vpc_id) = &subnet_group.vpc_id {
                json.insert(
                    "VpcId".to_string(),
                    serde_json::Value::String(vpc_id.clone()),
                );
            }

            if let Some(subnets) = &subnet_group.subnets {
                let subnets_json: Vec<serde_json::Value> = subnets
                    .iter()
                    .filter_map(|subnet| subnet.subnet_identifier.as_ref())
                    .map(|id| serde_json::Value::String(id.clone()))
                    .collect();
                json.insert("Subnets".to_string(), serde_json::Value::Array(subnets_json));
            }
        }

        if let Some(security_groups) = &instance.vpc_security_groups {
            let groups_json: Vec<serde_json::Value> = security_groups
                .iter()
                .filter_map(|membership| membership.vpc_security_group_id.as_ref())
                .map(|id| serde_json::Value::String(id.clone()))
                .collect();
            json.insert(
                "VpcSecurityGroups".to_string(),
                serde_json::Value::Array(groups_json),
            );
        }

        serde_json::Value::Object(json)
    }
}
