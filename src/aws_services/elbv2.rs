use anyhow::{Context, Result};
use aws_config::SdkConfig;
use aws_sdk_elasticloadbalancingv2 as elbv2;

/// Load balancer queries (ELBv2).
pub struct ElbService {
    client: elbv2::Client,
}

impl ElbService {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: elbv2::Client::new(config),
        }
    }

    /// List Application/Network Load Balancers
    pub async fn list_load_balancers(&self) -> Result<Vec<serde_json::Value>> {
        let response = self
            .client
            .describe_load_balancers()
            .send()
            .await
            .context("Failed to describe load balancers")?;

        let mut load_balancers = Vec::new();
        if let Some(lb_list) = response.load_balancers {
            for lb in lb_list {
                load_balancers.push(self.load_balancer_to_json(&lb));
            }
        }

        Ok(load_balancers)
    }

    fn load_balancer_to_json(&self, lb: &elbv2::types::LoadBalancer) -> serde_json::Value {
        let mut json = serde_json::Map::new();

        if let Some(arn) = &lb.load_balancer_arn {
            json.insert(
                "LoadBalancerArn".to_string(),
                serde_json::Value::String(arn.clone()),
            );
        }

        if let Some(name) = &lb.load_balancer_name {
            json.insert(
                "LoadBalancerName".to_string(),
                serde_json::Value::String(name.clone()),
            );
            json.insert("Name".to_string(), serde_json::Value::String(name.clone()));
        }

        if let Some(dns_name) = &lb.dns_name {
            json.insert(
                "DNSName".to_string(),
                serde_json::Value::String(dns_name.clone()),
            );
        }

        if let Some(scheme) = &lb.scheme {
            json.insert(
                "Scheme".to_string(),
                serde_json::Value::String(scheme.as_str().to_string()),
            );
        }

        if let Some(vpc_id) = &lb.vpc_id {
            json.insert(
                "VpcId".to_string(),
                serde_json::Value::String(vpc_id.clone()),
            );
        }

        if let Some(lb_type) = &lb.r#type {
            json.insert(
                "Type".to_string(),
                serde_json::Value::String(lb_type.as_str().to_string()),
            );
        }

        if let Some(state) = &lb.state {
            if let Some(code) = &state.code {
                json.insert(
                    "State".to_string(),
                    serde_json::Value::String(code.as_str().to_string()),
                );
            }
        }

        if let Some(availability_zones) = &lb.availability_zones {
            let azs: Vec<serde_json::Value> = availability_zones
                .iter()
                .map(|az| {
                    let mut az_json = serde_json::Map::new();
                    if let Some(zone_name) = &az.zone_name {
                        az_json.insert(
                            "ZoneName".to_string(),
                            serde_json::Value::String(zone_name.clone()),
                        );
                    }
                    if let Some(subnet_id) = &az.subnet_id {
                        az_json.insert(
                            "SubnetId".to_string(),
                            serde_json::Value::String(subnet_id.clone()),
                        );
                    }
                    serde_json::Value::Object(az_json)
                })
                .collect();
            json.insert(
                "AvailabilityZones".to_string(),
                serde_json::Value::Array(azs),
            );
        }

        if let Some(security_groups) = &lb.security_groups {
            let sgs: Vec<serde_json::Value> = security_groups
                .iter()
                .map(|sg| serde_json::Value::String(sg.clone()))
                .collect();
            json.insert("SecurityGroups".to_string(), serde_json::Value::Array(sgs));
        }

        serde_json::Value::Object(json)
    }
}
