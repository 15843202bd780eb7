use anyhow::{Context, Result};
use aws_config::SdkConfig;
use aws_sdk_ec2 as ec2;

/// Networking and compute queries (EC2 API family).
pub struct Ec2Service {
    client: ec2::Client,
}

impl Ec2Service {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: ec2::Client::new(config),
        }
    }

    /// List VPCs
    pub async fn list_vpcs(&self) -> Result<Vec<serde_json::Value>> {
        let response = self
            .client
            .describe_vpcs()
            .send()
            .await
            .context("Failed to describe VPCs")?;

        let mut vpcs = Vec::new();
        if let Some(vpc_list) = response.vpcs {
            for vpc in vpc_list {
                vpcs.push(self.vpc_to_json(&vpc));
            }
        }

        Ok(vpcs)
    }

    /// List subnets
    pub async fn list_subnets(&self) -> Result<Vec<serde_json::Value>> {
        let response = self
            .client
            .describe_subnets()
            .send()
            .await
            .context("Failed to describe subnets")?;

        let mut subnets = Vec::new();
        if let Some(subnet_list) = response.subnets {
            for subnet in subnet_list {
                subnets.push(self.subnet_to_json(&subnet));
            }
        }

        Ok(subnets)
    }

    /// List security groups
    pub async fn list_security_groups(&self) -> Result<Vec<serde_json::Value>> {
        let response = self
            .client
            .describe_security_groups()
            .send()
            .await
            .context("Failed to describe security groups")?;

        let mut groups = Vec::new();
        if let Some(group_list) = response.security_groups {
            for group in group_list {
                groups.push(self.security_group_to_json(&group));
            }
        }

        Ok(groups)
    }

    /// List route tables
    pub async fn list_route_tables(&self) -> Result<Vec<serde_json::Value>> {
        let response = self
            .client
            .describe_route_tables()
            .send()
            .await
            .context("Failed to describe route tables")?;

        let mut route_tables = Vec::new();
        if let Some(table_list) = response.route_tables {
            for table in table_list {
                route_tables.push(self.route_table_to_json(&table));
            }
        }

        Ok(route_tables)
    }

    /// List network ACLs
    pub async fn list_network_acls(&self) -> Result<Vec<serde_json::Value>> {
        let response = self
            .client
            .describe_network_acls()
            .send()
            .await
            .context("Failed to describe network ACLs")?;

        let mut acls = Vec::new();
        if let Some(acl_list) = response.network_acls {
            for acl in acl_list {
                acls.push(self.network_acl_to_json(&acl));
            }
        }

        Ok(acls)
    }

    /// List network interfaces
    pub async fn list_network_interfaces(&self) -> Result<Vec<serde_json::Value>> {
        let response = self
            .client
            .describe_network_interfaces()
            .send()
            .await
            .context("Failed to describe network interfaces")?;

        let mut interfaces = Vec::new();
        if let Some(eni_list) = response.network_interfaces {
            for eni in eni_list {
                interfaces.push(self.network_interface_to_json(&eni));
            }
        }

        Ok(interfaces)
    }

    /// List EC2 instances (describe_instances, flattened out of reservations)
    pub async fn list_instances(&self) -> Result<Vec<serde_json::Value>> {
        let mut instances = Vec::new();
        let mut paginator = self.client.describe_instances().into_paginator().send();

        while let Some(result) = paginator
            .try_next()
            .await
            .context("Failed to describe instances")?
        {
            let reservations = result.reservations.unwrap_or_default();
            for reservation in reservations {
                let reservation_instances = reservation.instances.unwrap_or_default();
                for instance in reservation_instances {
                    instances.push(self.instance_to_json(&instance));
                }
            }
        }

        Ok(instances)
    }

    fn vpc_to_json(&self, vpc: &ec2::types::Vpc) -> serde_json::Value {
        let mut json = serde_json::Map::new();

        if let Some(id) = &vpc.vpc_id {
            json.insert("VpcId".to_string(), serde_json::Value::String(id.clone()));
        }

        if let Some(cidr) = &vpc.cidr_block {
            json.insert(
                "CidrBlock".to_string(),
                serde_json::Value::String(cidr.clone()),
            );
        }

        if let Some(state) = &vpc.state {
            json.insert(
                "State".to_string(),
                serde_json::Value::String(state.as_str().to_string()),
            );
        }

        if let Some(is_default) = vpc.is_default {
            json.insert("IsDefault".to_string(), serde_json::Value::Bool(is_default));
        }

        insert_name_from_tags(&mut json, vpc.tags.as_deref(), vpc.vpc_id.as_deref());

        serde_json::Value::Object(json)
    }

    fn subnet_to_json(&self, subnet: &ec2::types::Subnet) -> serde_json::Value {
        let mut json = serde_json::Map::new();

        if let Some(subnet_id) = &subnet.subnet_id {
            json.insert(
                "SubnetId".to_string(),
                serde_json::Value::String(subnet_id.clone()),
            );
        }

        if let Some(vpc_id) = &subnet.vpc_id {
            json.insert(
                "VpcId".to_string(),
                serde_json::Value::String(vpc_id.clone()),
            );
        }

        if let Some(cidr_block) = &subnet.cidr_block {
            json.insert(
                "CidrBlock".to_string(),
                serde_json::Value::String(cidr_block.clone()),
            );
        }

        if let Some(availability_zone) = &subnet.availability_zone {
            json.insert(
                "AvailabilityZone".to_string(),
                serde_json::Value::String(availability_zone.clone()),
            );
        }

        if let Some(state) = &subnet.state {
            json.insert(
                "State".to_string(),
                serde_json::Value::String(state.as_str().to_string()),
            );
        }

        if let Some(map_public_ip) = subnet.map_public_ip_on_launch {
            json.insert(
                "MapPublicIpOnLaunch".to_string(),
                serde_json::Value::Bool(map_public_ip),
            );
        }

        insert_name_from_tags(&mut json, subnet.tags.as_deref(), subnet.subnet_id.as_deref());

        serde_json::Value::Object(json)
    }

    fn security_group_to_json(&self, group: &ec2::types::SecurityGroup) -> serde_json::Value {
        let mut json = serde_json::Map::new();

        if let Some(id) = &group.group_id {
            json.insert("GroupId".to_string(), serde_json::Value::String(id.clone()));
        }

        if let Some(name) = &group.group_name {
            json.insert(
                "GroupName".to_string(),
                serde_json::Value::String(name.clone()),
            );
        }

        if let Some(description) = &group.description {
            json.insert(
                "Description".to_string(),
                serde_json::Value::String(description.clone()),
            );
        }

        if let Some(vpc_id) = &group.vpc_id {
            json.insert(
                "VpcId".to_string(),
                serde_json::Value::String(vpc_id.clone()),
            );
        }

        if let Some(ingress) = &group.ip_permissions {
            json.insert(
                "IpPermissions".to_string(),
                serde_json::Value::Array(ingress.iter().map(ip_permission_to_json).collect()),
            );
        }

        if let Some(egress) = &group.ip_permissions_egress {
            json.insert(
                "IpPermissionsEgress".to_string(),
                serde_json::Value::Array(egress.iter().map(ip_permission_to_json).collect()),
            );
        }

        serde_json::Value::Object(json)
    }

    fn route_table_to_json(&self, route_table: &ec2::types::RouteTable) -> serde_json::Value {
        let mut json = serde_json::Map::new();

        if let Some(route_table_id) = &route_table.route_table_id {
            json.insert(
                "RouteTableId".to_string(),
                serde_json::Value::String(route_table_id.clone()),
            );
        }

        if let Some(vpc_id) = &route_table.vpc_id {
            json.insert(
                "VpcId".to_string(),
                serde_json::Value::String(vpc_id.clone()),
            );
        }

        if let Some(routes) = &route_table.routes {
            let routes_json: Vec<serde_json::Value> = routes
                .iter()
                .map(|route| {
                    let mut route_json = serde_json::Map::new();

                    if let Some(destination) = &route.destination_cidr_block {
                        route_json.insert(
                            "DestinationCidrBlock".to_string(),
                            serde_json::Value::String(destination.clone()),
                        );
                    }

                    if let Some(gateway_id) = &route.gateway_id {
                        route_json.insert(
                            "GatewayId".to_string(),
                            serde_json::Value::String(gateway_id.clone()),
                        );
                    }

                    if let Some(nat_gateway_id) = &route.nat_gateway_id {
                        route_json.insert(
                            "NatGatewayId".to_string(),
                            serde_json::Value::String(nat_gateway_id.clone()),
                        );
                    }

                    if let Some(network_interface_id) = &route.network_interface_id {
                        route_json.insert(
                            "NetworkInterfaceId".to_string(),
                            serde_json::Value::String(network_interface_id.clone()),
                        );
                    }

                    if let Some(state) = &route.state {
                        route_json.insert(
                            "State".to_string(),
                            serde_json::Value::String(state.as_str().to_string()),
                        );
                    }

                    serde_json::Value::Object(route_json)
                })
                .collect();
            json.insert("Routes".to_string(), serde_json::Value::Array(routes_json));
        }

        if let Some(associations) = &route_table.associations {
            let associations_json: Vec<serde_json::Value> = associations
                .iter()
                .map(|association| {
                    let mut assoc_json = serde_json::Map::new();

                    if let Some(subnet_id) = &association.subnet_id {
                        assoc_json.insert(
                            "SubnetId".to_string(),
                            serde_json::Value::String(subnet_id.clone()),
                        );
                    }

                    if let Some(main) = association.main {
                        assoc_json.insert("Main".to_string(), serde_json::Value::Bool(main));
                    }

                    serde_json::Value::Object(assoc_json)
                })
                .collect();
            json.insert(
                "Associations".to_string(),
                serde_json::Value::Array(associations_json),
            );
        }

        insert_name_from_tags(
            &mut json,
            route_table.tags.as_deref(),
            route_table.route_table_id.as_deref(),
        );

        serde_json::Value::Object(json)
    }

    fn network_acl_to_json(&self, acl: &ec2::types::NetworkAcl) -> serde_json::Value {
        let mut json = serde_json::Map::new();

        if let Some(network_acl_id) = &acl.network_acl_id {
            json.insert(
                "NetworkAclId".to_string(),
                serde_json::Value::String(network_acl_id.clone()),
            );
        }

        if let Some(vpc_id) = &acl.vpc_id {
            json.insert(
                "VpcId".to_string(),
                serde_json::Value::String(vpc_id.clone()),
            );
        }

        if let Some(is_default) = acl.is_default {
            json.insert("IsDefault".to_string(), serde_json::Value::Bool(is_default));
        }

        if let Some(entries) = &acl.entries {
            let entries_json: Vec<serde_json::Value> = entries
                .iter()
                .map(|entry| {
                    let mut entry_json = serde_json::Map::new();

                    if let Some(rule_number) = entry.rule_number {
                        entry_json.insert(
                            "RuleNumber".to_string(),
                            serde_json::Value::Number(rule_number.into()),
                        );
                    }

                    if let Some(protocol) = &entry.protocol {
                        entry_json.insert(
                            "Protocol".to_string(),
                            serde_json::Value::String(protocol.clone()),
                        );
                    }

                    if let Some(rule_action) = &entry.rule_action {
                        entry_json.insert(
                            "RuleAction".to_string(),
                            serde_json::Value::String(rule_action.as_str().to_string()),
                        );
                    }

                    if let Some(egress) = entry.egress {
                        entry_json.insert("Egress".to_string(), serde_json::Value::Bool(egress));
                    }

                    if let Some(cidr_block) = &entry.cidr_block {
                        entry_json.insert(
                            "CidrBlock".to_string(),
                            serde_json::Value::String(cidr_block.clone()),
                        );
                    }

                    serde_json::Value::Object(entry_json)
                })
                .collect();
            json.insert("Entries".to_string(), serde_json::Value::Array(entries_json));
        }

        if let Some(associations) = &acl.associations {
            let associations_json: Vec<serde_json::Value> = associations
                .iter()
                .map(|association| {
                    let mut assoc_json = serde_json::Map::new();

                    if let Some(subnet_id) = &association.subnet_id {
                        assoc_json.insert(
                            "SubnetId".to_string(),
                            serde_json::Value::String(subnet_id.clone()),
                        );
                    }

                    serde_json::Value::Object(assoc_json)
                })
                .collect();
            json.insert(
                "Associations".to_string(),
                serde_json::Value::Array(associations_json),
            );
        }

        serde_json::Value::Object(json)
    }

    fn network_interface_to_json(&self, eni: &ec2::types::NetworkInterface) -> serde_json::Value {
        let mut json = serde_json::Map::new();

        if let Some(network_interface_id) = &eni.network_interface_id {
            json.insert(
                "NetworkInterfaceId".to_string(),
                serde_json::Value::String(network_interface_id.clone()),
            );
        }

        if let Some(subnet_id) = &eni.subnet_id {
            json.insert(
                "SubnetId".to_string(),
                serde_json::Value::String(subnet_id.clone()),
            );
        }

        if let Some(vpc_id) = &eni.vpc_id {
            json.insert(
                "VpcId".to_string(),
                serde_json::Value::String(vpc_id.clone()),
            );
        }

        if let Some(private_ip_address) = &eni.private_ip_address {
            json.insert(
                "PrivateIpAddress".to_string(),
                serde_json::Value::String(private_ip_address.clone()),
            );
        }

        if let Some(status) = &eni.status {
            json.insert(
                "Status".to_string(),
                serde_json::Value::String(status.as_str().to_string()),
            );
        }

        if let Some(description) = &eni.description {
            json.insert(
                "Description".to_string(),
                serde_json::Value::String(description.clone()),
            );
        }

        if let Some(interface_type) = &eni.interface_type {
            json.insert(
                "InterfaceType".to_string(),
                serde_json::Value::String(interface_type.as_str().to_string()),
            );
        }

        if let Some(attachment) = &eni.attachment {
            let mut attachment_json = serde_json::Map::new();

            if let Some(instance_id) = &attachment.instance_id {
                attachment_json.insert(
                    "InstanceId".to_string(),
                    serde_json::Value::String(instance_id.clone()),
                );
            }

            if let Some(status) = &attachment.status {
                attachment_json.insert(
                    "Status".to_string(),
                    serde_json::Value::String(status.as_str().to_string()),
                );
            }

            json.insert(
                "Attachment".to_string(),
                serde_json::Value::Object(attachment_json),
            );
        }

        if let Some(groups) = &eni.groups {
            let groups_json: Vec<serde_json::Value> = groups
                .iter()
                .filter_map(|group| group.group_id.as_ref())
                .map(|id| serde_json::Value::String(id.clone()))
                .collect();
            json.insert("Groups".to_string(), serde_json::Value::Array(groups_json));
        }

        serde_json::Value::Object(json)
    }

    fn instance_to_json(&self, instance: &ec2::types::Instance) -> serde_json::Value {
        let mut json = serde_json::Map::new();

        if let Some(id) = &instance.instance_id {
            json.insert(
                "InstanceId".to_string(),
                serde_json::Value::String(id.clone()),
            );
        }

        if let Some(state) = &instance.state {
            if let Some(name) = &state.name {
                json.insert(
                    "State".to_string(),
                    serde_json::Value::String(name.as_str().to_string()),
                );
            }
        }

        if let Some(instance_type) = &instance.instance_type {
            json.insert(
                "InstanceType".to_string(),
                serde_json::Value::String(instance_type.as_str().to_string()),
            );
        }

        if let Some(vpc_id) = &instance.vpc_id {
            json.insert(
                "VpcId".to_string(),
                serde_json::Value::String(vpc_id.clone()),
            );
        }

        if let Some(subnet_id) = &instance.subnet_id {
            json.insert(
                "SubnetId".to_string(),
                serde_json::Value::String(subnet_id.clone()),
            );
        }

        if let Some(private_ip) = &instance.private_ip_address {
            json.insert(
                "PrivateIpAddress".to_string(),
                serde_json::Value::String(private_ip.clone()),
            );
        }

        if let Some(public_ip) = &instance.public_ip_address {
            json.insert(
                "PublicIpAddress".to_string(),
                serde_json::Value::String(public_ip.clone()),
            );
        }

        if let Some(security_groups) = &instance.security_groups {
            let security_groups_json: Vec<serde_json::Value> = security_groups
                .iter()
                .map(|sg| {
                    let mut sg_json = serde_json::Map::new();
                    if let Some(id) = &sg.group_id {
                        sg_json
                            .insert("GroupId".to_string(), serde_json::Value::String(id.clone()));
                    }
                    if let Some(name) = &sg.group_name {
                        sg_json.insert(
                            "GroupName".to_string(),
                            serde_json::Value::String(name.clone()),
                        );
                    }
                    serde_json::Value::Object(sg_json)
                })
                .collect();
            json.insert(
                "SecurityGroups".to_string(),
                serde_json::Value::Array(security_groups_json),
            );
        }

        insert_name_from_tags(
            &mut json,
            instance.tags.as_deref(),
            instance.instance_id.as_deref(),
        );

        serde_json::Value::Object(json)
    }
}

fn ip_permission_to_json(rule: &ec2::types::IpPermission) -> serde_json::Value {
    let mut rule_json = serde_json::Map::new();

    if let Some(protocol) = &rule.ip_protocol {
        rule_json.insert(
            "IpProtocol".to_string(),
            serde_json::Value::String(protocol.clone()),
        );
    }

    if let Some(from_port) = rule.from_port {
        rule_json.insert(
            "FromPort".to_string(),
            serde_json::Value::Number(from_port.into()),
        );
    }

    if let Some(to_port) = rule.to_port {
        rule_json.insert(
            "ToPort".to_string(),
            serde_json::Value::Number(to_port.into()),
        );
    }

    if let Some(ip_ranges) = &rule.ip_ranges {
        let ranges_json: Vec<serde_json::Value> = ip_ranges
            .iter()
            .filter_map(|ip_range| ip_range.cidr_ip.as_ref())
            .map(|cidr| serde_json::Value::String(cidr.clone()))
            .collect();
        rule_json.insert("IpRanges".to_string(), serde_json::Value::Array(ranges_json));
    }

    if let Some(group_pairs) = &rule.user_id_group_pairs {
        let pairs_json: Vec<serde_json::Value> = group_pairs
            .iter()
            .filter_map(|pair| pair.group_id.as_ref())
            .map(|id| serde_json::Value::String(id.clone()))
            .collect();
        rule_json.insert(
            "ReferencedGroups".to_string(),
            serde_json::Value::Array(pairs_json),
        );
    }

    serde_json::Value::Object(rule_json)
}

/// Insert the Name tag if present, falling back to the resource id.
fn insert_name_from_tags(
    json: &mut serde_json::Map<String, serde_json::Value>,
    tags: Option<&[ec2::types::Tag]>,
    fallback: Option<&str>,
) {
    if let Some(tags) = tags {
        for tag in tags {
            if let (Some(key), Some(value)) = (&tag.key, &tag.value) {
                if key == "Name" {
                    json.insert("Name".to_string(), serde_json::Value::String(value.clone()));
                    return;
                }
            }
        }
    }

    if let Some(fallback) = fallback {
        json.insert(
            "Name".to_string(),
            serde_json::Value::String(fallback.to_string()),
        );
    }
}
