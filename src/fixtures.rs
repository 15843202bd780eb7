//! Canned topology data for stubbed mode.
//!
//! Each record is shaped exactly like the normalized output of the live
//! service converters, so the rendering consumer cannot tell the two
//! sources apart. The data describes a small two-subnet VPC running one
//! web instance, one database and one ECS service behind a load balancer.

use serde_json::json;

use crate::snapshot::TopologySnapshot;

pub fn stub_snapshot() -> TopologySnapshot {
    TopologySnapshot {
        vpcs: vec![json!({
            "VpcId": "vpc-0a1b2c3d4e5f67890",
            "CidrBlock": "10.0.0.0/16",
            "State": "available",
            "IsDefault": false,
            "Name": "demo-vpc"
        })],
        subnets: vec![
            json!({
                "SubnetId": "subnet-0aaa1111bbbb2222c",
                "VpcId": "vpc-0a1b2c3d4e5f67890",
                "CidrBlock": "10.0.1.0/24",
                "AvailabilityZone": "eu-west-1a",
                "State": "available",
                "MapPublicIpOnLaunch": true,
                "Name": "demo-public-a"
            }),
            json!({
                "SubnetId": "subnet-0ddd3333eeee4444f",
                "VpcId": "vpc-0a1b2c3d4e5f67890",
                "CidrBlock": "10.0.2.0/24",
                "AvailabilityZone": "eu-west-1b",
                "State": "available",
                "MapPublicIpOnLaunch": false,
                "Name": "demo-private-b"
            }),
        ],
        security_groups: vec![
            json!({
                "GroupId": "sg-0123456789abcdef0",
                "GroupName": "demo-web",
                "Description": "Web tier",
                "VpcId": "vpc-0a1b2c3d4e5f67890",
                "IpPermissions": [{
                    "IpProtocol": "tcp",
                    "FromPort": 443,
                    "ToPort": 443,
                    "IpRanges": ["0.0.0.0/0"]
                }],
                "IpPermissionsEgress": [{
                    "IpProtocol": "-1",
                    "IpRanges": ["0.0.0.0/0"]
                }]
            }),
            json!({
                "GroupId": "sg-0fedcba9876543210",
                "GroupName": "demo-db",
                "Description": "Database tier",
                "VpcId": "vpc-0a1b2c3d4e5f67890",
                "IpPermissions": [{
                    "IpProtocol": "tcp",
                    "FromPort": 5432,
                    "ToPort": 5432,
                    "ReferencedGroups": ["sg-0123456789abcdef0"]
                }],
                "IpPermissionsEgress": []
            }),
        ],
        route_tables: vec![json!({
            "RouteTableId": "rtb-00112233445566778",
            "VpcId": "vpc-0a1b2c3d4e5f67890",
            "Routes": [
                {
                    "DestinationCidrBlock": "10.0.0.0/16",
                    "GatewayId": "local",
                    "State": "active"
                },
                {
                    "DestinationCidrBlock": "0.0.0.0/0",
                    "GatewayId": "igw-0aabbccddeeff0011",
                    "State": "active"
                }
            ],
            "Associations": [
                { "SubnetId": "subnet-0aaa1111bbbb2222c", "Main": false }
            ],
            "Name": "demo-public"
        })],
        network_acls: vec![json!({
            "NetworkAclId": "acl-0998877665544332a",
            "VpcId": "vpc-0a1b2c3d4e5f67890",
            "IsDefault": true,
            "Entries": [
                {
                    "RuleNumber": 100,
                    "Protocol": "-1",
                    "RuleAction": "allow",
                    "Egress": false,
                    "CidrBlock": "0.0.0.0/0"
                },
                {
                    "RuleNumber": 100,
                    "Protocol": "-1",
                    "RuleAction": "allow",
                    "Egress": true,
                    "CidrBlock": "0.0.0.0/0"
                }
            ],
            "Associations": [
                { "SubnetId": "subnet-0aaa1111bbbb2222c" },
                { "SubnetId": "subnet-0ddd3333eeee4444f" }
            ]
        })],
        network_interfaces: vec![json!({
            "NetworkInterfaceId": "eni-0aa11bb22cc33dd44",
            "SubnetId": "subnet-0aaa1111bbbb2222c",
            "VpcId": "vpc-0a1b2c3d4e5f67890",
            "PrivateIpAddress": "10.0.1.25",
            "Status": "in-use",
            "Description": "Primary network interface",
            "InterfaceType": "interface",
            "Attachment": {
                "InstanceId": "i-0abc123def4567890",
                "Status": "attached"
            },
            "Groups": ["sg-0123456789abcdef0"]
        })],
        instances: vec![json!({
            "InstanceId": "i-0abc123def4567890",
            "State": "running",
            "InstanceType": "t3.medium",
            "VpcId": "vpc-0a1b2c3d4e5f67890",
            "SubnetId": "subnet-0aaa1111bbbb2222c",
            "PrivateIpAddress": "10.0.1.25",
            "PublicIpAddress": "52.16.100.200",
            "SecurityGroups": [
                { "GroupId": "sg-0123456789abcdef0", "GroupName": "demo-web" }
            ],
            "Name": "demo-web-1"
        })],
        db_instances: vec![json!({
            "DBInstanceIdentifier": "demo-postgres",
            "Name": "demo-postgres",
            "DBInstanceClass": "db.t3.micro",
            "Engine": "postgres",
            "EngineVersion": "16.3",
            "Status": "available",
            "AvailabilityZone": "eu-west-1b",
            "Endpoint": "demo-postgres.c1a2b3c4d5e6.eu-west-1.rds.amazonaws.com",
            "VpcId": "vpc-0a1b2c3d4e5f67890",
            "Subnets": ["subnet-0ddd3333eeee4444f"],
            "VpcSecurityGroups": ["sg-0fedcba9876543210"]
        })],
        load_balancers: vec![json!({
            "LoadBalancerArn": "arn:aws:elasticloadbalancing:eu-west-1:123456789012:loadbalancer/app/demo-alb/50dc6c495c0c9188",
            "LoadBalancerName": "demo-alb",
            "Name": "demo-alb",
            "DNSName": "demo-alb-1234567890.eu-west-1.elb.amazonaws.com",
            "Scheme": "internet-facing",
            "VpcId": "vpc-0a1b2c3d4e5f67890",
            "Type": "application",
            "State": "active",
            "AvailabilityZones": [
                { "ZoneName": "eu-west-1a", "SubnetId": "subnet-0aaa1111bbbb2222c" },
                { "ZoneName": "eu-west-1b", "SubnetId": "subnet-0ddd3333eeee4444f" }
            ],
            "SecurityGroups": ["sg-0123456789abcdef0"]
        })],
        ecs_tasks: vec![
            json!({
                "TaskArn": "arn:aws:ecs:eu-west-1:123456789012:task/demo-cluster/74de0355a10a4f979ac495c14EXAMPLE",
                "Name": "74de0355a10a4f979ac495c14EXAMPLE",
                "ClusterArn": "arn:aws:ecs:eu-west-1:123456789012:cluster/demo-cluster",
                "TaskDefinitionArn": "arn:aws:ecs:eu-west-1:123456789012:task-definition/demo-api:3",
                "LastStatus": "RUNNING",
                "DesiredStatus": "RUNNING",
                "LaunchType": "FARGATE",
                "AvailabilityZone": "eu-west-1a",
                "Cpu": "256",
                "Memory": "512"
            }),
            json!({
                "TaskArn": "arn:aws:ecs:eu-west-1:123456789012:task/demo-cluster/d789e94343414c25b9f6bd4aEXAMPLE",
                "Name": "d789e94343414c25b9f6bd4aEXAMPLE",
                "ClusterArn": "arn:aws:ecs:eu-west-1:123456789012:cluster/demo-cluster",
                "TaskDefinitionArn": "arn:aws:ecs:eu-west-1:123456789012:task-definition/demo-api:3",
                "LastStatus": "RUNNING",
                "DesiredStatus": "RUNNING",
                "LaunchType": "FARGATE",
                "AvailabilityZone": "eu-west-1b",
                "Cpu": "256",
                "Memory": "512"
            }),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_family_has_fixture_data() {
        let snapshot = stub_snapshot();
        assert!(!snapshot.vpcs.is_empty());
        assert!(!snapshot.subnets.is_empty());
        assert!(!snapshot.security_groups.is_empty());
        assert!(!snapshot.route_tables.is_empty());
        assert!(!snapshot.network_acls.is_empty());
        assert!(!snapshot.network_interfaces.is_empty());
        assert!(!snapshot.instances.is_empty());
        assert!(!snapshot.db_instances.is_empty());
        assert!(!snapshot.load_balancers.is_empty());
        assert!(!snapshot.ecs_tasks.is_empty());
    }

    #[test]
    fn test_fixture_references_are_consistent() {
        let snapshot = stub_snapshot();
        let vpc_id = snapshot.vpcs[0]["VpcId"].as_str().unwrap();
        for subnet in &snapshot.subnets {
            assert_eq!(subnet["VpcId"].as_str().unwrap(), vpc_id);
        }
        assert_eq!(snapshot.instances[0]["VpcId"].as_str().unwrap(), vpc_id);
        assert_eq!(
            snapshot.load_balancers[0]["VpcId"].as_str().unwrap(),
            vpc_id
        );
    }
}
