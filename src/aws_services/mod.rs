//! Thin wrappers over the AWS SDK clients, one per resource family.
//!
//! Each wrapper converts provider-native response types into the
//! PascalCase JSON maps the snapshot carries, keeping the fields a
//! topology diagram needs (identifiers, names, CIDRs, VPC/subnet/SG
//! associations, endpoints).

pub mod ec2;
pub mod ecs;
pub mod elbv2;
pub mod rds;

pub use ec2::Ec2Service;
pub use ecs::EcsService;
pub use elbv2::ElbService;
pub use rds::RdsService;
