//! awstopo - AWS network/compute topology snapshot collector
//!
//! Gathers one unified snapshot of an account's networking and compute
//! topology (VPCs, subnets, security groups, route tables, network ACLs,
//! network interfaces, EC2 instances, RDS instances, ECS tasks, load
//! balancers) and hands it to a rendering consumer for diagramming.
//!
//! The pipeline fans out every resource family query concurrently,
//! resolves the dependent ECS chain (clusters, then tasks per cluster,
//! then task details per cluster), and settles to either one fully
//! populated [`TopologySnapshot`] or one consolidated failure message,
//! never a partial result.
//!
//! Data can come from the live AWS APIs or from deterministic fixtures
//! ([`strategy::FetchMode`]); both sources expose the same contract, so
//! the consumer never knows which one produced its snapshot.

#![warn(clippy::all, rust_2018_idioms)]

pub mod aggregator;
pub mod aws_client;
pub mod aws_services;
pub mod bridge;
pub mod credentials;
pub mod discovery;
pub mod fixtures;
pub mod queries;
pub mod snapshot;
pub mod strategy;

pub use aggregator::fetch_snapshot;
pub use aws_client::AwsResourceClient;
pub use bridge::{run_fetch, TopologyBridge};
pub use credentials::SessionCredentials;
pub use discovery::discover_tasks;
pub use queries::ResourceQueries;
pub use snapshot::{FetchOutcome, TopologySnapshot};
pub use strategy::{select_strategy, FetchMode, FetchStrategy};
