use serde::{Deserialize, Serialize};

/// Unified topology snapshot for one fetch invocation.
///
/// One field per resource family, each holding the family's normalized
/// items in provider order. A snapshot is only ever constructed fully
/// populated; there is no partial state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopologySnapshot {
    pub vpcs: Vec<serde_json::Value>,
    pub subnets: Vec<serde_json::Value>,
    pub security_groups: Vec<serde_json::Value>,
    pub route_tables: Vec<serde_json::Value>,
    pub network_acls: Vec<serde_json::Value>,
    pub network_interfaces: Vec<serde_json::Value>,
    pub instances: Vec<serde_json::Value>,
    pub db_instances: Vec<serde_json::Value>,
    pub load_balancers: Vec<serde_json::Value>,
    pub ecs_tasks: Vec<serde_json::Value>,
}

impl TopologySnapshot {
    /// Total number of normalized items across all families.
    pub fn resource_count(&self) -> usize {
        self.vpcs.len()
            + self.subnets.len()
            + self.security_groups.len()
            + self.route_tables.len()
            + self.network_acls.len()
            + self.network_interfaces.len()
            + self.instances.len()
            + self.db_instances.len()
            + self.load_balancers.len()
            + self.ecs_tasks.len()
    }
}

/// Result of one aggregation run: the full snapshot or a single
/// consolidated failure message. Exactly one variant per invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Success(TopologySnapshot),
    Failure(String),
}

impl FetchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Success(_))
    }
}
