//! Topology document schema
//!
//! Field order here is the key order of the generated JSON, so changing it
//! changes the bytes written to `topology.json`.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const DOCUMENT_VERSION: &str = "1.0";
pub const GENERATED_AT: &str = "startup";
pub const NODE_VERSION: &str = "1.0.0";

/// Root document handed to the topology consumer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopologyDocument {
    pub version: String,
    pub generated_at: String,
    pub nodes: Vec<ServiceNode>,
    pub edges: Vec<RelationshipEdge>,
}

impl TopologyDocument {
    pub fn new(nodes: Vec<ServiceNode>, edges: Vec<RelationshipEdge>) -> Self {
        Self {
            version: DOCUMENT_VERSION.to_string(),
            generated_at: GENERATED_AT.to_string(),
            nodes,
            edges,
        }
    }

    /// Look up a node by id; used by consumers that inspect a generated document
    pub fn node(&self, id: &str) -> Option<&ServiceNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Look up an edge by id
    pub fn edge(&self, id: &str) -> Option<&RelationshipEdge> {
        self.edges.iter().find(|e| e.id == id)
    }
}

/// Broad grouping of a service, derived from its service type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceCategory {
    Simulator,
    Monitoring,
    Trading,
    Orchestration,
    Infrastructure,
    Other,
}

impl ServiceCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceCategory::Simulator => "simulator",
            ServiceCategory::Monitoring => "monitoring",
            ServiceCategory::Trading => "trading",
            ServiceCategory::Orchestration => "orchestration",
            ServiceCategory::Infrastructure => "infrastructure",
            ServiceCategory::Other => "other",
        }
    }
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NodeStatus {
    Live,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EdgeStatus {
    Active,
}

/// One deployed application service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceNode {
    pub id: String,
    pub name: String,
    pub service_type: String,
    pub category: ServiceCategory,
    pub status: NodeStatus,
    pub version: String,
    pub endpoints: Endpoints,
    pub health: NodeHealth,
}

/// Network addresses of a service; absent values serialize as `null`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoints {
    pub grpc: Option<String>,
    pub http: Option<String>,
    pub internal_ip: Option<String>,
}

/// Health counters, zeroed at generation time
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeHealth {
    pub cpu_percent: f64,
    pub memory_mb: f64,
    pub total_requests: u64,
    pub total_errors: u64,
    pub error_rate: f64,
}

/// A known communication path between two services
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipEdge {
    pub id: String,
    pub source_id: String,
    pub target_id: String,
    pub protocol: String,
    pub relationship: String,
    pub status: EdgeStatus,
    pub metrics: EdgeMetrics,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeMetrics {
    pub latency_p50_ms: f64,
    pub latency_p99_ms: f64,
    pub throughput_rps: f64,
    pub error_rate: f64,
}

impl Default for EdgeMetrics {
    fn default() -> Self {
        Self {
            latency_p50_ms: 10.0,
            latency_p99_ms: 50.0,
            throughput_rps: 100.0,
            error_rate: 0.001,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(ServiceCategory::Orchestration).unwrap(),
            json!("orchestration")
        );
        assert_eq!(ServiceCategory::Infrastructure.to_string(), "infrastructure");
    }

    #[test]
    fn test_status_constants() {
        assert_eq!(serde_json::to_value(NodeStatus::Live).unwrap(), json!("LIVE"));
        assert_eq!(serde_json::to_value(EdgeStatus::Active).unwrap(), json!("ACTIVE"));
    }

    #[test]
    fn test_empty_endpoints_serialize_as_null() {
        let value = serde_json::to_value(Endpoints::default()).unwrap();
        assert_eq!(
            value,
            json!({"grpc": null, "http": null, "internal_ip": null})
        );
    }

    #[test]
    fn test_document_header() {
        let doc = TopologyDocument::new(vec![], vec![]);
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["version"], "1.0");
        assert_eq!(value["generated_at"], "startup");
        assert_eq!(value["nodes"], json!([]));
        assert_eq!(value["edges"], json!([]));
    }

    #[test]
    fn test_edge_metric_placeholders() {
        let metrics = EdgeMetrics::default();
        assert_eq!(metrics.latency_p50_ms, 10.0);
        assert_eq!(metrics.latency_p99_ms, 50.0);
        assert_eq!(metrics.throughput_rps, 100.0);
        assert_eq!(metrics.error_rate, 0.001);
    }
}
