//! Builds a topology document from a parsed compose file

use super::catalog::{self, RELATIONSHIPS};
use super::classify::{categorize, display_name};
use super::ports::infer_ports;
use super::schema::{
    EdgeMetrics, EdgeStatus, Endpoints, NodeHealth, NodeStatus, RelationshipEdge, ServiceNode,
    TopologyDocument, NODE_VERSION,
};
use crate::compose::{ComposeFile, ServiceDefinition};
use serde_yaml::Value;
use std::collections::HashMap;
use tracing::debug;

/// Turns compose services into topology nodes and the known edges between them
#[derive(Debug, Default, Clone, Copy)]
pub struct TopologyExtractor;

impl TopologyExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, compose: &ComposeFile) -> TopologyDocument {
        let mut nodes = Vec::new();
        let mut node_ids: HashMap<String, String> = HashMap::new();

        for service in &compose.services {
            let container_name = service
                .definition
                .container_name
                .clone()
                .unwrap_or_else(|| catalog::default_container_name(&service.name));
            let short_name = catalog::short_name(&container_name);

            if !catalog::is_application_service(&short_name) {
                debug!(service = %service.name, container = %container_name, "Skipping non-application service");
                continue;
            }

            let node = build_node(&short_name, &service.definition);
            debug!(
                id = %node.id,
                service_type = %node.service_type,
                category = %node.category,
                "Extracted service node"
            );
            node_ids.insert(short_name, node.id.clone());
            nodes.push(node);
        }

        let edges = build_edges(&node_ids);

        debug!(nodes = nodes.len(), edges = edges.len(), "Extracted topology");
        TopologyDocument::new(nodes, edges)
    }
}

fn build_node(short_name: &str, definition: &ServiceDefinition) -> ServiceNode {
    let service_type = catalog::service_type(short_name).to_string();
    let category = categorize(&service_type);
    let ports = infer_ports(short_name, &definition.ports);

    ServiceNode {
        id: format!("node-{}", short_name),
        name: display_name(short_name),
        service_type,
        category,
        status: NodeStatus::Live,
        version: NODE_VERSION.to_string(),
        endpoints: Endpoints {
            grpc: ports.grpc_endpoint(),
            http: ports.http_endpoint(),
            internal_ip: internal_ip(definition.networks.as_ref()),
        },
        health: NodeHealth::default(),
    }
}

/// `ipv4_address` of the first network attachment that has a config body
///
/// List-form `networks` carry no addresses.
fn internal_ip(networks: Option<&Value>) -> Option<String> {
    let networks = networks?.as_mapping()?;
    let config = networks.values().find_map(Value::as_mapping)?;
    config
        .get("ipv4_address")
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn build_edges(node_ids: &HashMap<String, String>) -> Vec<RelationshipEdge> {
    RELATIONSHIPS
        .iter()
        .filter_map(|rel| {
            let (Some(source_id), Some(target_id)) =
                (node_ids.get(rel.source), node_ids.get(rel.target))
            else {
                debug!(
                    source = rel.source,
                    target = rel.target,
                    "Omitting edge with undeployed endpoint"
                );
                return None;
            };

            Some(RelationshipEdge {
                id: format!("edge-{}-to-{}", rel.source, rel.target),
                source_id: source_id.clone(),
                target_id: target_id.clone(),
                protocol: rel.protocol.to_string(),
                relationship: rel.relationship.to_string(),
                status: EdgeStatus::Active,
                metrics: EdgeMetrics::default(),
            })
        })
        .collect()
}
