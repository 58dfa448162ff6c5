//! Topology generation tests against compose fixtures

use compose_topology::topology::{render_topology, ServiceCategory};
use compose_topology::{load_compose_file, RealFileSystem, TopologyDocument, TopologyExtractor};
use std::path::{Path, PathBuf};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/compose")
        .join(name)
}

fn extract_fixture(name: &str) -> TopologyDocument {
    let compose = load_compose_file(&RealFileSystem, &fixture(name)).expect("fixture should parse");
    TopologyExtractor::new().extract(&compose)
}

#[test]
fn test_infrastructure_services_are_excluded() {
    let document = extract_fixture("trading-ecosystem.yml");

    assert_eq!(document.nodes.len(), 7);
    assert!(document.node("node-redis").is_none());
    assert!(document.node("node-postgres").is_none());
}

#[test]
fn test_categories() {
    let document = extract_fixture("trading-ecosystem.yml");
    let category = |id: &str| document.node(id).unwrap().category;

    assert_eq!(category("node-audit-correlator"), ServiceCategory::Monitoring);
    assert_eq!(category("node-custodian-komainu"), ServiceCategory::Simulator);
    assert_eq!(category("node-exchange-okx"), ServiceCategory::Simulator);
    assert_eq!(category("node-market-data-coinmetrics"), ServiceCategory::Simulator);
    assert_eq!(category("node-risk-monitor-lh"), ServiceCategory::Monitoring);
    assert_eq!(category("node-trading-engine-lh"), ServiceCategory::Trading);
    assert_eq!(category("node-test-coordinator"), ServiceCategory::Orchestration);
}

#[test]
fn test_endpoints_use_published_host_ports() {
    let document = extract_fixture("trading-ecosystem.yml");

    let audit = &document.node("node-audit-correlator").unwrap().endpoints;
    assert_eq!(audit.grpc.as_deref(), Some("localhost:50052"));
    assert_eq!(audit.http.as_deref(), Some("localhost:8082"));
    assert_eq!(audit.internal_ip.as_deref(), Some("172.20.0.82"));

    let custodian = &document.node("node-custodian-komainu").unwrap().endpoints;
    assert_eq!(custodian.grpc.as_deref(), Some("localhost:50053"));
    assert_eq!(custodian.http.as_deref(), Some("localhost:8083"));
}

#[test]
fn test_partial_deployment_drops_dangling_edges() {
    let document = extract_fixture("partial.yml");

    let ids: Vec<&str> = document.edges.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "edge-risk-monitor-lh-to-trading-engine-lh",
            "edge-audit-correlator-to-risk-monitor-lh",
            "edge-audit-correlator-to-trading-engine-lh",
        ]
    );
    assert!(document.edge("edge-trading-engine-lh-to-exchange-okx").is_none());
    assert!(document.edge("edge-audit-correlator-to-exchange-okx").is_none());

    let risk = document.node("node-risk-monitor-lh").unwrap();
    assert_eq!(risk.endpoints.grpc, None);
    assert_eq!(risk.endpoints.http.as_deref(), Some("localhost:8086"));
}

#[test]
fn test_edges_reference_existing_nodes() {
    for name in ["trading-ecosystem.yml", "partial.yml"] {
        let document = extract_fixture(name);
        for edge in &document.edges {
            assert!(document.node(&edge.source_id).is_some(), "{}", edge.id);
            assert!(document.node(&edge.target_id).is_some(), "{}", edge.id);
        }
    }
}

#[test]
fn test_rendered_document_shape() {
    let rendered = render_topology(&extract_fixture("partial.yml")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

    let node = &value["nodes"][0];
    assert_eq!(node["id"], "node-audit-correlator");
    assert_eq!(node["status"], "LIVE");
    assert_eq!(node["category"], "monitoring");
    assert_eq!(node["endpoints"]["http"], serde_json::Value::Null);
    assert_eq!(node["health"]["total_requests"], 0);

    let edge = &value["edges"][0];
    assert_eq!(edge["source_id"], "node-risk-monitor-lh");
    assert_eq!(edge["target_id"], "node-trading-engine-lh");
    assert_eq!(edge["protocol"], "gRPC");
    assert_eq!(edge["relationship"], "monitors");
    assert_eq!(edge["status"], "ACTIVE");
    assert_eq!(edge["metrics"]["latency_p99_ms"], 50.0);
}
