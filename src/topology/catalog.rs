//! Static knowledge about the trading ecosystem deployment
//!
//! Which compose services belong to the topology, what type each one is,
//! and which services talk to which.

/// Prefix carried by every ecosystem container name
pub const ECOSYSTEM_PREFIX: &str = "trading-ecosystem-";

/// Short names of the application services that make up the topology.
/// Anything else in the compose file (databases, brokers, ...) is ignored.
pub const APPLICATION_SERVICES: [&str; 7] = [
    "audit-correlator",
    "custodian-komainu",
    "exchange-okx",
    "market-data-coinmetrics",
    "risk-monitor-lh",
    "trading-engine-lh",
    "test-coordinator",
];

const SERVICE_TYPES: [(&str, &str); 7] = [
    ("audit-correlator", "audit-correlator-go"),
    ("custodian-komainu", "custodian-simulator-go"),
    ("exchange-okx", "exchange-simulator-go"),
    ("market-data-coinmetrics", "market-data-simulator-go"),
    ("risk-monitor-lh", "risk-monitor-py"),
    ("trading-engine-lh", "trading-system-engine-py"),
    ("test-coordinator", "test-coordinator-py"),
];

/// A known communication path between two application services
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relationship {
    pub source: &'static str,
    pub target: &'static str,
    pub protocol: &'static str,
    pub relationship: &'static str,
}

const fn grpc(source: &'static str, target: &'static str, relationship: &'static str) -> Relationship {
    Relationship {
        source,
        target,
        protocol: "gRPC",
        relationship,
    }
}

pub const RELATIONSHIPS: [Relationship; 11] = [
    grpc("risk-monitor-lh", "trading-engine-lh", "monitors"),
    grpc("trading-engine-lh", "exchange-okx", "trades_via"),
    grpc("trading-engine-lh", "custodian-komainu", "custodies_via"),
    grpc("market-data-coinmetrics", "trading-engine-lh", "provides_data_to"),
    // audit-correlator watches every other service
    grpc("audit-correlator", "risk-monitor-lh", "audits"),
    grpc("audit-correlator", "trading-engine-lh", "audits"),
    grpc("audit-correlator", "exchange-okx", "audits"),
    grpc("audit-correlator", "custodian-komainu", "audits"),
    grpc("audit-correlator", "market-data-coinmetrics", "audits"),
    grpc("test-coordinator", "trading-engine-lh", "tests"),
    grpc("test-coordinator", "risk-monitor-lh", "tests"),
];

/// Container name used when a service does not set `container_name`
pub fn default_container_name(service_name: &str) -> String {
    format!("{}{}", ECOSYSTEM_PREFIX, service_name)
}

/// Remove the ecosystem prefix from a container name
///
/// Every occurrence is removed, not only a leading one, so container names
/// map to the same short names the deployed services already report.
pub fn short_name(container_name: &str) -> String {
    container_name.replace(ECOSYSTEM_PREFIX, "")
}

pub fn is_application_service(short_name: &str) -> bool {
    APPLICATION_SERVICES.contains(&short_name)
}

/// Service type for a short name, falling back to the short name itself
pub fn service_type(short_name: &str) -> &str {
    SERVICE_TYPES
        .iter()
        .find(|(name, _)| *name == short_name)
        .map(|(_, service_type)| *service_type)
        .unwrap_or(short_name)
}
