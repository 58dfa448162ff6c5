//! Service topology model and generation
//!
//! - [`schema`]: the `topology.json` document types
//! - [`catalog`]: the fixed service allow-list, type table and relationship table
//! - [`classify`]: category and display-name derivation
//! - [`ports`]: port mapping parsing and gRPC/HTTP inference
//! - [`extractor`]: compose file to topology document
//! - [`writer`]: document serialization to disk

pub mod catalog;
pub mod classify;
pub mod extractor;
pub mod ports;
pub mod schema;
pub mod writer;

pub use extractor::TopologyExtractor;
pub use schema::{
    EdgeMetrics, EdgeStatus, Endpoints, NodeHealth, NodeStatus, RelationshipEdge,
    ServiceCategory, ServiceNode, TopologyDocument,
};
pub use writer::{render_topology, write_topology};
