//! Port mapping parsing and endpoint inference

use serde_yaml::Value;
use tracing::warn;

/// A short-syntax compose port mapping: `[host_ip:]host:container[/proto]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortMapping<'a> {
    pub host_port: &'a str,
    pub container_port: &'a str,
}

impl<'a> PortMapping<'a> {
    /// Returns `None` for entries with fewer than two colon-separated fields
    pub fn parse(entry: &'a str) -> Option<Self> {
        let mut fields = entry.rsplit(':');
        let container = fields.next()?;
        let host_port = fields.next()?;
        let container_port = container.split('/').next().unwrap_or(container);

        Some(Self {
            host_port,
            container_port,
        })
    }

    pub fn kind(&self) -> Option<PortKind> {
        if self.container_port.starts_with("50") {
            Some(PortKind::Grpc)
        } else if self.container_port.starts_with('8') {
            Some(PortKind::Http)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortKind {
    Grpc,
    Http,
}

/// Host ports published for gRPC and HTTP
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServicePorts {
    pub grpc: Option<u16>,
    pub http: Option<u16>,
}

impl ServicePorts {
    pub fn grpc_endpoint(&self) -> Option<String> {
        self.grpc.map(|port| format!("localhost:{}", port))
    }

    pub fn http_endpoint(&self) -> Option<String> {
        self.http.map(|port| format!("localhost:{}", port))
    }
}

/// Infer gRPC and HTTP host ports from a service's `ports` list
///
/// Container ports starting with `50` are gRPC, those starting with `8` are
/// HTTP. Entries are applied in order and a later match replaces an earlier
/// one in the same bucket. Non-string entries are skipped.
pub fn infer_ports(service: &str, entries: &[Value]) -> ServicePorts {
    let mut ports = ServicePorts::default();

    for entry in entries {
        let Some(raw) = entry.as_str() else {
            continue;
        };
        let Some(mapping) = PortMapping::parse(raw) else {
            continue;
        };
        let Some(kind) = mapping.kind() else {
            continue;
        };

        let host_port = match mapping.host_port.parse::<u16>() {
            Ok(port) if port != 0 => port,
            _ => {
                warn!(service, entry = raw, "Ignoring port mapping with invalid host port");
                continue;
            }
        };

        match kind {
            PortKind::Grpc => ports.grpc = Some(host_port),
            PortKind::Http => ports.http = Some(host_port),
        }
    }

    ports
}
