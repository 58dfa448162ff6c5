//! Console summary of a generated topology

use crate::topology::TopologyDocument;
use std::fmt;
use std::path::Path;

/// Renders the human-readable report printed after a successful run
pub struct SummaryFormatter<'a> {
    document: &'a TopologyDocument,
    output_path: &'a Path,
}

impl<'a> SummaryFormatter<'a> {
    pub fn new(document: &'a TopologyDocument, output_path: &'a Path) -> Self {
        Self {
            document,
            output_path,
        }
    }
}

impl fmt::Display for SummaryFormatter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "✅ Generated topology configuration: {}",
            self.output_path.display()
        )?;
        writeln!(f, "   Nodes: {}", self.document.nodes.len())?;
        writeln!(f, "   Edges: {}", self.document.edges.len())?;
        writeln!(f)?;
        writeln!(f, "📊 Services:")?;
        for node in &self.document.nodes {
            writeln!(
                f,
                "   - {} ({}) - {}",
                node.name, node.service_type, node.category
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::parse_compose;
    use crate::topology::TopologyExtractor;

    #[test]
    fn test_summary_lists_every_node() {
        let compose = parse_compose(
            r#"
services:
  exchange-okx: {}
  trading-engine-lh: {}
  postgres: {}
"#,
        )
        .unwrap();
        let document = TopologyExtractor::new().extract(&compose);
        let path = Path::new("config/topology.json");

        let summary = SummaryFormatter::new(&document, path).to_string();

        assert_eq!(
            summary,
            "✅ Generated topology configuration: config/topology.json\n\
             \x20  Nodes: 2\n\
             \x20  Edges: 1\n\
             \n\
             📊 Services:\n\
             \x20  - Exchange Okx (exchange-simulator-go) - simulator\n\
             \x20  - Trading Engine Lh (trading-system-engine-py) - trading\n"
        );
    }

    #[test]
    fn test_summary_without_nodes() {
        let document = TopologyDocument::new(vec![], vec![]);
        let summary = SummaryFormatter::new(&document, Path::new("t.json")).to_string();
        assert!(summary.contains("Nodes: 0"));
        assert!(summary.ends_with("📊 Services:\n"));
    }
}
