use std::fmt;

use serde::Deserialize;

use super::error::GraphError;

/// One graph document as produced by the upstream clustering pipeline:
/// named nodes carrying a cluster label, links referencing nodes by index.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Graph {
	pub nodes: Vec<GraphNode>,
	pub links: Vec<GraphLink>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct GraphNode {
	pub name: String,
	pub cluster: ClusterId,
}

#[derive(Clone, Debug, Deserialize)]
pub struct GraphLink {
	pub source: usize,
	pub target: usize,
}

/// Categorical cluster label. The pipeline emits numbers for most
/// datasets and strings for the rest, so both are accepted. Negative
/// numbers pass through too, some clusterers use -1 for noise points.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum ClusterId {
	Num(i64),
	Text(String),
}

impl fmt::Display for ClusterId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ClusterId::Num(n) => write!(f, "{n}"),
			ClusterId::Text(s) => f.write_str(s),
		}
	}
}

impl Graph {
	/// Parse one JSON graph document and validate it.
	pub fn from_json(text: &str) -> Result<Self, GraphError> {
		let graph: Graph = serde_json::from_str(text)?;
		graph.validate()?;
		Ok(graph)
	}

	/// Every link endpoint must index an existing node. Documents that
	/// fail this are rejected before they reach the simulation.
	pub fn validate(&self) -> Result<(), GraphError> {
		for (i, link) in self.links.iter().enumerate() {
			for (end, index) in [("source", link.source), ("target", link.target)] {
				if index >= self.nodes.len() {
					return Err(GraphError::DanglingEndpoint {
						link: i,
						end,
						index,
						nodes: self.nodes.len(),
					});
				}
			}
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const FIXTURE: &str =
		r#"{"nodes":[{"name":"a","cluster":0},{"name":"b","cluster":1}],"links":[{"source":0,"target":1}]}"#;

	#[test]
	fn parses_the_minimal_fixture() {
		let graph = Graph::from_json(FIXTURE).unwrap();
		assert_eq!(graph.nodes.len(), 2);
		assert_eq!(graph.links.len(), 1);
		assert_eq!(graph.nodes[0].name, "a");
		assert_eq!(graph.nodes[1].cluster, ClusterId::Num(1));
		assert_eq!((graph.links[0].source, graph.links[0].target), (0, 1));
	}

	#[test]
	fn accepts_string_cluster_labels_and_extra_fields() {
		let graph = Graph::from_json(
			r#"{"nodes":[{"name":"P04637","cluster":"kinase","degree":3,"x":0.5}],"links":[]}"#,
		)
		.unwrap();
		assert_eq!(graph.nodes[0].cluster, ClusterId::Text("kinase".into()));
	}

	#[test]
	fn truncated_document_is_a_parse_error() {
		let err = Graph::from_json(r#"{"nodes":[{"name":"a""#).unwrap_err();
		assert!(matches!(err, GraphError::Parse(_)));
	}

	#[test]
	fn dangling_link_endpoint_fails_validation() {
		let err = Graph::from_json(
			r#"{"nodes":[{"name":"a","cluster":0}],"links":[{"source":0,"target":3}]}"#,
		)
		.unwrap_err();
		match err {
			GraphError::DanglingEndpoint { link, end, index, nodes } => {
				assert_eq!((link, end, index, nodes), (0, "target", 3, 1));
			}
			other => panic!("unexpected error: {other}"),
		}
	}

	#[test]
	fn cluster_labels_display_like_their_json_form() {
		assert_eq!(ClusterId::Num(4).to_string(), "4");
		assert_eq!(ClusterId::Text("kinase".into()).to_string(), "kinase");
	}
}
