use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Response of the `/graph/` endpoint: the latest recorded call graph.
///
/// Nodes and edges are forwarded as recorded by the tracer; both lists are
/// empty until a snapshot exists.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GraphResponse {
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    #[schema(value_type = Vec<Object>)]
    pub nodes: Vec<Value>,
    #[serde(default)]
    #[schema(value_type = Vec<Object>)]
    pub edges: Vec<Value>,
}

impl GraphResponse {
    pub fn empty(timestamp: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_lists_default_to_empty() {
        let graph: GraphResponse = serde_json::from_value(json!({"timestamp": "t"})).unwrap();
        assert!(graph.is_empty());
        assert_eq!(graph, GraphResponse::empty("t"));
    }

    #[test]
    fn test_nodes_and_edges_are_forwarded() {
        let graph: GraphResponse = serde_json::from_value(json!({
            "nodes": [{"id": "api.views"}, {"id": "billing.charge"}],
            "edges": [{"source": "api.views", "target": "billing.charge", "count": 3}]
        }))
        .unwrap();
        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.edges[0]["count"], 3);
    }
}
