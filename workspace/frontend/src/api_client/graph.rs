use ::common::GraphResponse;
use crate::api_client;

/// Get the nodes and edges of the latest call-graph snapshot
pub async fn get_graph() -> Result<GraphResponse, String> {
    log::trace!("Fetching call graph");
    let result: Result<GraphResponse, String> = api_client::get("/graph/").await;
    match &result {
        Ok(graph) => log::info!(
            "Fetched call graph with {} nodes and {} edges",
            graph.nodes.len(),
            graph.edges.len()
        ),
        Err(e) => log::error!("Failed to fetch call graph: {}", e),
    }
    result
}
