//! Graphviz export of a sort report.

use std::collections::HashMap;

use petgraph::dot::{Config, Dot};
use petgraph::graph::{DiGraph, NodeIndex};

use crate::graph::SortReport;

/// Renders the report's packages and edges as DOT, in build order.
///
/// Circular packages are drawn in red.
pub fn render_dot(report: &SortReport) -> String {
    let order = report.order();
    let mut graph: DiGraph<&str, &str> = DiGraph::new();
    let mut node_map: HashMap<&str, NodeIndex> = HashMap::new();

    for id in &order {
        let node = graph.add_node(id.as_str());
        node_map.insert(id.as_str(), node);
    }

    for edge in &report.edges {
        if let (Some(&from), Some(&to)) = (
            node_map.get(edge.from.as_str()),
            node_map.get(edge.to.as_str()),
        ) {
            graph.add_edge(from, to, "");
        }
    }

    let rendered = format!(
        "{}",
        Dot::with_attr_getters(
            &graph,
            &[Config::EdgeNoLabel],
            &|_, _| String::new(),
            &|_, (_, id)| {
                if report.is_circular(id) {
                    "color = red".to_string()
                } else {
                    String::new()
                }
            },
        )
    );
    rendered
}
