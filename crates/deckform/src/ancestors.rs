use deckcore::{Edge, Node};
use petgraph::graphmap::DiGraphMap;
use petgraph::visit::{Bfs, Reversed};
use std::collections::HashMap;

/// Nodes upstream of `current`, nearest first
///
/// Follows edges backward with a breadth-first walk. Every node is visited
/// once, so cycles terminate, and `current` is never part of the result even
/// when it sits on a cycle. Edge endpoints without a matching node are walked
/// through but not returned.
pub fn ancestor_nodes<'a>(current: &str, edges: &[Edge], nodes: &'a [Node]) -> Vec<&'a Node> {
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();
    for edge in edges {
        graph.add_edge(edge.source.as_str(), edge.target.as_str(), ());
    }

    if !graph.contains_node(current) {
        return Vec::new();
    }

    let by_id: HashMap<&str, &Node> = nodes.iter().map(|n| (n.id.as_str(), n)).collect();
    let upstream = Reversed(&graph);
    let mut bfs = Bfs::new(upstream, current);
    let mut ancestors = Vec::new();

    while let Some(id) = bfs.next(upstream) {
        if id == current {
            continue;
        }
        if let Some(node) = by_id.get(id) {
            ancestors.push(*node);
        }
    }

    tracing::debug!("Resolved {} ancestors for node {}", ancestors.len(), current);
    ancestors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids<'a>(nodes: &[&'a Node]) -> Vec<&'a str> {
        nodes.iter().map(|n| n.id.as_str()).collect()
    }

    #[test]
    fn test_chain_is_nearest_first() {
        let nodes = vec![
            Node::new("a", "Telegram"),
            Node::new("b", "Slack"),
            Node::new("c", "Gemini"),
        ];
        let edges = vec![Edge::new("a", "b"), Edge::new("b", "c")];

        assert_eq!(ids(&ancestor_nodes("c", &edges, &nodes)), vec!["b", "a"]);
        assert!(ancestor_nodes("a", &edges, &nodes).is_empty());
    }

    #[test]
    fn test_cycle_terminates_and_excludes_current() {
        let nodes = vec![
            Node::new("a", "Telegram"),
            Node::new("b", "Slack"),
            Node::new("c", "Gemini"),
        ];
        let edges = vec![Edge::new("a", "b"), Edge::new("b", "c"), Edge::new("c", "a")];

        let mut found = ids(&ancestor_nodes("c", &edges, &nodes));
        found.sort();
        assert_eq!(found, vec!["a", "b"]);
    }

    #[test]
    fn test_self_loop() {
        let nodes = vec![Node::new("a", "Telegram")];
        let edges = vec![Edge::new("a", "a")];
        assert!(ancestor_nodes("a", &edges, &nodes).is_empty());
    }

    #[test]
    fn test_diamond_visits_shared_ancestor_once() {
        let nodes = vec![
            Node::new("root", "Form"),
            Node::new("left", "Gemini"),
            Node::new("right", "Slack"),
            Node::new("sink", "Telegram"),
        ];
        let edges = vec![
            Edge::new("root", "left"),
            Edge::new("root", "right"),
            Edge::new("left", "sink"),
            Edge::new("right", "sink"),
        ];

        let found = ids(&ancestor_nodes("sink", &edges, &nodes));
        assert_eq!(found.len(), 3);
        assert_eq!(found.last(), Some(&"root"));
    }

    #[test]
    fn test_missing_node_is_walked_through() {
        let nodes = vec![Node::new("a", "Telegram"), Node::new("c", "Gemini")];
        let edges = vec![Edge::new("a", "ghost"), Edge::new("ghost", "c")];

        assert_eq!(ids(&ancestor_nodes("c", &edges, &nodes)), vec!["a"]);
    }
}
