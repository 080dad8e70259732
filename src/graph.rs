/// Graph projection entities handed to the force-directed renderer
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Id of the synthetic node every folder hangs off
pub const ROOT_NODE_ID: &str = "root";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Root,
    Folder,
    Bookmark,
}

impl NodeType {
    /// Visual weight: root > folder > bookmark
    pub fn radius(self) -> u32 {
        match self {
            NodeType::Root => 15,
            NodeType::Folder => 12,
            NodeType::Bookmark => 8,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub title: String,
    /// Title shortened for drawing next to the circle
    pub label: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub url: Option<String>,
    pub radius: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
}

impl GraphEdge {
    pub fn new(source: &str, target: &str) -> GraphEdge {
        GraphEdge {
            source: source.to_string(),
            target: target.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GraphModel {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphEdge>,
}

impl GraphModel {
    pub fn count(&self, node_type: NodeType) -> usize {
        self.nodes.iter().filter(|n| n.node_type == node_type).count()
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Node ids touching `id` (itself included) and the links between them
    pub fn neighbours<'a>(&'a self, id: &'a str) -> (HashSet<&'a str>, Vec<&'a GraphEdge>) {
        let mut nodes = HashSet::from([id]);
        let mut links = Vec::new();

        for link in &self.links {
            if link.source == id || link.target == id {
                nodes.insert(link.source.as_str());
                nodes.insert(link.target.as_str());
                links.push(link);
            }
        }

        (nodes, links)
    }

    /// Owned form of `neighbours`, sent to the renderer on hover
    pub fn highlight(&self, id: &str) -> Highlight {
        let (nodes, links) = self.neighbours(id);
        let mut nodes: Vec<String> = nodes.into_iter().map(str::to_string).collect();
        nodes.sort();

        Highlight {
            nodes,
            links: links.into_iter().cloned().collect(),
        }
    }
}

/// Nodes and links to keep lit while a node is hovered; everything else fades
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Highlight {
    pub nodes: Vec<String>,
    pub links: Vec<GraphEdge>,
}
