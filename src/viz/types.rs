use serde::{Deserialize, Serialize};

use crate::graph::{EdgeKind, GraphEdge, GraphNode, NodeKind, TraceGraph};

/// vis-network 节点颜色（边框和填充同色）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisColor {
    pub background: String,
    pub border: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisFont {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisNode {
    pub id: String,
    pub label: String,
    pub level: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<VisColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<VisFont>,
    /// 只在关闭时输出
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physics: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisEdge {
    pub from: String,
    pub to: String,
    /// Hidden edges are not drawn but still take part in layout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
}

/// `{ nodes, edges }` handed to `new vis.Network(container, data, options)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisData {
    pub nodes: Vec<VisNode>,
    pub edges: Vec<VisEdge>,
}

impl From<&GraphNode> for VisNode {
    fn from(n: &GraphNode) -> Self {
        let color = n.color.as_ref().map(|c| VisColor {
            background: c.clone(),
            border: c.clone(),
        });
        // Line labels take the background color too, otherwise the number
        // would float on an invisible box.
        let font = match n.kind {
            NodeKind::Line => n.color.as_ref().map(|c| VisFont { color: c.clone() }),
            NodeKind::Event => None,
        };
        VisNode {
            id: n.id.clone(),
            label: n.label.clone(),
            level: n.level,
            color,
            font,
            physics: if n.physics { None } else { Some(false) },
        }
    }
}

impl From<&GraphEdge> for VisEdge {
    fn from(e: &GraphEdge) -> Self {
        VisEdge {
            from: e.from.clone(),
            to: e.to.clone(),
            hidden: match e.kind {
                EdgeKind::LineOrder => Some(true),
                EdgeKind::Causal => None,
            },
        }
    }
}

impl From<&TraceGraph> for VisData {
    fn from(g: &TraceGraph) -> Self {
        VisData {
            nodes: g.nodes.iter().map(VisNode::from).collect(),
            edges: g.edges.iter().map(VisEdge::from).collect(),
        }
    }
}
