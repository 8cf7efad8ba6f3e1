#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// One traced event.
    Event,
    /// Synthetic line-number anchor; never represents an event.
    Line,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    /// 层级 = 行号
    pub level: u32,
    pub kind: NodeKind,
    /// 只有虚拟节点设置（背景色）
    pub color: Option<String>,
    /// 虚拟节点关闭 physics，避免被挤开
    pub physics: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    /// source -> target from `tracingResult`
    Causal,
    /// Invisible edge pinning consecutive line nodes in order.
    LineOrder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
    pub kind: EdgeKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GraphSummary {
    pub event_nodes: usize,
    pub line_nodes: usize,
    pub causal_edges: usize,
    pub order_edges: usize,
}

impl GraphSummary {
    pub fn nodes(&self) -> usize {
        self.event_nodes + self.line_nodes
    }

    pub fn edges(&self) -> usize {
        self.causal_edges + self.order_edges
    }
}

/// The full node/edge set built from one message. Rebuilt from scratch per
/// message, never patched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraceGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl TraceGraph {
    pub fn event_nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.iter().filter(|n| n.kind == NodeKind::Event)
    }

    pub fn virtual_nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.iter().filter(|n| n.kind == NodeKind::Line)
    }

    pub fn causal_edges(&self) -> impl Iterator<Item = &GraphEdge> {
        self.edges.iter().filter(|e| e.kind == EdgeKind::Causal)
    }

    pub fn order_edges(&self) -> impl Iterator<Item = &GraphEdge> {
        self.edges.iter().filter(|e| e.kind == EdgeKind::LineOrder)
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn summary(&self) -> GraphSummary {
        GraphSummary {
            event_nodes: self.event_nodes().count(),
            line_nodes: self.virtual_nodes().count(),
            causal_edges: self.causal_edges().count(),
            order_edges: self.order_edges().count(),
        }
    }
}
