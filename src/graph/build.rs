use std::collections::{BTreeSet, HashMap};

use tracing::{debug, trace, warn};

use crate::config::{DanglingPolicy, GraphOptions};
use crate::error::{Result, TraceGraphError};
use crate::model::{Event, TraceMessage};

use super::{EdgeKind, GraphEdge, GraphNode, NodeKind, TraceGraph};

fn kind_name(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Event => "event",
        NodeKind::Line => "line",
    }
}

#[derive(Default)]
struct NodeSet {
    nodes: Vec<GraphNode>,
    ids: HashMap<String, NodeKind>,
}

impl NodeSet {
    fn insert(&mut self, node: GraphNode) -> Result<()> {
        if let Some(prev) = self.ids.get(&node.id) {
            return Err(TraceGraphError::DuplicateNodeId {
                id: node.id,
                first: kind_name(*prev),
                second: kind_name(node.kind),
            });
        }
        trace!(id = %node.id, kind = ?node.kind, level = node.level, "add node");
        self.ids.insert(node.id.clone(), node.kind);
        self.nodes.push(node);
        Ok(())
    }

    fn is_event(&self, id: &str) -> bool {
        matches!(self.ids.get(id), Some(NodeKind::Event))
    }
}

fn line_node(lineno: u32, background: &str) -> GraphNode {
    GraphNode {
        id: lineno.to_string(),
        label: lineno.to_string(),
        level: lineno,
        kind: NodeKind::Line,
        color: Some(background.to_string()),
        physics: false,
    }
}

fn event_node(ev: &Event) -> GraphNode {
    GraphNode {
        id: ev.uid.to_string(),
        label: ev.label(),
        level: ev.lineno,
        kind: NodeKind::Event,
        color: None,
        physics: true,
    }
}

/// Build the node/edge set for one message.
///
/// Line nodes are created on first sight of each line number, interleaved
/// with the event nodes, then chained in ascending numeric order by
/// [`EdgeKind::LineOrder`] edges. Causal edges follow `tracingResult` order.
pub fn build_graph(msg: &TraceMessage, opts: &GraphOptions) -> Result<TraceGraph> {
    let mut nodes = NodeSet::default();
    let mut lines = BTreeSet::new();

    for ev in msg.iter_events() {
        if lines.insert(ev.lineno) {
            nodes.insert(line_node(ev.lineno, &opts.background_color))?;
        }
        nodes.insert(event_node(ev))?;
    }

    let mut edges = Vec::new();

    let ordered = lines.iter().collect::<Vec<_>>();
    for pair in ordered.windows(2) {
        edges.push(GraphEdge {
            from: pair[0].to_string(),
            to: pair[1].to_string(),
            kind: EdgeKind::LineOrder,
        });
    }

    let mut dropped = 0_usize;
    for (src, target) in msg.causal_pairs() {
        let missing = [src, target]
            .into_iter()
            .find(|uid| !nodes.is_event(uid.as_str()));
        if let Some(missing) = missing {
            match opts.dangling {
                DanglingPolicy::Drop => {
                    warn!(from = %src, to = %target, missing = %missing, "dropping dangling edge");
                    dropped += 1;
                    continue;
                }
                DanglingPolicy::Keep => {}
                DanglingPolicy::Error => {
                    return Err(TraceGraphError::DanglingEdge {
                        from: src.to_string(),
                        to: target.to_string(),
                        missing: missing.to_string(),
                    });
                }
            }
        }
        edges.push(GraphEdge {
            from: src.to_string(),
            to: target.to_string(),
            kind: EdgeKind::Causal,
        });
    }

    let graph = TraceGraph {
        nodes: nodes.nodes,
        edges,
    };
    let summary = graph.summary();
    debug!(
        event_nodes = summary.event_nodes,
        line_nodes = summary.line_nodes,
        causal_edges = summary.causal_edges,
        order_edges = summary.order_edges,
        dropped,
        "graph built"
    );
    Ok(graph)
}
