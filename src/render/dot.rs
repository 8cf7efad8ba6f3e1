use std::collections::BTreeMap;
use std::io::Write;

use crate::error::Result;
use crate::graph::{EdgeKind, NodeKind, TraceGraph};

fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Graphviz rendering. Nodes sharing a level are put in one `rank=same`
/// group; line nodes and their ordering edges are invisible.
pub fn write_dot<W: Write>(graph: &TraceGraph, out: &mut W) -> Result<()> {
    writeln!(out, "digraph trace {{")?;
    writeln!(out, "  rankdir=TB;")?;
    writeln!(out, "  node [shape=box];")?;

    for node in &graph.nodes {
        match node.kind {
            NodeKind::Event => {
                writeln!(out, "  {} [label={}];", quote(&node.id), quote(&node.label))?
            }
            NodeKind::Line => writeln!(
                out,
                "  {} [label={}, style=invis];",
                quote(&node.id),
                quote(&node.label)
            )?,
        }
    }

    let mut levels: BTreeMap<u32, Vec<&str>> = BTreeMap::new();
    for node in &graph.nodes {
        levels.entry(node.level).or_default().push(&node.id);
    }
    for ids in levels.values().filter(|ids| ids.len() > 1) {
        let members = ids.iter().map(|id| quote(id)).collect::<Vec<_>>().join("; ");
        writeln!(out, "  {{ rank=same; {members}; }}")?;
    }

    for edge in &graph.edges {
        match edge.kind {
            EdgeKind::Causal => {
                writeln!(out, "  {} -> {};", quote(&edge.from), quote(&edge.to))?
            }
            EdgeKind::LineOrder => writeln!(
                out,
                "  {} -> {} [style=invis];",
                quote(&edge.from),
                quote(&edge.to)
            )?,
        }
    }

    writeln!(out, "}}")?;
    Ok(())
}
