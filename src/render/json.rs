use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TraceGraphError};
use crate::viz::{VisData, VisEdge, VisNode, VisOptions};

/// Serialized form: data plus options, ready for `new vis.Network(...)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisDocument {
    pub nodes: Vec<VisNode>,
    pub edges: Vec<VisEdge>,
    pub options: VisOptions,
}

pub fn write_json<W: Write>(data: &VisData, options: &VisOptions, out: &mut W) -> Result<()> {
    let doc = VisDocument {
        nodes: data.nodes.clone(),
        edges: data.edges.clone(),
        options: options.clone(),
    };
    serde_json::to_writer_pretty(&mut *out, &doc)
        .map_err(|e| TraceGraphError::Write(e.into()))?;
    writeln!(out)?;
    Ok(())
}
