//! 输出
//!
//! `GraphRenderer` 每收到一条 message 就整体重建图，然后按所选格式写出：
//! 独立 HTML 页面（vis-network）、JSON 或 Graphviz DOT。

mod dot;
mod html;
mod json;

use std::io::Write;

use tracing::info;

use crate::config::RenderConfig;
use crate::error::Result;
use crate::graph::{TraceGraph, build_graph};
use crate::model::TraceMessage;
use crate::viz::{VisData, VisOptions};

pub use dot::write_dot;
pub use html::write_html;
pub use json::{VisDocument, write_json};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Html,
    Json,
    Dot,
}

/// Turns trace messages into a rendered graph.
///
/// Holds only the latest graph: each message replaces it wholesale.
#[derive(Debug)]
pub struct GraphRenderer {
    config: RenderConfig,
    options: VisOptions,
    graph: TraceGraph,
    messages: u64,
}

impl GraphRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            config,
            options: VisOptions::hierarchical_trace(),
            graph: TraceGraph::default(),
            messages: 0,
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn options(&self) -> &VisOptions {
        &self.options
    }

    pub fn graph(&self) -> &TraceGraph {
        &self.graph
    }

    /// Number of messages successfully rendered so far.
    pub fn messages(&self) -> u64 {
        self.messages
    }

    pub fn on_message(&mut self, msg: &TraceMessage) -> Result<&TraceGraph> {
        let graph = build_graph(msg, &self.config.graph_options())?;
        self.messages += 1;
        let summary = graph.summary();
        info!(
            seq = self.messages,
            events = msg.event_count(),
            nodes = summary.nodes(),
            edges = summary.edges(),
            "graph rebuilt"
        );
        self.graph = graph;
        Ok(&self.graph)
    }

    pub fn on_raw_message(&mut self, raw: &str) -> Result<&TraceGraph> {
        let msg = TraceMessage::from_json(raw)?;
        self.on_message(&msg)
    }

    pub fn vis_data(&self) -> VisData {
        VisData::from(&self.graph)
    }

    pub fn render<W: Write>(&self, format: OutputFormat, out: &mut W) -> Result<()> {
        match format {
            OutputFormat::Html => write_html(&self.vis_data(), &self.options, &self.config, out),
            OutputFormat::Json => write_json(&self.vis_data(), &self.options, out),
            OutputFormat::Dot => write_dot(&self.graph, out),
        }
    }

    pub fn render_to_string(&self, format: OutputFormat) -> Result<String> {
        let mut buf = Vec::new();
        self.render(format, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
