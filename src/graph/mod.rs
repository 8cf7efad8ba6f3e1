//! 图构建
//!
//! 把一条 `TraceMessage` 转成节点/边集合：每个事件一个真实节点，
//! 每个不同的行号一个不可见的虚拟节点，用于按行对齐布局。

mod build;
mod types;

pub use build::build_graph;
pub use types::{EdgeKind, GraphEdge, GraphNode, GraphSummary, NodeKind, TraceGraph};
