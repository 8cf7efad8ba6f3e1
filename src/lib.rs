pub mod config;
pub mod error;
pub mod graph;
pub mod model;
pub mod render;
pub mod viz;

pub use config::{DanglingPolicy, GraphOptions, RenderConfig};
pub use error::{Result, TraceGraphError};
pub use graph::{TraceGraph, build_graph};
pub use model::{Event, TraceMessage};
pub use render::{GraphRenderer, OutputFormat};

#[cfg(test)]
mod test;
