//! 错误类型
//!
//! 解析、构图和输出阶段共用一个错误枚举。

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TraceGraphError {
    /// message / config JSON 无法解析
    #[error("failed to parse {what}: {source}")]
    Parse {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("i/o error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),

    /// vis-network 拒绝重复 id 的节点
    #[error("duplicate node id {id:?} ({first} vs {second})")]
    DuplicateNodeId {
        id: String,
        first: &'static str,
        second: &'static str,
    },

    #[error("edge {from:?} -> {to:?} references unknown node {missing:?}")]
    DanglingEdge {
        from: String,
        to: String,
        missing: String,
    },
}

impl TraceGraphError {
    pub fn parse(what: &'static str, source: serde_json::Error) -> Self {
        TraceGraphError::Parse { what, source }
    }

    pub fn io(path: impl Into<String>, source: io::Error) -> Self {
        TraceGraphError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, TraceGraphError>;
