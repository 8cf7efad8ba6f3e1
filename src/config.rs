//! 渲染配置
//!
//! 背景色等参数在构造 `GraphRenderer` 时显式传入，不做全局查找。

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TraceGraphError};

pub const DEFAULT_CONTAINER_ID: &str = "vis";
pub const DEFAULT_BACKGROUND: &str = "#ffffff";
pub const DEFAULT_VIS_JS_URL: &str =
    "https://unpkg.com/vis-network/standalone/umd/vis-network.min.js";

/// What to do with a causal edge whose endpoint is not an event node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DanglingPolicy {
    /// 丢弃该边并记录 warn
    #[default]
    Drop,
    /// 原样输出，由渲染库决定如何处理
    Keep,
    Error,
}

/// Options that influence graph construction.
#[derive(Debug, Clone)]
pub struct GraphOptions {
    /// Color used for line-number nodes so they blend into the page.
    pub background_color: String,
    pub dangling: DanglingPolicy,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            background_color: DEFAULT_BACKGROUND.to_string(),
            dangling: DanglingPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub container_id: String,
    pub background_color: String,
    pub dangling: DanglingPolicy,
    pub vis_js_url: String,
    pub title: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            background_color: DEFAULT_BACKGROUND.to_string(),
            dangling: DanglingPolicy::default(),
            vis_js_url: DEFAULT_VIS_JS_URL.to_string(),
            title: "Trace graph".to_string(),
        }
    }
}

impl RenderConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| TraceGraphError::parse("render config", e))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|e| TraceGraphError::io(path.display().to_string(), e))?;
        Self::from_json(&raw)
    }

    pub fn graph_options(&self) -> GraphOptions {
        GraphOptions {
            background_color: self.background_color.clone(),
            dangling: self.dangling,
        }
    }
}
