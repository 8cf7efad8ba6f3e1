//! 固定的 vis-network options：自上而下分层布局，禁止拖拽节点，
//! 竖直方向的 cubic-bezier 边，hierarchicalRepulsion 物理避免重叠。

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchicalLayout {
    pub enabled: bool,
    /// `UD` = top-down
    pub direction: String,
    pub sort_method: String,
    pub level_separation: u32,
    pub node_spacing: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutOptions {
    pub hierarchical: HierarchicalLayout,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmoothOptions {
    #[serde(rename = "type")]
    pub kind: String,
    pub force_direction: String,
    pub roundness: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeOptions {
    pub arrows: String,
    pub smooth: SmoothOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchicalRepulsion {
    pub node_distance: u32,
    pub avoid_overlap: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicsOptions {
    pub solver: String,
    pub hierarchical_repulsion: HierarchicalRepulsion,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionOptions {
    pub drag_nodes: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisOptions {
    pub layout: LayoutOptions,
    pub edges: EdgeOptions,
    pub physics: PhysicsOptions,
    pub interaction: InteractionOptions,
}

impl VisOptions {
    pub fn hierarchical_trace() -> Self {
        Self {
            layout: LayoutOptions {
                hierarchical: HierarchicalLayout {
                    enabled: true,
                    direction: "UD".to_string(),
                    sort_method: "directed".to_string(),
                    level_separation: 100,
                    node_spacing: 150,
                },
            },
            edges: EdgeOptions {
                arrows: "to".to_string(),
                smooth: SmoothOptions {
                    kind: "cubicBezier".to_string(),
                    force_direction: "vertical".to_string(),
                    roundness: 0.4,
                },
            },
            physics: PhysicsOptions {
                solver: "hierarchicalRepulsion".to_string(),
                hierarchical_repulsion: HierarchicalRepulsion {
                    node_distance: 140,
                    avoid_overlap: 1.0,
                },
            },
            interaction: InteractionOptions { drag_nodes: false },
        }
    }
}

impl Default for VisOptions {
    fn default() -> Self {
        Self::hierarchical_trace()
    }
}
