//! vis-network 数据模型
//!
//! 设计目标：
//! - **结构化**：直接序列化为 vis-network 的 `{nodes, edges}` 和 options 对象
//! - **轻量**：不依赖运行时服务，布局/物理仿真全部交给前端库

mod options;
mod types;

pub use options::{
    EdgeOptions, HierarchicalLayout, HierarchicalRepulsion, InteractionOptions, LayoutOptions,
    PhysicsOptions, SmoothOptions, VisOptions,
};
pub use types::{VisColor, VisData, VisEdge, VisFont, VisNode};
