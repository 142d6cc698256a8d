//! 图核心模块
//!
//! 定义顶点、边和图的核心数据结构，以及深拷贝

mod deep_copy;
mod edge;
mod graph;
mod shape;
mod vertex;

pub use edge::{Edge, EdgeId};
pub use graph::Graph;
pub use shape::GraphShape;
pub use vertex::{Vertex, VertexId};
