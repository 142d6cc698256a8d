//! graphcopy - 有向图的深拷贝
//!
//! 顶点与边以句柄（ID）表示身份，图按顺序持有顶点和边：
//! - `Graph::deep_copy` 生成与原图完全独立的新图，保持自环、共享端点和环路
//! - `validate` 检查图的结构不变量（端点归属、无重复实例）
//! - `GraphShape` 给出与身份无关的位置快照，便于比较拷贝前后的结构

pub mod error;
pub mod graph;
pub mod validate;

// 重导出常用类型
pub use error::{Endpoint, Error, Result};
pub use graph::{Edge, EdgeId, Graph, GraphShape, Vertex, VertexId};
pub use validate::{is_valid, validate};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
