//! 图结构校验
//!
//! 检查图的不变量：顶点不重复、边不重复、每条边的端点都在顶点列表中。
//! 与深拷贝无关，供调用方在拷贝前后自行调用。

use crate::error::{Endpoint, Error, Result};
use crate::graph::{EdgeId, Graph, VertexId};
use std::collections::HashMap;

/// 校验图结构
///
/// 按以下顺序报告第一个错误：重复顶点、重复边、悬空端点（先起点后终点）。
pub fn validate(graph: &Graph) -> Result<()> {
    let mut vertex_positions: HashMap<VertexId, usize> =
        HashMap::with_capacity(graph.vertex_count());
    for (i, v) in graph.vertices().iter().enumerate() {
        if let Some(&first) = vertex_positions.get(&v.id()) {
            return Err(Error::DuplicateVertex { first, second: i });
        }
        vertex_positions.insert(v.id(), i);
    }

    let mut edge_positions: HashMap<EdgeId, usize> = HashMap::with_capacity(graph.edge_count());
    for (i, e) in graph.edges().iter().enumerate() {
        if let Some(&first) = edge_positions.get(&e.id()) {
            return Err(Error::DuplicateEdge { first, second: i });
        }
        edge_positions.insert(e.id(), i);
    }

    for (i, e) in graph.edges().iter().enumerate() {
        for (endpoint, vertex) in [(Endpoint::Start, e.start()), (Endpoint::End, e.end())] {
            if !vertex_positions.contains_key(&vertex) {
                return Err(Error::DanglingReference {
                    edge: i,
                    endpoint,
                    vertex,
                });
            }
        }
    }

    Ok(())
}

/// 图结构是否合法
pub fn is_valid(graph: &Graph) -> bool {
    validate(graph).is_ok()
}
