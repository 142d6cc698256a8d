//! 图的位置快照
//!
//! 去掉身份后只保留载荷顺序和边端点的位置，两张图结构相同当且仅当快照相等

use super::graph::Graph;
use super::vertex::VertexId;
use crate::error::{Endpoint, Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 位置快照
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphShape {
    /// 按顺序的顶点载荷
    pub payloads: Vec<i64>,
    /// 每条边的 (起点位置, 终点位置)
    pub edges: Vec<(usize, usize)>,
}

impl Graph {
    /// 生成位置快照
    ///
    /// 端点不在顶点列表中时返回 `Error::DanglingReference`。
    pub fn shape(&self) -> Result<GraphShape> {
        let mut positions: HashMap<VertexId, usize> = HashMap::with_capacity(self.vertices.len());
        for (i, v) in self.vertices.iter().enumerate() {
            positions.entry(v.id()).or_insert(i);
        }

        let lookup = |edge: usize, endpoint: Endpoint, vertex: VertexId| {
            positions
                .get(&vertex)
                .copied()
                .ok_or(Error::DanglingReference {
                    edge,
                    endpoint,
                    vertex,
                })
        };

        let edges = self
            .edges
            .iter()
            .enumerate()
            .map(|(i, e)| -> Result<(usize, usize)> {
                Ok((
                    lookup(i, Endpoint::Start, e.start())?,
                    lookup(i, Endpoint::End, e.end())?,
                ))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(GraphShape {
            payloads: self.vertices.iter().map(|v| v.payload()).collect(),
            edges,
        })
    }
}
