//! 图深拷贝
//!
//! 先平铺复制顶点并记录 原顶点 -> 新顶点 的对应关系，再按对应关系重建每条边。
//! 两遍都只遍历列表，不沿边递归，环路和自环不会导致不终止。

use super::edge::Edge;
use super::graph::Graph;
use super::vertex::{Vertex, VertexId};
use crate::error::{Endpoint, Error, Result};
use std::collections::HashMap;
use std::time::Instant;
use tracing::{debug, instrument, warn};

impl Graph {
    /// 深拷贝整张图
    ///
    /// 新图中的每个顶点和边都是新实例（新 ID），载荷与连接关系按位置保持：
    /// 原图第 i 条边指向第 k 个顶点，则新图第 i 条边指向新图第 k 个顶点。
    /// 多条边共享的端点在新图中仍共享同一个新顶点。
    ///
    /// 边的端点不在顶点列表中时返回 `Error::DanglingReference`，不返回部分结果。
    #[instrument(level = "debug", skip_all, fields(vertices = self.vertices.len(), edges = self.edges.len()))]
    pub fn deep_copy(&self) -> Result<Graph> {
        let started = Instant::now();

        let mut vertices = Vec::with_capacity(self.vertices.len());
        let mut correspondence: HashMap<VertexId, VertexId> =
            HashMap::with_capacity(self.vertices.len());

        for original in &self.vertices {
            let copy = Vertex::new(original.payload());
            correspondence.entry(original.id()).or_insert(copy.id());
            vertices.push(copy);
        }

        let resolve = |edge: usize, endpoint: Endpoint, vertex: VertexId| {
            correspondence.get(&vertex).copied().ok_or_else(|| {
                warn!(edge, %endpoint, vertex = vertex.as_u64(), "深拷贝遇到悬空引用");
                Error::DanglingReference {
                    edge,
                    endpoint,
                    vertex,
                }
            })
        };

        let mut edges = Vec::with_capacity(self.edges.len());
        for (i, original) in self.edges.iter().enumerate() {
            let start = resolve(i, Endpoint::Start, original.start())?;
            let end = resolve(i, Endpoint::End, original.end())?;
            edges.push(Edge::new(start, end));
        }

        debug!(
            vertices = vertices.len(),
            edges = edges.len(),
            elapsed_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX),
            "深拷贝完成"
        );

        Ok(Graph::from_parts(vertices, edges))
    }
}
