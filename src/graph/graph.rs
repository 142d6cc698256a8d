//! 图数据结构
//!
//! 图按插入顺序持有顶点和边，边通过顶点 ID 引用同一图中的顶点

use super::edge::{Edge, EdgeId};
use super::vertex::{Vertex, VertexId};

/// 有向图
///
/// 不变量：每条边的端点都在本图的顶点列表中；同一顶点或边不会出现两次。
/// 构造接口不做检查，需要时由 [`crate::validate`] 校验。
#[derive(Debug, Default)]
pub struct Graph {
    /// 顶点列表
    pub(crate) vertices: Vec<Vertex>,
    /// 边列表
    pub(crate) edges: Vec<Edge>,
}

impl Graph {
    /// 创建空图
    pub fn new() -> Self {
        Self::default()
    }

    /// 预分配容量
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            edges: Vec::with_capacity(edges),
        }
    }

    /// 由已有的顶点和边组装图
    pub fn from_parts(vertices: Vec<Vertex>, edges: Vec<Edge>) -> Self {
        Self { vertices, edges }
    }

    /// 拆分为顶点和边
    pub fn into_parts(self) -> (Vec<Vertex>, Vec<Edge>) {
        (self.vertices, self.edges)
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点
    pub fn add_vertex(&mut self, payload: i64) -> VertexId {
        let vertex = Vertex::new(payload);
        let id = vertex.id();
        self.vertices.push(vertex);
        id
    }

    /// 追加已有顶点
    pub fn push_vertex(&mut self, vertex: Vertex) {
        self.vertices.push(vertex);
    }

    /// 获取顶点列表
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// 获取顶点
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.iter().find(|v| v.id() == id)
    }

    /// 获取顶点在列表中的位置
    pub fn vertex_position(&self, id: VertexId) -> Option<usize> {
        self.vertices.iter().position(|v| v.id() == id)
    }

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    // ==================== 边操作 ====================

    /// 添加边
    ///
    /// 不检查端点是否属于本图。
    pub fn add_edge(&mut self, start: VertexId, end: VertexId) -> EdgeId {
        let edge = Edge::new(start, end);
        let id = edge.id();
        self.edges.push(edge);
        id
    }

    /// 追加已有边
    pub fn push_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    /// 获取边列表
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// 获取边数量
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// 没有顶点也没有边
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.edges.is_empty()
    }
}
