//! 边定义
//!
//! 边通过顶点 ID 引用起点和终点，不拥有顶点

use crate::graph::vertex::VertexId;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// 下一个边 ID（进程内全局唯一）
static NEXT_EDGE_ID: AtomicU64 = AtomicU64::new(1);

/// 边 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeId(pub u64);

impl EdgeId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub(crate) fn next() -> Self {
        Self(NEXT_EDGE_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for EdgeId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// 有向边
#[derive(Debug, PartialEq, Eq)]
pub struct Edge {
    /// 边 ID
    id: EdgeId,
    /// 起点
    start: VertexId,
    /// 终点
    end: VertexId,
}

impl Edge {
    /// 创建新边（分配新的身份）
    pub fn new(start: VertexId, end: VertexId) -> Self {
        Self {
            id: EdgeId::next(),
            start,
            end,
        }
    }

    /// 以已有 ID 重建边
    ///
    /// 全局计数器会推进到该 ID 之后。
    pub fn from_raw(id: EdgeId, start: VertexId, end: VertexId) -> Self {
        NEXT_EDGE_ID.fetch_max(id.0.saturating_add(1), Ordering::Relaxed);
        Self { id, start, end }
    }

    /// 获取边 ID
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// 获取起点
    pub fn start(&self) -> VertexId {
        self.start
    }

    /// 获取终点
    pub fn end(&self) -> VertexId {
        self.end
    }

    /// 是否为自环
    pub fn is_self_loop(&self) -> bool {
        self.start == self.end
    }
}
