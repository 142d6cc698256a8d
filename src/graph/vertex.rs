//! 顶点定义
//!
//! 顶点只携带一个整数载荷，身份由 `VertexId` 决定

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// 下一个顶点 ID（进程内全局唯一）
static NEXT_VERTEX_ID: AtomicU64 = AtomicU64::new(1);

/// 顶点 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VertexId(pub u64);

impl VertexId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// 分配一个未被使用过的 ID
    pub(crate) fn next() -> Self {
        Self(NEXT_VERTEX_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for VertexId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// 顶点
///
/// 不实现 `Clone`：复制值会连同身份一起复制。需要新实例时使用
/// `Vertex::new` 或 `Graph::deep_copy`。
#[derive(Debug, PartialEq, Eq)]
pub struct Vertex {
    /// 顶点 ID
    id: VertexId,
    /// 载荷
    payload: i64,
}

impl Vertex {
    /// 创建新顶点（分配新的身份）
    pub fn new(payload: i64) -> Self {
        Self {
            id: VertexId::next(),
            payload,
        }
    }

    /// 以已有 ID 重建顶点
    ///
    /// 调用方负责保证 ID 的唯一性；同一 ID 出现两次即视为同一个顶点。
    /// 全局计数器会推进到该 ID 之后，之后分配的 ID 不会与之重复。
    pub fn from_raw(id: VertexId, payload: i64) -> Self {
        NEXT_VERTEX_ID.fetch_max(id.0.saturating_add(1), Ordering::Relaxed);
        Self { id, payload }
    }

    /// 获取顶点 ID
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// 获取载荷
    pub fn payload(&self) -> i64 {
        self.payload
    }
}
