//! 错误类型定义

use crate::graph::VertexId;
use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// 边的端点
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => write!(f, "起点"),
            Endpoint::End => write!(f, "终点"),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("悬空引用: 边 {edge} 的{endpoint} {vertex:?} 不在顶点列表中")]
    DanglingReference {
        edge: usize,
        endpoint: Endpoint,
        vertex: VertexId,
    },

    #[error("重复顶点: 位置 {first} 与 {second}")]
    DuplicateVertex { first: usize, second: usize },

    #[error("重复边: 位置 {first} 与 {second}")]
    DuplicateEdge { first: usize, second: usize },
}
