//! 集成测试公共工具
//!
//! 随机图生成、日志初始化，以及拷贝前后的结构检查

#![allow(dead_code)]

use graphcopy::{validate, Graph, GraphShape};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化日志，级别由 RUST_LOG 控制，默认 info
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_test_writer()
        .try_init();
}

/// 随机图参数
#[derive(Debug, Clone, Copy)]
pub struct RandomGraph {
    pub vertices: usize,
    pub edges: usize,
    pub seed: u64,
}

impl RandomGraph {
    pub fn new(vertices: usize, edges: usize) -> Self {
        Self {
            vertices,
            edges,
            seed: 0,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// 生成图：载荷取 32 位有符号整数范围，端点随机，允许自环和重复边
    pub fn build(&self) -> Graph {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut graph = Graph::with_capacity(self.vertices, self.edges);

        let ids: Vec<_> = (0..self.vertices)
            .map(|_| graph.add_vertex(rng.gen_range(i32::MIN as i64..=i32::MAX as i64)))
            .collect();

        if !ids.is_empty() {
            for _ in 0..self.edges {
                let start = ids[rng.gen_range(0..ids.len())];
                let end = ids[rng.gen_range(0..ids.len())];
                graph.add_edge(start, end);
            }
        }

        graph
    }
}

/// 执行一次深拷贝并检查全部保证，返回拷贝结果
pub fn exercise_copy(graph: &Graph, label: &str) -> Graph {
    init_tracing();
    validate(graph).unwrap();

    let before = graph.shape().unwrap();

    let started = Instant::now();
    let copy = graph.deep_copy().unwrap();
    let elapsed = started.elapsed();
    info!(
        "{:20} | {:6} V | {:7} E | {:.3} ms",
        label,
        graph.vertex_count(),
        graph.edge_count(),
        elapsed.as_secs_f64() * 1000.0
    );

    // 原图不变
    assert_shape_eq(&graph.shape().unwrap(), &before);

    // 拷贝合法且结构相同
    validate(&copy).unwrap();
    assert_shape_eq(&copy.shape().unwrap(), &before);

    assert_disjoint(graph, &copy);
    copy
}

/// 两张图没有共享任何顶点或边实例
pub fn assert_disjoint(a: &Graph, b: &Graph) {
    assert!(!std::ptr::eq(a, b));
    if !a.vertices().is_empty() {
        assert!(!std::ptr::eq(a.vertices(), b.vertices()));
    }
    if !a.edges().is_empty() {
        assert!(!std::ptr::eq(a.edges(), b.edges()));
    }

    let vertex_ids: HashSet<_> = a.vertices().iter().map(|v| v.id()).collect();
    assert!(b.vertices().iter().all(|v| !vertex_ids.contains(&v.id())));

    let edge_ids: HashSet<_> = a.edges().iter().map(|e| e.id()).collect();
    assert!(b.edges().iter().all(|e| !edge_ids.contains(&e.id())));
}

/// 比较快照，失败时输出 JSON 便于排查
pub fn assert_shape_eq(actual: &GraphShape, expected: &GraphShape) {
    if actual != expected {
        panic!(
            "结构不一致\n实际: {}\n期望: {}",
            serde_json::to_string(actual).unwrap_or_default(),
            serde_json::to_string(expected).unwrap_or_default()
        );
    }
}
