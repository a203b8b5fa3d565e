//! Benchmarks for one-shot and stepwise search over lattice graphs.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use graph_astar::{AStar, SearchConfig};
use graph_model::{Graph, NodeId};
use nalgebra::Point3;

/// Build a `size × size` 4-connected lattice with unit spacing.
fn lattice(size: i32) -> (Graph<()>, NodeId, NodeId) {
    let mut graph = Graph::new();
    let mut ids = Vec::new();
    for y in 0..size {
        for x in 0..size {
            ids.push(graph.add_node_at(Point3::new(f64::from(x), f64::from(y), 0.0)));
        }
    }
    let index = |x: i32, y: i32| ids[(y * size + x) as usize];
    for y in 0..size {
        for x in 0..size {
            if x + 1 < size {
                let _ = graph.add_bidirectional(index(x, y), index(x + 1, y), 1.0);
            }
            if y + 1 < size {
                let _ = graph.add_bidirectional(index(x, y), index(x, y + 1), 1.0);
            }
        }
    }
    let start = ids[0];
    let goal = ids[ids.len() - 1];
    (graph, start, goal)
}

fn bench_search_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_path");
    for size in [10, 20, 40] {
        let (graph, start, goal) = lattice(size);
        group.bench_with_input(BenchmarkId::new("astar", size), &size, |b, _| {
            b.iter(|| {
                let mut search = AStar::new(&graph, SearchConfig::default());
                search.search_path(start, goal)
            });
        });
        group.bench_with_input(BenchmarkId::new("dijkstra", size), &size, |b, _| {
            b.iter(|| {
                let mut search = AStar::new(&graph, SearchConfig::dijkstra());
                search.search_path(start, goal)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_search_path);
criterion_main!(benches);
