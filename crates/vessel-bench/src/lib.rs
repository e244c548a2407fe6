//! Benchmark scenarios and demo data for the vessel container.
//!
//! Provides pre-built containers so benches and examples share one
//! construction path:
//!
//! - [`sequential_values`]: `0..n` pushed one by one
//! - [`scattered_values`]: seeded pseudo-random values in `0..1_000_000`
//! - [`quad_vertices`] / [`quad_indices`]: a two-triangle quad mesh

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use vessel::Vessel;

/// Vertex position for the demo mesh, one XYZ triple per element.
pub type Position = [f32; 3];

/// Build an active container holding `0..n` in push order.
pub fn sequential_values(n: i32) -> Vessel<i32> {
    let mut values = Vessel::new();
    values.init();
    for i in 0..n {
        values.push_back(i).unwrap();
    }
    values
}

/// Build an active container of `n` seeded pseudo-random values drawn
/// from `0..1_000_000`, so negative probes are guaranteed misses.
pub fn scattered_values(n: usize, seed: u64) -> Vessel<i32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut values = Vessel::new();
    values.init();
    values.reserve(n).unwrap();
    for _ in 0..n {
        values.push_back(rng.random_range(0..1_000_000)).unwrap();
    }
    values
}

/// Build the vertex positions of a unit quad, in the layout a renderer
/// would upload verbatim.
pub fn quad_vertices() -> Vessel<Position> {
    let mut vertices = Vessel::new();
    vertices.init();
    vertices
        .extend_from_slice(&[
            [-0.5, -0.5, 0.0],
            [0.5, -0.5, 0.0],
            [0.5, 0.5, 0.0],
            [-0.5, 0.5, 0.0],
        ])
        .unwrap();
    vertices
}

/// Build the index list drawing the quad as two triangles.
pub fn quad_indices() -> Vessel<u32> {
    let mut indices = Vessel::new();
    indices.init();
    indices.extend_from_slice(&[0, 1, 2, 2, 3, 0]).unwrap();
    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_values_are_ordered() {
        let values = sequential_values(10);
        assert_eq!(values.len(), 10);
        assert_eq!(*values.front(), 0);
        assert_eq!(*values.back(), 9);
    }

    #[test]
    fn scattered_values_are_deterministic_per_seed() {
        let a = scattered_values(64, 42);
        let b = scattered_values(64, 42);
        assert_eq!(a.as_slice(), b.as_slice());
        assert!(a.iter().all(|&x| (0..1_000_000).contains(&x)));
        // A different seed must produce a different stream.
        let c = scattered_values(64, 43);
        assert_ne!(a.as_slice(), c.as_slice());
    }

    #[test]
    fn quad_mesh_has_four_vertices_and_two_triangles() {
        let vertices = quad_vertices();
        let indices = quad_indices();
        assert_eq!(vertices.len(), 4);
        assert_eq!(indices.len(), 6);
        assert_eq!(vertices.byte_len(), 4 * 3 * 4);
        assert_eq!(indices.byte_len(), 6 * 4);
        assert!(indices.iter().all(|&i| (i as usize) < vertices.len()));
    }
}
