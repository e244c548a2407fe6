//! Build a quad mesh in container buffers and report the sizes a renderer
//! would hand to its graphics API, byte-for-byte.
//!
//! Run with `cargo run -p vessel-bench --example mesh_build`.

use vessel::VesselError;
use vessel_bench::{quad_indices, quad_vertices};

fn upload(target: &str, byte_len: usize) {
    println!("upload {target}: {byte_len} bytes");
}

fn main() -> Result<(), VesselError> {
    let mut vertices = quad_vertices();
    let mut indices = quad_indices();

    upload("vertex buffer", vertices.byte_len());
    upload("index buffer", indices.byte_len());

    for (i, [x, y, z]) in vertices.iter().enumerate() {
        println!("v{i}: ({x}, {y}, {z})");
    }
    let triangles = indices.len() / 3;
    println!("{triangles} triangles, {} indices", indices.len());

    indices.destroy()?;
    vertices.destroy()?;
    Ok(())
}
