//! OBJ inspection example
//!
//! Loads a Wavefront OBJ file, converts it from the common Y-down export
//! convention into the Y-up rendering convention, and reports the
//! finished artifact's draw-dispatch metadata.
//!
//! Usage:
//!   cargo run --example obj_info -- <path_to_obj> [shape_name]

use std::path::Path;
use tessera_mesh::MeshBuilder;
use tessera_space::CoordinateSystem3D;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: obj_info <path_to_obj> [shape_name]");
        std::process::exit(1);
    };
    let shape_name = args.next();

    let mut builder =
        MeshBuilder::new(CoordinateSystem3D::Y_DOWN, CoordinateSystem3D::Y_UP);
    let model = builder.load_obj(Path::new(&path), shape_name.as_deref());

    println!("vertices:   {}", model.vertex_count());
    println!("indices:    {}", model.index_count());
    println!("triangles:  {}", model.triangle_count());
    println!("indexed:    {}", model.has_index_buffer());
    println!(
        "winding:    {}",
        if builder.converter().flips_handedness() {
            "reversed (handedness flip)"
        } else {
            "preserved"
        }
    );
}
