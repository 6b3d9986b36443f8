//! Console demo for the vector and matrix types
//!
//! Prints the vector operations, the matrix factories and a few transforms.
//! Set `RUST_LOG=trace` to see the library's own diagnostics.

use tracing_subscriber::EnvFilter;
use transform3d::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("Vector & Matrix Demo");
    println!("====================");

    show_vector_ops();
    show_matrix_ops();
    show_transforms();
    show_matrix3_ops()?;

    tracing::info!(version = transform3d::VERSION, "demo complete");
    Ok(())
}

fn show_vector_ops() {
    println!("\n--- Vector Ops ---");

    let v1: Vector3 = Vector3::new(3.0, 4.0, 5.0);
    let v2: Vector3 = Vector3::new(1.0, 2.0, 3.0);

    println!("v1 = {}", v1);
    println!("v2 = {}", v2);
    println!("v1 + v2 = {}", v1 + v2);
    println!("v1 - v2 = {}", v1 - v2);
    println!("dot(v1,v2) = {:.2}", v1.dot(&v2));
    println!("cross(v1,v2) = {}", v1.cross(&v2));
    println!("|v1| = {:.2}", v1.magnitude());
    println!("normalized v1 = {}", v1.normalize());
}

fn show_matrix_ops() {
    println!("\n--- Matrix Ops ---");

    let id = Matrix4::<f32>::identity();
    let scale: Matrix4 = Matrix4::scale(2.0, 3.0, 4.0);
    let rot: Matrix4 = Matrix4::rotation_z(45.0);
    let trans: Matrix4 = Matrix4::translation(5.0, 1.0, -2.0);

    println!("Identity:\n{}", id);
    println!("Scale (2,3,4):\n{}", scale);
    println!("Rotate Z 45 deg:\n{}", rot);
    println!("Translate (5,1,-2):\n{}", trans);

    let combo = trans * rot * scale;
    println!("Combined (T*R*S):\n{}", combo);
    println!("Row-major uniform buffer: {:?}", combo.to_row_major_array());
}

fn show_transforms() {
    println!("\n--- Transforms ---");

    let v: Vector3 = Vector3::new(1.0, 0.0, 0.0);

    let scale = Matrix4::scale(2.0, 2.0, 2.0);
    let rot_y = Matrix4::rotation_y(90.0);
    let trans = Matrix4::translation(3.0, 0.0, 0.0);

    println!("v = {}", v);
    println!("Scaled: {}", scale.transform_direction(v));
    println!("RotY 90 deg: {}", rot_y.transform_direction(v));
    println!("Translated point: {}", trans.transform_point(v));
    println!("Translated direction: {}", trans.transform_direction(v));
}

fn show_matrix3_ops() -> Result<(), ShapeError> {
    println!("\n--- Matrix3 Ops ---");

    let rot_x = Matrix3::rotation_x(90.0);
    let scale = Matrix3::scale(1.0, 2.0, 3.0);
    println!("Rotate X 90 deg:\n{}", rot_x);
    println!("Scale (1,2,3):\n{}", scale);

    let v: Vector3 = Vector3::new(0.0, 1.0, 0.0);
    println!("(R*S) * {} = {}", v, (rot_x * scale).multiply_vector(v));

    let grid = vec![vec![1.0_f32, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
    match Matrix3::<f32>::try_from_rows(&grid) {
        Ok(m) => println!("Unexpectedly built:\n{}", m),
        Err(e) => {
            tracing::warn!(error = %e, "rejected malformed grid");
            println!("Malformed grid rejected: {}", e);
        }
    }

    let m = Matrix3::<f32>::try_from_rows(&[[0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]])?;
    println!("Swap XY:\n{}", m);
    Ok(())
}
