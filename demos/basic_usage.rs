use anyhow::{Context, Result};
use log::LevelFilter;
use vector_algebra::{AngleUnit, Vector, VectorError};

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Info)
        .parse_env(env_logger::Env::default().filter_or("VECTOR_ALGEBRA_LOG", "info"))
        .init();

    println!("Vector Algebra Demo");
    println!("===================\n");

    let v = "Vector: (3.039, 1.879)".parse::<Vector>()?;
    let w = Vector::new(vec![0.825, 2.036])?;
    println!("v = {}", v);
    println!("w = {}", w);

    println!("\nArithmetic");
    println!("  v + w      = {}", v.plus(&w)?);
    println!("  v - w      = {}", v.minus(&w)?);
    println!("  3.5 * v    = {}", v.scalar_mult(3.5));
    println!("  |v|        = {:.3}", v.magnitude());
    println!("  unit(v)    = {}", v.normalize()?);

    println!("\nProducts");
    println!("  v . w      = {:.3}", v.dot_product(&w)?);
    println!("  v x w      = {}", v.cross_product(&w)?);
    println!("  parallelogram area = {:.3}", v.area_parallelogram(&w)?);
    println!("  triangle area      = {:.3}", v.area_triangle(&w)?);

    println!("\nAngles");
    println!("  radians    = {:.3}", v.angle_between(&w, AngleUnit::Radians)?);
    println!("  degrees    = {:.3}", v.angle_between(&w, AngleUnit::Degrees)?);
    println!("  parallel   = {}", v.is_parallel(&w)?);
    println!("  orthogonal = {}", v.is_orthogonal(&w)?);

    println!("\nDecomposition onto w");
    let parallel = v
        .component_projection_vector(&w)
        .context("projecting v onto w")?;
    let orthogonal = v
        .component_orthogonal_vector(&w)
        .context("decomposing v against w")?;
    println!("  parallel   = {}", parallel);
    println!("  orthogonal = {}", orthogonal);

    println!("\nFailure cases");
    let zero = Vector::zeros(2)?;
    for result in [
        zero.normalize().map(|_| ()),
        v.component_projection_vector(&zero).map(|_| ()),
        v.component_orthogonal_vector(&zero).map(|_| ()),
        Vector::new(vec![1.0, 2.0, 3.0, 4.0])?
            .cross_product(&Vector::new(vec![4.0, 3.0, 2.0, 1.0])?)
            .map(|_| ()),
    ] {
        if let Err(e) = result {
            report(&e);
        }
    }

    Ok(())
}

fn report(e: &VectorError) {
    log::warn!("{:?} error: {}", e.kind(), e);
}
