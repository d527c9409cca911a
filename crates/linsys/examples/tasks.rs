//! Worked exercises for vectors, lines, planes and linear systems.
//!
//! Run with: cargo run --example tasks
//! Set `RUST_LOG=linsys_solve=trace` to watch every row operation.

use linsys::prelude::*;
use linsys::solve::SystemError;
use log::LevelFilter;

fn v(values: &[&str]) -> Result<Vector, SystemError> {
    Ok(Vector::parse(values)?)
}

fn plane(normal: &[&str], k: &str) -> Result<Plane, SystemError> {
    Ok(Plane::new(v(normal)?, k.parse::<Scalar>()?)?)
}

fn line(normal: &[&str], k: &str) -> Result<Line, SystemError> {
    Ok(Line::new(v(normal)?, k.parse::<Scalar>()?)?)
}

fn main() -> Result<(), SystemError> {
    env_logger::Builder::new()
        .filter(Some("linsys_solve"), LevelFilter::Info)
        .parse_default_env()
        .init();

    let three = FormatConfig::fixed(3);

    vector_arithmetic(three)?;
    angles_and_projections(three)?;
    line_intersections(three)?;
    plane_relations()?;
    systems(three)?;
    Ok(())
}

fn vector_arithmetic(config: FormatConfig) -> Result<(), SystemError> {
    println!("\n=== Vector arithmetic ===");
    let sum = v(&["8.218", "-9.341"])?.add(&v(&["-1.129", "2.111"])?)?;
    let difference = v(&["7.119", "8.215"])?.subtract(&v(&["-8.223", "0.878"])?)?;
    let scaled = v(&["1.671", "-1.012", "-0.318"])?.scale(&"7.41".parse()?);
    println!("{sum}\n{difference}\n{scaled}");

    println!("{}", v(&["-0.221", "7.437"])?.magnitude().format_fixed(3));
    println!("{}", v(&["8.813", "-1.331", "-6.247"])?.magnitude().format_fixed(3));
    println!("{}", v(&["5.581", "-2.136"])?.unit().display_with(config));
    println!("{}", v(&["1.996", "3.108", "-4.554"])?.unit().display_with(config));
    Ok(())
}

fn angles_and_projections(config: FormatConfig) -> Result<(), SystemError> {
    println!("\n=== Angles, parallelism and projections ===");
    let a = v(&["7.887", "4.138"])?;
    let b = v(&["-8.802", "6.776"])?;
    println!("dot = {}", a.dot(&b)?);
    println!(
        "angle = {} rad",
        v(&["3.183", "-7.627"])?.angle_to(&v(&["-2.668", "5.319"])?)?.format_fixed(3)
    );
    println!(
        "angle = {} deg",
        v(&["7.35", "0.221", "5.188"])?
            .angle_to_degrees(&v(&["2.751", "8.259", "3.985"])?)?
            .format_fixed(3)
    );

    let pairs = [
        (v(&["-7.579", "-7.88"])?, v(&["22.737", "23.64"])?),
        (v(&["-2.029", "9.97", "4.172"])?, v(&["-9.231", "-6.639", "-7.245"])?),
        (v(&["-2.328", "-7.284", "-1.214"])?, v(&["-1.821", "1.072", "-2.94"])?),
        (v(&["2.118", "4.827"])?, v(&["0", "0"])?),
    ];
    for (a, b) in &pairs {
        println!(
            "parallel: {}, orthogonal: {}",
            a.is_parallel(b)?,
            a.is_orthogonal(b)?
        );
    }

    let projection = v(&["3.039", "1.879"])?.project_on(&v(&["0.825", "2.036"])?)?;
    println!("parallel component {}", projection.parallel.display_with(config));
    let projection = v(&["-9.88", "-3.264", "-8.159"])?.project_on(&v(&["-2.155", "-9.353", "-9.473"])?)?;
    println!("orthogonal component {}", projection.orthogonal.display_with(config));

    let cross = v(&["8.462", "7.893", "-8.187"])?.cross(&v(&["6.984", "-5.975", "4.778"])?)?;
    println!("cross product {}", cross.display_with(config));
    Ok(())
}

fn line_intersections(config: FormatConfig) -> Result<(), SystemError> {
    println!("\n=== Line intersections ===");
    let pairs = [
        (line(&["4.046", "2.836"], "1.21")?, line(&["10.115", "7.09"], "3.025")?),
        (line(&["7.204", "3.182"], "8.68")?, line(&["8.172", "4.114"], "9.883")?),
        (line(&["1.182", "5.562"], "6.744")?, line(&["1.773", "8.343"], "9.525")?),
    ];
    for (a, b) in &pairs {
        match a.intersection(b)? {
            Intersection::Point(p) => println!("{a} meets {b} at {}", p.display_with(config)),
            Intersection::Coincident(_) => println!("{a} and {b} are the same line"),
            Intersection::Empty => println!("{a} and {b} never meet"),
        }
    }
    Ok(())
}

fn plane_relations() -> Result<(), SystemError> {
    println!("\n=== Planes ===");
    let pairs = [
        (
            plane(&["-0.412", "3.806", "0.728"], "-3.46")?,
            plane(&["1.03", "-9.515", "-1.82"], "8.65")?,
        ),
        (
            plane(&["2.611", "5.528", "0.283"], "4.6")?,
            plane(&["7.715", "8.306", "5.342"], "3.76")?,
        ),
        (
            plane(&["-7.926", "8.625", "-7.212"], "-7.952")?,
            plane(&["-2.642", "2.875", "-2.404"], "-2.443")?,
        ),
    ];
    for (a, b) in &pairs {
        println!("equal: {}, parallel: {}", a == b, a.is_parallel(b)?);
    }
    Ok(())
}

fn systems(config: FormatConfig) -> Result<(), SystemError> {
    println!("\n=== Linear systems ===");
    let systems = [
        vec![
            plane(&["5.862", "1.178", "-10.366"], "-8.15")?,
            plane(&["-2.931", "-0.589", "5.183"], "-4.075")?,
        ],
        vec![
            plane(&["8.631", "5.112", "-1.816"], "-5.113")?,
            plane(&["4.315", "11.132", "-5.27"], "-6.775")?,
            plane(&["-2.158", "3.01", "-1.727"], "-0.831")?,
        ],
        vec![
            plane(&["5.262", "2.739", "-9.878"], "-3.441")?,
            plane(&["5.111", "6.358", "7.638"], "-2.152")?,
            plane(&["2.016", "-9.924", "-1.367"], "-9.278")?,
            plane(&["2.167", "-13.543", "-18.883"], "-10.567")?,
        ],
        vec![
            plane(&["0.786", "0.786", "0.588"], "-0.714")?,
            plane(&["-0.138", "-0.138", "0.244"], "0.319")?,
        ],
    ];
    for rows in systems {
        let system = LinearSystem::new(rows)?;
        println!("{}", system.display_with(config));
        println!("{}\n", system.solve()?.display_with(config));
    }
    Ok(())
}
