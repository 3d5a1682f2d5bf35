//! Break a few paths with tracing on and print what happened.
//!
//! Run with `RUST_LOG=pathkern=trace` to see every step.

use miette::IntoDiagnostic;
use pathkern::{Angle, Arc, Circle, Frame, Line, Path, move_temporary, pt};

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::DEBUG.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut paths: Vec<Path> = vec![
        Path::from(Line::new(pt(0.0, 0.0), pt(10.0, 0.0))).with_layer("cut"),
        Circle::new(pt(20.0, 0.0), 3.0).into(),
        Arc::new(pt(0.0, 10.0), 5.0, Angle(350.0), Angle(10.0)).into(),
    ];

    let mut pieces = Vec::new();
    let breaks = [pt(5.0, 0.0), pt(23.0, 0.0), pt(5.0, 10.0)];
    for (path, at) in paths.iter_mut().zip(breaks) {
        let broken = path.break_at_point(at)?;
        pieces.extend(broken.into_piece());
    }
    paths.extend(pieces);

    // an arc end point cannot be split off
    if let Err(err) = paths[2].break_at_angle(Angle(350.0)) {
        eprintln!("{:?}", miette::Report::new(err));
    }

    let lengths = move_temporary(&mut paths, &[Some(pt(1.0, 1.0))], |moved| {
        moved.iter().map(Path::length).sum::<f64>()
    });
    println!("total length {lengths:.3}");

    let frame = Frame::fit(&paths, 10.0)
        .into_diagnostic()?
        .ok_or_else(|| miette::miette!("nothing to draw"))?;
    for path in frame.apply_all(&paths) {
        println!("{path}");
    }
    Ok(())
}
