//! Symmetry demo — runs the vertical-symmetry predicate on the reference
//! point sets and prints the verdicts to stdout.
//!
//! Usage:
//! ```text
//! cargo run --example symmetry
//! ```
//!
//! Logging defaults to WARN; override with the RUST_LOG env var
//! (e.g. RUST_LOG=symmetry=debug).

use axisym::math::symmetry_2d::vertical_symmetry_line_exists;
use axisym::math::Point2;

fn main() {
    // Default: WARN for everything, INFO for the demo and the kernel.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("symmetry=info".parse().unwrap_or_default())
        .add_directive("axisym=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cases: [(&str, Vec<Point2>); 5] = [
        ("empty", Vec::new()),
        ("single point", vec![Point2::new(1, 1)]),
        ("pair", vec![Point2::new(1, 1), Point2::new(2, 2)]),
        (
            "triple with center",
            vec![Point2::new(1, 1), Point2::new(2, 2), Point2::new(3, 3)],
        ),
        (
            "uneven spacing",
            vec![Point2::new(1, 1), Point2::new(2, 2), Point2::new(4, 3)],
        ),
    ];

    for (name, points) in &cases {
        let symmetric = vertical_symmetry_line_exists(points);
        tracing::info!(name, points = points.len(), symmetric, "case evaluated");
        println!("{name}: {symmetric}");
    }
}
