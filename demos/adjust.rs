//! Adjusts a cubic Bézier and an arc in each of the supported ways and logs
//! the resulting lengths and end points.
//!
//! ```text
//! cargo run --example adjust
//! RUST_LOG=parametric=debug cargo run --example adjust
//! ```

use std::f64::consts::{FRAC_PI_2, PI};

use parametric::geometry::{Arc, CubicBezier};
use parametric::math::{Point2, Point3, Vector3};
use parametric::{adjust, AdjustMethod, AdjustOptions, AdjustSide, ArcLength, EndValues};
use tracing::info;

const EPSILON: f64 = 1e-9;

fn report<P>(label: &str, curve: &P)
where
    P: ArcLength<Scalar = f64> + EndValues,
    P::Codomain: std::fmt::Debug,
{
    info!(
        length = curve.arc_length(EPSILON),
        start = ?curve.at_start(),
        end = ?curve.at_end(),
        "{label}"
    );
}

fn main() -> parametric::Result<()> {
    // Default: WARN for everything, INFO for this demo.
    // Override with RUST_LOG env var (e.g. RUST_LOG=parametric=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("adjust=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let bezier = CubicBezier::new(
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 2.0),
        Point2::new(3.0, -1.0),
        Point2::new(4.0, 0.0),
    );
    report("bezier", &bezier);

    let methods = [
        AdjustMethod::ByParam(0.2),
        AdjustMethod::ByParam(-0.2),
        AdjustMethod::ByAbsolute(1.0),
        AdjustMethod::ToAbsolute(3.0),
    ];
    for method in methods {
        for side in [AdjustSide::Start, AdjustSide::End, AdjustSide::Both] {
            let options = AdjustOptions::new(method, side, EPSILON)?;
            report(&format!("bezier {method:?} on {side:?}"), &adjust(&bezier, &options));
        }
    }

    let arc = Arc::new(Point3::origin(), 2.0, Vector3::z(), Vector3::x(), 0.0, FRAC_PI_2)?;
    report("arc", &arc);
    let options = AdjustOptions::new(AdjustMethod::ToAbsolute(PI), AdjustSide::Both, EPSILON)?;
    report("arc grown to a half circle", &adjust(&arc, &options));

    Ok(())
}
