//! Walks the library surface on a small layout scenario and traces every
//! intermediate result.
//!
//! Run with `cargo run --example inspect`; set `RUST_LOG` to adjust
//! verbosity.

use planar::{Point, Rect, RectEdge};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let content = Rect::new(0.0, 0.0, 640.0, 480.0);
    info!(?content, "content area");

    let (sidebar, body) = content.divide(200.0, RectEdge::MinX);
    info!(?sidebar, ?body, "split off sidebar");

    let padded = body.inset(8.0, 8.0);
    info!(?padded, "inset body");

    let cursor = Point::new(320.0, 200.0);
    info!(hit = padded.contains_point(cursor), ?cursor, "hit-test");

    let panel = Rect::new(600.0, 440.0, 80.0, 80.0);
    let overlap = body.intersection(panel);
    info!(?overlap, clipped = !overlap.is_null(), "overlay panel clip");

    let bounds = sidebar.union(body).integral();
    info!(?bounds, "integral bounds of both panes");
}
