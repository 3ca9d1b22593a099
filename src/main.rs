// ./src/main.rs
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use tracker_layout::debug::visualization::svg::save_layout_svg;
use tracker_layout::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run() {
        error!("Layout demo failed: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    // L-förmiges Grundstück mit einem Gebäude und einem Baum als Ausschlüsse
    let net_area_ring = vec![
        Point2D::new(0.0, 0.0),
        Point2D::new(120.0, 0.0),
        Point2D::new(120.0, 60.0),
        Point2D::new(70.0, 60.0),
        Point2D::new(70.0, 100.0),
        Point2D::new(0.0, 100.0),
    ];
    let tree = Tessellator::default().tessellate_circle(Point2D::new(95.0, 25.0), 6.0)?;
    let exclusion_rings = vec![
        vec![
            Point2D::new(20.0, 30.0),
            Point2D::new(45.0, 30.0),
            Point2D::new(45.0, 55.0),
            Point2D::new(20.0, 55.0),
        ],
        tree,
    ];

    let tracker = TrackerSpec::new(2.4, 45.0, 22.5)?;
    let config = LayoutConfig::default();

    for strategy in [ContainmentStrategy::PolygonSet, ContainmentStrategy::combined()] {
        let result = run_layout(&net_area_ring, &exclusion_rings, &tracker, &config, strategy)?;
        info!("Strategy {:?}", strategy);
        println!("{result}");
    }

    let input = LayoutInput::from_rings(&net_area_ring, &exclusion_rings)?;
    let result = layout(&input.build_domain(ContainmentStrategy::PolygonSet)?, &tracker, &config)?;
    save_layout_svg("layout_debug.svg", input.net_area(), input.exclusions(), &result)?;

    Ok(())
}
