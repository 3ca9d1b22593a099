// src/debug/visualization/svg.rs
use crate::layout::{LayoutResult, PlacementKind, PlacementRectangle};
use crate::math::geometry::polygon::Polygon;
use crate::math::types::{Bounds2D, Point2D};
use std::path::Path;
use svg::Document;
use svg::node::element::{Group, Polygon as SvgPolygon, Rectangle};
use tracing::info;

// ===================================================================================
// 1. HILFS-STRUCT für die SVG-Erstellung
// ===================================================================================
/// Baut ein SVG-Dokument in Weltkoordinaten. Die Y-Achse wird gespiegelt, damit Norden oben liegt.
struct SvgBuilder {
    document: Document,
    stroke_w_normal: f64,
    stroke_w_thin: f64,
}

impl SvgBuilder {
    fn new(display_bounds: &Bounds2D, svg_pixel_size: f64) -> Self {
        let width = display_bounds.width();
        let height = display_bounds.height();
        let stroke_w_normal = (width + height) / 2.0 * 0.004;
        let stroke_w_thin = (width + height) / 2.0 * 0.0015;

        let view_box = (
            display_bounds.min.x,
            flip_y(display_bounds.max.y),
            width,
            height,
        );
        let background = Rectangle::new()
            .set("x", display_bounds.min.x)
            .set("y", flip_y(display_bounds.max.y))
            .set("width", width)
            .set("height", height)
            .set("fill", "#f0f0f0");

        let document = Document::new()
            .set("width", svg_pixel_size)
            .set("height", svg_pixel_size)
            .set("viewBox", view_box)
            .add(background);

        Self {
            document,
            stroke_w_normal,
            stroke_w_thin,
        }
    }

    fn add(mut self, group: Group) -> Self {
        self.document = self.document.add(group);
        self
    }

    fn finish(self) -> Document {
        self.document
    }
}

fn flip_y(y: f64) -> f64 {
    0.0 - y
}

fn points_attribute(vertices: &[Point2D]) -> String {
    vertices
        .iter()
        .map(|p| format!("{:.3},{:.3}", p.x, flip_y(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn outline(vertices: &[Point2D], fill: &str, stroke: &str, stroke_width: f64) -> SvgPolygon {
    SvgPolygon::new()
        .set("points", points_attribute(vertices))
        .set("fill", fill)
        .set("stroke", stroke)
        .set("stroke-width", stroke_width)
}

fn placement_group(
    kind: PlacementKind,
    placements: &[PlacementRectangle],
    stroke_width: f64,
) -> Group {
    let color = kind.color_hex();
    placements
        .iter()
        .filter(|placement| placement.kind() == kind)
        .fold(Group::new().set("id", kind.layer_name()), |group, placement| {
            group.add(
                outline(&placement.corners(), &color, &color, stroke_width)
                    .set("fill-opacity", 0.6),
            )
        })
}

// ===================================================================================
// 2. ÖFFENTLICHE API
// ===================================================================================
/// Zeichnet Nettofläche, Ausschlüsse und alle Platzierungen (nach Variante eingefärbt).
pub fn render_layout_svg(
    net_area: &Polygon,
    exclusions: &[Polygon],
    result: &LayoutResult,
    svg_pixel_size: f64,
) -> Document {
    let net_bounds = net_area.bounds();
    let margin = (net_bounds.width().max(net_bounds.height()) * 0.05).max(1.0);
    let svg = SvgBuilder::new(&net_bounds.expand(margin), svg_pixel_size);

    let net_group = Group::new().set("id", "NET_AREA").add(outline(
        net_area.vertices(),
        "#ffffff",
        "#222222",
        svg.stroke_w_normal,
    ));

    let exclusion_group = exclusions.iter().fold(
        Group::new().set("id", "EXCLUSIONS"),
        |group, exclusion| {
            group.add(
                outline(exclusion.vertices(), "#ff9999", "#cc0000", svg.stroke_w_thin)
                    .set("fill-opacity", 0.5),
            )
        },
    );

    let long_group = placement_group(PlacementKind::Long, result.placements(), svg.stroke_w_thin);
    let short_group = placement_group(PlacementKind::Short, result.placements(), svg.stroke_w_thin);

    svg.add(net_group)
        .add(exclusion_group)
        .add(long_group)
        .add(short_group)
        .finish()
}

/// Schreibt ein gerendertes Layout als Datei.
pub fn save_layout_svg(
    path: impl AsRef<Path>,
    net_area: &Polygon,
    exclusions: &[Polygon],
    result: &LayoutResult,
) -> std::io::Result<()> {
    let document = render_layout_svg(net_area, exclusions, result, 800.0);
    svg::save(path.as_ref(), &document)?;
    info!("Debug SVG '{}' wurde erstellt.", path.as_ref().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{LayoutConfig, TrackerSpec, layout};
    use crate::math::geometry::polygon::ShapeGenerators;
    use crate::math::geometry::region::PolygonSetDomain;

    fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Polygon {
        ShapeGenerators::rectangle(Point2D::new(x0, y0), Point2D::new(x1, y1)).unwrap()
    }

    #[test]
    fn test_points_are_flipped() {
        let points = points_attribute(&[Point2D::new(0.0, 0.0), Point2D::new(1.5, 2.0)]);
        assert_eq!(points, "0.000,0.000 1.500,-2.000");
    }

    #[test]
    fn test_render_contains_layers() {
        let net = rect(0.0, 0.0, 10.0, 7.5);
        let exclusions = vec![rect(6.0, 0.0, 10.0, 3.0)];
        let domain = PolygonSetDomain::new(net.clone(), exclusions.clone());
        let tracker = TrackerSpec::new(2.0, 4.0, 2.0).unwrap();
        let config = LayoutConfig::new().with_pitch(5.0).with_clearance_ns(1.0);
        let result = layout(&domain, &tracker, &config).unwrap();
        assert!(result.short_count() > 0);

        let rendered = render_layout_svg(&net, &exclusions, &result, 400.0).to_string();

        assert!(rendered.contains("id=\"NET_AREA\""));
        assert!(rendered.contains("id=\"EXCLUSIONS\""));
        assert!(rendered.contains("id=\"TRACKERS_LONG\""));
        assert!(rendered.contains("id=\"TRACKERS_SHORT\""));
        assert!(rendered.contains("#0064ff"));
        assert!(rendered.contains("#ff6400"));
        // Nettofläche + Ausschluss + eine Kontur pro Tracker
        assert_eq!(
            rendered.matches("<polygon").count(),
            2 + result.total_count()
        );
    }

    #[test]
    fn test_save_writes_file() {
        let net = rect(0.0, 0.0, 10.0, 10.0);
        let result = crate::layout::LayoutAccumulator::new().finish(0.5);
        let path = std::env::temp_dir().join("tracker_layout_svg_test.svg");

        save_layout_svg(&path, &net, &[], &result).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("<svg"));
        std::fs::remove_file(&path).unwrap();
    }
}
