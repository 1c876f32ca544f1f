//! Dense uniform sampling of continuous path data.
//!
//! Path data goes through kurbo's SVG parser, so curves, arcs and
//! relative commands are all supported. The parameter `t ∈ [0, 1)` runs
//! over the whole path: it picks a segment in proportion to arc length,
//! then evaluates that segment at a uniform local parameter.

use kurbo::{
    BezPath, Circle, Ellipse, Line, ParamCurve, ParamCurveArclen, PathSeg, Point, Rect, Shape, Vec2,
};
use roxmltree::{Document, Node, ParsingOptions};

use crate::error::PolarError;
use crate::source::pairs;

/// Arc length accuracy used to weight segments, in path units.
const ARCLEN_ACCURACY: f64 = 0.01;

/// Flattening tolerance for converting basic shapes to paths.
const SHAPE_TOLERANCE: f64 = 0.1;

/// Every path in a document gets at least this many samples.
const MIN_SAMPLES_PER_PATH: usize = 10;

/// Sample `count` points along `path` at `t = i / count`.
pub fn sample_path(path: &BezPath, count: usize) -> Vec<Point> {
    let segments: Vec<(PathSeg, f64)> = path
        .segments()
        .map(|seg| (seg, seg.arclen(ARCLEN_ACCURACY)))
        .collect();
    if segments.is_empty() || count == 0 {
        return Vec::new();
    }

    // Fully degenerate paths (all zero length) fall back to equal weights.
    let total_len: f64 = segments.iter().map(|(_, len)| len).sum();
    let weights: Vec<f64> = if total_len > 0.0 {
        segments.iter().map(|(_, len)| *len).collect()
    } else {
        vec![1.0; segments.len()]
    };
    let total: f64 = weights.iter().sum();

    let mut samples = Vec::with_capacity(count);
    let mut idx = 0;
    let mut seg_start = 0.0;
    for i in 0..count {
        let target = i as f64 / count as f64 * total;
        while idx + 1 < segments.len() && target >= seg_start + weights[idx] {
            seg_start += weights[idx];
            idx += 1;
        }
        let local = if weights[idx] > 0.0 {
            ((target - seg_start) / weights[idx]).clamp(0.0, 1.0)
        } else {
            0.0
        };
        samples.push(segments[idx].0.eval(local));
    }
    samples
}

/// Parse SVG path data and sample it.
pub fn sample_data(data: &str, samples: usize) -> Result<Vec<Point>, PolarError> {
    let path = BezPath::from_svg(data).map_err(|e| PolarError::InvalidPathData(e.to_string()))?;
    let points = sample_path(&path, samples);
    log::info!("  Sample      {} segments \u{2192} {} points", path.segments().count(), points.len());
    Ok(points)
}

/// Sample every drawable shape in an SVG document, joined in document order.
///
/// The sample budget is split evenly between shapes, with a floor of
/// ten samples each.
pub fn sample_document(svg: &str, samples: usize) -> Result<Vec<Point>, PolarError> {
    let paths = document_paths(svg)?;
    if paths.is_empty() {
        return Err(PolarError::NoPaths);
    }
    let per_path = (samples / paths.len()).max(MIN_SAMPLES_PER_PATH);
    let points: Vec<Point> = paths.iter().flat_map(|p| sample_path(p, per_path)).collect();
    log::info!(
        "  Sample      {} paths \u{00d7} {} \u{2192} {} points",
        paths.len(),
        per_path,
        points.len()
    );
    Ok(points)
}

// ── Document scanning ───────────────────────────────────────────

/// Outlines of the shape elements in `svg`, in document order.
///
/// Transforms and styling are ignored. Elements missing required
/// attributes are skipped.
fn document_paths(svg: &str) -> Result<Vec<BezPath>, PolarError> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(svg, options)
        .map_err(|e| PolarError::InvalidSvg(e.to_string()))?;

    let mut paths = Vec::new();
    for node in doc.descendants().filter(|n| n.is_element()) {
        let tag = node.tag_name().name();
        let path = match tag {
            "path" => match node.attribute("d") {
                Some(d) => Some(
                    BezPath::from_svg(d).map_err(|e| PolarError::InvalidPathData(e.to_string()))?,
                ),
                None => None,
            },
            "polygon" => node.attribute("points").map(|pts| polyline(pts, true)),
            "polyline" => node.attribute("points").map(|pts| polyline(pts, false)),
            "line" => line(node),
            "rect" => rect(node),
            "circle" => length(node, "r").map(|r| Circle::new(center(node), r).to_path(SHAPE_TOLERANCE)),
            "ellipse" => ellipse(node),
            _ => continue,
        };
        match path {
            Some(path) => paths.push(path),
            None => log::warn!("skipping <{}> without usable geometry", tag),
        }
    }
    Ok(paths)
}

fn polyline(points: &str, closed: bool) -> BezPath {
    let mut path = BezPath::new();
    for (i, p) in pairs::extract(points).into_iter().enumerate() {
        if i == 0 {
            path.move_to(p);
        } else {
            path.line_to(p);
        }
    }
    if closed && !path.elements().is_empty() {
        path.close_path();
    }
    path
}

fn line(node: Node) -> Option<BezPath> {
    let p0 = Point::new(length(node, "x1")?, length(node, "y1")?);
    let p1 = Point::new(length(node, "x2")?, length(node, "y2")?);
    Some(Line::new(p0, p1).to_path(SHAPE_TOLERANCE))
}

fn rect(node: Node) -> Option<BezPath> {
    let x = length(node, "x").unwrap_or(0.0);
    let y = length(node, "y").unwrap_or(0.0);
    let rect = Rect::new(x, y, x + length(node, "width")?, y + length(node, "height")?);
    Some(rect.to_path(SHAPE_TOLERANCE))
}

fn ellipse(node: Node) -> Option<BezPath> {
    let radii = Vec2::new(length(node, "rx")?, length(node, "ry")?);
    Some(Ellipse::new(center(node), radii, 0.0).to_path(SHAPE_TOLERANCE))
}

/// Numeric attribute with any unit suffix (`px`, `%`, …) dropped.
fn length(node: Node, name: &str) -> Option<f64> {
    node.attribute(name)?
        .trim()
        .trim_end_matches(|c: char| c.is_ascii_alphabetic() || c == '%')
        .parse()
        .ok()
}

fn center(node: Node) -> Point {
    Point::new(length(node, "cx").unwrap_or(0.0), length(node, "cy").unwrap_or(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn samples_spread_by_arc_length() {
        // Two segments, the first three times longer than the second.
        let path = BezPath::from_svg("M0 0 L30 0 L30 10").unwrap();
        let pts = sample_path(&path, 8);
        assert_eq!(pts.len(), 8);
        assert_eq!(pts[0], Point::new(0.0, 0.0));
        assert_relative_eq!(pts[1].x, 5.0, epsilon = 1e-6);
        assert_relative_eq!(pts[6].x, 30.0, epsilon = 1e-6);
        assert_relative_eq!(pts[6].y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(pts[7].y, 5.0, epsilon = 1e-6);
    }

    #[test]
    fn curves_are_sampled() {
        let pts = sample_data("M0 0 C 0 10 10 10 10 0", 400).unwrap();
        assert_eq!(pts.len(), 400);
        let max_y = pts.iter().map(|p| p.y).fold(f64::MIN, f64::max);
        assert!(max_y > 7.0 && max_y <= 7.5 + 1e-9, "max y {}", max_y);
    }

    #[test]
    fn bad_data_is_reported() {
        assert!(matches!(sample_data("M 0 0 Q", 10), Err(PolarError::InvalidPathData(_))));
    }

    #[test]
    fn move_only_path_has_no_samples() {
        assert!(sample_data("M 5 5", 10).unwrap().is_empty());
    }

    #[test]
    fn document_shapes() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg">
  <linearGradient id="g"/>
  <path id="a" d="M0 0 L10 0 L10 10 Z"/>
  <polygon points="0,0 4,0 4,4"/>
  <rect x="1" y="2" width="3px" height="4"/>
  <circle cx='5' cy='5' r='2'/>
  <line x1="0" y1="0" x2="1"/>
</svg>"#;
        let paths = document_paths(svg).unwrap();
        assert_eq!(paths.len(), 4);
        assert_eq!(paths[2].bounding_box(), Rect::new(1.0, 2.0, 4.0, 6.0));
    }

    #[test]
    fn document_budget_split_between_paths() {
        let svg = r#"<svg><path d="M0 0 L1 0"/><path d="M0 0 L0 1"/></svg>"#;
        assert_eq!(sample_document(svg, 800).unwrap().len(), 800);
        // Floor of ten samples per path.
        assert_eq!(sample_document(svg, 4).unwrap().len(), 20);
    }

    #[test]
    fn commented_out_shapes_are_ignored() {
        let svg = r#"<svg><!-- <path d="M0 0 L1000 0"/> --><path d="M0 0 L10 0 L10 10 Z"/></svg>"#;
        let pts = sample_document(svg, 100).unwrap();
        assert_eq!(pts.len(), 100);
        let max_x = pts.iter().map(|p| p.x).fold(f64::MIN, f64::max);
        assert!(max_x <= 10.0 + 1e-9, "max x {}", max_x);
    }

    #[test]
    fn entities_and_doctype() {
        let svg = r#"<?xml version="1.0"?>
<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">
<svg><polyline points="0,0&#32;8,0"/></svg>"#;
        let paths = document_paths(svg).unwrap();
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].bounding_box(), Rect::new(0.0, 0.0, 8.0, 0.0));
    }

    #[test]
    fn malformed_document() {
        assert!(matches!(sample_document("<svg><path d=", 10), Err(PolarError::InvalidSvg(_))));
    }

    #[test]
    fn document_without_shapes() {
        assert!(matches!(sample_document("<svg></svg>", 100), Err(PolarError::NoPaths)));
    }
}
