//! Best-effort extraction of coordinate pairs from path text.
//!
//! Command letters are ignored; any two numbers separated by whitespace
//! or a comma count as one `(x, y)` vertex. Works for paths made of
//! absolute `M`/`L` coordinates.

use std::sync::OnceLock;

use kurbo::Point;
use regex::Regex;

static PAIR: OnceLock<Regex> = OnceLock::new();

fn pair_pattern() -> &'static Regex {
    PAIR.get_or_init(|| {
        Regex::new(r"(-?\d*\.?\d+)[,\s]+(-?\d*\.?\d+)").expect("pair regex must compile")
    })
}

/// All non-overlapping number pairs in `text`, in order.
pub fn extract(text: &str) -> Vec<Point> {
    pair_pattern()
        .captures_iter(text)
        .filter_map(|caps| {
            let x = caps[1].parse::<f64>().ok()?;
            let y = caps[2].parse::<f64>().ok()?;
            Some(Point::new(x, y))
        })
        .collect()
}
