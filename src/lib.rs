//! svg2polar: vector path geometry → angle/radius polygon tables.
//!
//! Reduces a path outline to a bounded list of `(angle, radius)` pairs
//! around its centroid, and writes them as indexed assignment records
//! for table-driven polygon renderers.
//!
//! # Example
//!
//! ```
//! use svg2polar::{convert, source, ConversionConfig, RecordLayout};
//!
//! let points = source::lines::extract("M0 0 L10 0 L10 10 L0 10 Z");
//! let config = ConversionConfig { scale: 1.0, ..ConversionConfig::default() };
//! let conversion = convert(&points, &config)?;
//! print!("{}", RecordLayout::default().record(&conversion.pairs));
//! # Ok::<(), svg2polar::PolarError>(())
//! ```

#![forbid(unsafe_code)]

mod config;
mod geom;
mod polar;
mod record;
mod symmetry;

pub mod error;
pub mod source;

// Re-export kurbo so downstream users get the same Point type.
pub use kurbo;

pub use config::{ConversionConfig, SYMMETRIZE_MAX_POINTS};
pub use error::PolarError;
pub use geom::centroid;
pub use polar::{align_tip, normalize_angle, reduce, PolarPair};
pub use record::{commentary, Record, RecordLayout, SENTINEL};
pub use symmetry::{mirror_angle, symmetrize};

use kurbo::Point;

/// The result of a forward conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    /// Polar origin: the mean of the input points, in source space.
    pub centroid: Point,
    /// Reduced polar table, in traversal order.
    pub pairs: Vec<PolarPair>,
}

impl Conversion {
    /// Commentary line reporting the centroid used.
    pub fn center_comment(&self) -> String {
        commentary(format_args!(
            "Center used: {:.2}, {:.2}",
            self.centroid.x, self.centroid.y
        ))
    }
}

/// Full forward pipeline: points → centroid → polar table → tip alignment.
pub fn convert(points: &[Point], config: &ConversionConfig) -> Result<Conversion, PolarError> {
    config.validate()?;

    // ── Centroid ──────────────────────────────────────────
    let center = centroid(points)?;
    log::info!(
        "  Centroid    ({:.2}, {:.2}) of {} points",
        center.x,
        center.y,
        points.len()
    );

    // ── Reduce ────────────────────────────────────────────
    let mut pairs = reduce(points, center, config.scale, config.max_points);
    log::info!(
        "  Reduce      {} pairs (max {}, scale \u{00d7}{:.2})",
        pairs.len(),
        config.max_points,
        config.scale
    );

    // ── Align ─────────────────────────────────────────────
    if config.align_tip {
        pairs = align_tip(&pairs);
        log::info!("  Align       largest radius rotated to 0\u{00b0}");
    }

    Ok(Conversion {
        centroid: center,
        pairs,
    })
}

/// Symmetrize pass over a stored record: parse → mirror-average.
///
/// Returns `NoPairs` when the record for `layout` is missing or empty.
pub fn symmetrize_record(text: &str, layout: &RecordLayout) -> Result<Vec<PolarPair>, PolarError> {
    let pairs = layout.parse(text)?;
    if pairs.is_empty() {
        return Err(PolarError::NoPairs);
    }
    let sym = symmetrize(&pairs);
    log::info!("  Symmetrize  {} pairs \u{2192} {} pairs", pairs.len(), sym.len());
    Ok(sym)
}
