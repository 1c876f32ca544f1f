use crate::error::PolarError;

/// Maximum pairs written back by the symmetrize pass.
pub const SYMMETRIZE_MAX_POINTS: usize = 48;

/// All forward-conversion parameters in one struct.
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Multiplies both axes before polar conversion.
    pub scale: f64,
    /// Upper bound on the number of (angle, radius) pairs emitted.
    pub max_points: usize,
    /// Rotate angles so the largest-radius vertex sits at angle 0.
    pub align_tip: bool,
    /// Samples taken along continuous path data (dense sampler only).
    pub samples: usize,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            scale: 1.1,
            max_points: 40,
            align_tip: false,
            samples: 800,
        }
    }
}

impl ConversionConfig {
    /// Reject values the pipeline cannot work with.
    pub fn validate(&self) -> Result<(), PolarError> {
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(PolarError::InvalidOption(format!(
                "scale must be a positive number, got {}",
                self.scale
            )));
        }
        if self.max_points == 0 {
            return Err(PolarError::InvalidOption("max-points must be at least 1".into()));
        }
        if self.samples == 0 {
            return Err(PolarError::InvalidOption("samples must be at least 1".into()));
        }
        Ok(())
    }
}
