use crate::Score;
use anyhow::Context;

/// Tunable coefficients of the linear play heuristic.
///
/// Any subset of fields may be given in JSON; the rest fall back to the
/// crate-level defaults.
///
/// ```json
/// { "blocking": 1.0, "stranded": 5.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Weights {
    /// Multiplies `Σ (hand frequency − 1)` over the tile's faces, or
    /// `hand frequency − 2` for a double.
    pub frequency: Score,
    /// Added for a double while the hand is longer than `double_horizon`.
    pub double_early: Score,
    /// Added for a double once the hand is at or below `double_horizon`.
    pub double_late: Score,
    pub double_horizon: usize,
    /// Multiplies `Σ max(0, blocking_ceiling − times seen)` over the tile's faces.
    pub blocking: Score,
    pub blocking_ceiling: usize,
    /// Subtracted when the play leaves nothing else in hand that fits.
    pub stranded: Score,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            frequency: crate::WEIGHT_FREQUENCY,
            double_early: crate::WEIGHT_DOUBLE_EARLY,
            double_late: crate::WEIGHT_DOUBLE_LATE,
            double_horizon: crate::DOUBLE_HORIZON,
            blocking: crate::WEIGHT_BLOCKING,
            blocking_ceiling: crate::BLOCKING_CEILING,
            stranded: crate::WEIGHT_STRANDED,
        }
    }
}

impl Weights {
    pub fn parse(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("parse scoring weights")
    }
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read weights from {}", path.display()))?;
        let weights = Self::parse(&json)?;
        log::info!("loaded scoring weights from {}", path.display());
        Ok(weights)
    }
    /// Pretty JSON in the same shape [`Weights::load`] reads.
    pub fn json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).context("serialize scoring weights")
    }
}

impl std::fmt::Display for Weights {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "frequency {:.2} | double {:+.2}/{:+.2} (horizon {}) | blocking {:.2} (ceiling {}) | stranded {:.2}",
            self.frequency,
            self.double_early,
            self.double_late,
            self.double_horizon,
            self.blocking,
            self.blocking_ceiling,
            self.stranded,
        )
    }
}
