//! model.rs: shared data types for the grade planner
//!
//! Everything here is plain data. The scoring model is immutable once built;
//! inputs and outcomes are recomputed from scratch on every call.

use serde::{Deserialize, Serialize};

use crate::feasibility::FeasibilityNote;
use crate::requirement::Requirement;

// ── Scoring model ─────────────────────────────────────────────────────────────

/// Raw maxima of each assessed component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentLimits {
    pub ct1_max: f64,
    pub ct2_max: f64,
    pub external_max: f64,
}

/// Share of the final percentage carried by each aggregate. Sums to 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    pub internal_weight: f64,
    pub external_weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeBand {
    pub label: String,
    pub lower_percent: f64,
    pub upper_percent: f64,
}

impl GradeBand {
    pub fn new(label: impl Into<String>, lower_percent: f64, upper_percent: f64) -> Self {
        Self { label: label.into(), lower_percent, upper_percent }
    }

    /// Inclusive on both ends.
    pub fn contains(&self, percent: f64) -> bool {
        percent >= self.lower_percent && percent <= self.upper_percent
    }
}

/// Static configuration every calculation runs against.
///
/// Bands are ordered highest to lowest. The `F` ceiling of `34.999` in the
/// default table is kept as-is so per-band targets match the historic output;
/// membership is only ever tested against an integer-rounded percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringModel {
    pub limits: ComponentLimits,
    pub weights: Weights,
    pub bands: Vec<GradeBand>,
}

impl Default for ScoringModel {
    fn default() -> Self {
        Self {
            limits: ComponentLimits { ct1_max: 50.0, ct2_max: 60.0, external_max: 75.0 },
            weights: Weights { internal_weight: 60.0, external_weight: 40.0 },
            bands: vec![
                GradeBand::new("O", 91.0, 100.0),
                GradeBand::new("A+", 81.0, 90.0),
                GradeBand::new("A", 71.0, 80.0),
                GradeBand::new("B+", 61.0, 70.0),
                GradeBand::new("B", 51.0, 60.0),
                GradeBand::new("C", 41.0, 50.0),
                GradeBand::new("D", 35.0, 40.0),
                GradeBand::new("F", 0.0, 34.999),
            ],
        }
    }
}

impl ScoringModel {
    /// Ceiling for any combined-internal raw requirement.
    pub fn internal_raw_total(&self) -> f64 {
        self.limits.ct1_max + self.limits.ct2_max
    }

    /// First band (in table order) whose range contains `percent`.
    pub fn band_for(&self, percent: f64) -> Option<&GradeBand> {
        self.bands.iter().find(|b| b.contains(percent))
    }
}

// ── Inputs ────────────────────────────────────────────────────────────────────

/// Raw inputs as handed over by the input layer. `None` means unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreInputs {
    pub ct1: Option<f64>,
    pub ct2: Option<f64>,
    pub external: Option<f64>,
    pub weighted_internal: Option<f64>,
}

impl ScoreInputs {
    pub fn is_empty(&self) -> bool {
        self.ct1.is_none() && self.ct2.is_none() && self.external.is_none() && self.weighted_internal.is_none()
    }
}

// ── Outcome ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandRow {
    pub band: GradeBand,
    pub lower: Requirement,
    pub upper: Requirement,
    pub note: FeasibilityNote,
}

/// Result of one table computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum TableOutcome {
    /// Internal and external are both known: the grade is settled.
    Direct {
        /// `None` when the rounded percentage falls in no band.
        grade: Option<String>,
        final_percent: f64,
        rounded_percent: i64,
    },
    Bands { rows: Vec<BandRow> },
    Empty,
}

/// Colour family a renderer uses for a settled grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradeTone {
    Bright,
    Good,
    Warn,
    Bad,
}

impl GradeTone {
    pub fn for_label(label: Option<&str>) -> Self {
        match label {
            Some("O") => GradeTone::Bright,
            Some("A+" | "A" | "B+" | "B") => GradeTone::Good,
            Some("F") => GradeTone::Bad,
            _ => GradeTone::Warn,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GradeTone::Bright => "bright",
            GradeTone::Good => "good",
            GradeTone::Warn => "warn",
            GradeTone::Bad => "bad",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_model_shape() {
        let m = ScoringModel::default();
        assert_eq!(m.internal_raw_total(), 110.0);
        assert_eq!(m.bands.len(), 8);
        assert_eq!(m.bands[0].label, "O");
        assert_eq!(m.bands[7].lower_percent, 0.0);
    }

    #[test]
    fn band_lookup_is_inclusive() {
        let m = ScoringModel::default();
        assert_eq!(m.band_for(91.0).map(|b| b.label.as_str()), Some("O"));
        assert_eq!(m.band_for(90.0).map(|b| b.label.as_str()), Some("A+"));
        assert_eq!(m.band_for(35.0).map(|b| b.label.as_str()), Some("D"));
        assert_eq!(m.band_for(34.0).map(|b| b.label.as_str()), Some("F"));
        assert!(m.band_for(101.0).is_none());
        assert!(m.band_for(-1.0).is_none());
    }

    #[test]
    fn grade_tones() {
        assert_eq!(GradeTone::for_label(Some("O")), GradeTone::Bright);
        assert_eq!(GradeTone::for_label(Some("B+")), GradeTone::Good);
        assert_eq!(GradeTone::for_label(Some("C")), GradeTone::Warn);
        assert_eq!(GradeTone::for_label(Some("F")), GradeTone::Bad);
        assert_eq!(GradeTone::for_label(None), GradeTone::Warn);
    }

    #[test]
    fn inputs_deserialize_with_missing_fields() {
        let inputs: ScoreInputs = serde_json::from_str(r#"{"ct1": 40}"#).unwrap();
        assert_eq!(inputs.ct1, Some(40.0));
        assert!(inputs.ct2.is_none());
        assert!(!inputs.is_empty());
        assert!(ScoreInputs::default().is_empty());
    }
}
