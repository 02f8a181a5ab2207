use crate::model::ScoringModel;

// ── Raw <-> weighted conversions ──────────────────────────────────────────────
//
// No bounds checks: callers own raw-score domain validity.

impl ScoringModel {
    pub fn internal_weighted_from_raw(&self, raw: f64) -> f64 {
        raw / self.internal_raw_total() * self.weights.internal_weight
    }

    pub fn external_weighted_from_raw(&self, raw: f64) -> f64 {
        raw / self.limits.external_max * self.weights.external_weight
    }

    pub fn final_percentage(&self, internal_raw: f64, external_raw: f64) -> f64 {
        self.internal_weighted_from_raw(internal_raw) + self.external_weighted_from_raw(external_raw)
    }

    /// Inverse of [`Self::internal_weighted_from_raw`].
    pub fn internal_raw_from_weighted(&self, weighted: f64) -> f64 {
        weighted / self.weights.internal_weight * self.internal_raw_total()
    }

    /// Inverse of [`Self::external_weighted_from_raw`].
    pub fn external_raw_from_weighted(&self, weighted: f64) -> f64 {
        weighted / self.weights.external_weight * self.limits.external_max
    }
}
