use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::debug;

use crate::error::{ConfigError, InputError, ValidationError};
use crate::model::{ScoreInputs, ScoringModel};

const WEIGHT_SUM: f64 = 100.0;
const WEIGHT_TOLERANCE: f64 = 1e-9;

impl ScoringModel {
    /// Load a scoring model from a JSON file on disk and validate it.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let path_buf = path.to_path_buf();
        let file = File::open(path).map_err(|source| ConfigError::Read { source, path: path_buf.clone() })?;
        let reader = BufReader::new(file);
        let model: ScoringModel = serde_json::from_reader(reader)
            .map_err(|source| ConfigError::Parse { source, path: path_buf.clone() })?;
        model.validate().map_err(|source| ConfigError::Invalid { path: path_buf, source })?;
        debug!(path = %path.display(), bands = model.bands.len(), "scoring model loaded");
        Ok(model)
    }

    /// Check the model invariants without performing I/O.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let limits = [
            ("limits.ct1_max", self.limits.ct1_max),
            ("limits.ct2_max", self.limits.ct2_max),
            ("limits.external_max", self.limits.external_max),
        ];
        for (field, max) in limits {
            if !max.is_finite() || max <= 0.0 {
                return Err(ValidationError::field(field, "maximum must be a positive number"));
            }
        }

        let weights = [
            ("weights.internal_weight", self.weights.internal_weight),
            ("weights.external_weight", self.weights.external_weight),
        ];
        for (field, weight) in weights {
            if !weight.is_finite() || weight <= 0.0 {
                return Err(ValidationError::field(field, "weight must be a positive number"));
            }
        }
        let sum = self.weights.internal_weight + self.weights.external_weight;
        if (sum - WEIGHT_SUM).abs() > WEIGHT_TOLERANCE {
            return Err(ValidationError::field("weights", format!("weights must sum to 100, got {sum}")));
        }

        validate_bands(self)
    }

    /// Input-layer domain policy. The core never calls this.
    pub fn check_inputs(&self, inputs: &ScoreInputs) -> Result<(), InputError> {
        let checks = [
            ("CT1", inputs.ct1, self.limits.ct1_max),
            ("CT2", inputs.ct2, self.limits.ct2_max),
            ("End-Sem", inputs.external, self.limits.external_max),
            ("Internal Weighted", inputs.weighted_internal, self.weights.internal_weight),
        ];
        for (field, value, max) in checks {
            let Some(value) = value else { continue };
            if !value.is_finite() {
                return Err(InputError::NotFinite { field });
            }
            if value < 0.0 || value > max {
                return Err(InputError::OutOfRange { field, min: 0.0, max, value });
            }
        }
        Ok(())
    }
}

fn validate_bands(model: &ScoringModel) -> Result<(), ValidationError> {
    let (Some(first), Some(last)) = (model.bands.first(), model.bands.last()) else {
        return Err(ValidationError::field("bands", "at least one grade band is required"));
    };

    for (i, band) in model.bands.iter().enumerate() {
        let field = format!("bands[{i}]");
        if band.label.trim().is_empty() {
            return Err(ValidationError::field(field, "label must not be empty"));
        }
        if !band.lower_percent.is_finite() || !band.upper_percent.is_finite() {
            return Err(ValidationError::field(field, "bounds must be finite"));
        }
        if band.lower_percent > band.upper_percent {
            return Err(ValidationError::field(field, "lower bound exceeds upper bound"));
        }
    }

    for (i, pair) in model.bands.windows(2).enumerate() {
        if let [higher, lower] = pair {
            if lower.upper_percent >= higher.lower_percent {
                return Err(ValidationError::field(
                    format!("bands[{}]", i + 1),
                    format!("overlaps or is out of order with band {:?}", higher.label),
                ));
            }
            // Every integer percentage must land in some band.
            if lower.upper_percent.floor() + 1.0 < higher.lower_percent {
                return Err(ValidationError::field(
                    format!("bands[{}]", i + 1),
                    format!("leaves a gap below band {:?}", higher.label),
                ));
            }
        }
    }

    if first.upper_percent != 100.0 {
        return Err(ValidationError::field("bands[0]", "highest band must end at 100"));
    }
    if last.lower_percent != 0.0 {
        return Err(ValidationError::field(
            format!("bands[{}]", model.bands.len() - 1),
            "lowest band must start at 0",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GradeBand;

    #[test]
    fn default_model_is_valid() {
        assert_eq!(ScoringModel::default().validate(), Ok(()));
    }

    #[test]
    fn round_trips_through_json() {
        let model = ScoringModel::default();
        let json = serde_json::to_string(&model).unwrap();
        let back: ScoringModel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, model);
    }

    #[test]
    fn rejects_non_positive_limit() {
        let mut m = ScoringModel::default();
        m.limits.ct2_max = 0.0;
        let err = m.validate().unwrap_err();
        assert_eq!(err.to_string(), "limits.ct2_max: maximum must be a positive number");
    }

    #[test]
    fn rejects_weights_not_summing_to_100() {
        let mut m = ScoringModel::default();
        m.weights.external_weight = 30.0;
        assert!(m.validate().unwrap_err().to_string().starts_with("weights:"));
    }

    #[test]
    fn rejects_overlapping_bands() {
        let mut m = ScoringModel::default();
        m.bands[1] = GradeBand::new("A+", 81.0, 91.0);
        let err = m.validate().unwrap_err();
        assert!(err.to_string().starts_with("bands[1]:"));
    }

    #[test]
    fn rejects_band_gap() {
        let mut m = ScoringModel::default();
        m.bands = vec![GradeBand::new("O", 91.0, 100.0), GradeBand::new("F", 0.0, 50.0)];
        let err = m.validate().unwrap_err();
        assert_eq!(err.to_string(), "bands[1]: leaves a gap below band \"O\"");

        // A fractional ceiling right under the next floor is not a gap.
        m.bands = vec![GradeBand::new("P", 35.0, 100.0), GradeBand::new("F", 0.0, 34.999)];
        assert_eq!(m.validate(), Ok(()));
    }

    #[test]
    fn rejects_zero_weight() {
        let mut m = ScoringModel::default();
        m.weights.internal_weight = 0.0;
        m.weights.external_weight = 100.0;
        let err = m.validate().unwrap_err();
        assert_eq!(err.to_string(), "weights.internal_weight: weight must be a positive number");
    }

    #[test]
    fn rejects_uncovered_floor() {
        let mut m = ScoringModel::default();
        m.bands[7] = GradeBand::new("F", 5.0, 34.999);
        assert!(m.validate().is_err());
        m.bands.clear();
        assert!(m.validate().is_err());
    }

    #[test]
    fn input_domain_policy() {
        let m = ScoringModel::default();
        let ok = ScoreInputs { ct1: Some(50.0), ct2: Some(0.0), external: Some(75.0), weighted_internal: Some(60.0) };
        assert_eq!(m.check_inputs(&ok), Ok(()));

        let err = m.check_inputs(&ScoreInputs { ct1: Some(51.0), ..ScoreInputs::default() }).unwrap_err();
        assert_eq!(err.to_string(), "CT1 must be between 0 and 50");

        let err = m.check_inputs(&ScoreInputs { external: Some(-1.0), ..ScoreInputs::default() }).unwrap_err();
        assert_eq!(err.to_string(), "End-Sem must be between 0 and 75");

        let err = m.check_inputs(&ScoreInputs { weighted_internal: Some(f64::NAN), ..ScoreInputs::default() });
        assert_eq!(err, Err(InputError::NotFinite { field: "Internal Weighted" }));
    }
}
