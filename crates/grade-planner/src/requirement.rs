//! requirement.rs: derives the missing score(s) needed to hit a target percent
//!
//! The solver is stateless: one call answers one target. Batching over bands
//! and bounds is the planner's job.

use serde::{Deserialize, Serialize};

use crate::model::{ScoreInputs, ScoringModel};

// ── Requirement ───────────────────────────────────────────────────────────────

/// Even split of a combined-internal raw requirement, proportional to each
/// component's share of the internal raw total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CtSplit {
    pub ct1: f64,
    pub ct2: f64,
}

impl CtSplit {
    pub fn proportional(model: &ScoringModel, internal_raw: f64) -> Self {
        let total = model.internal_raw_total();
        Self {
            ct1: internal_raw * (model.limits.ct1_max / total),
            ct2: internal_raw * (model.limits.ct2_max / total),
        }
    }
}

/// What must still be supplied to reach a target percentage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Requirement {
    /// Raw external score needed; internal is fixed.
    External { value: f64 },
    /// Raw combined-internal score needed; external is fixed.
    InternalNeeded { value: f64, weighted_needed: f64, suggestion: CtSplit },
    /// Missing CT1 given CT2 and external.
    Ct1Only { value: f64 },
    /// Missing CT2 given CT1 and external.
    Ct2Only { value: f64 },
    /// Nothing is known: two alternative paths.
    Both { ext_if_internal_max: f64, internal_if_ext_max: f64, suggestion: CtSplit },
    NotApplicable,
}

impl Requirement {
    /// Numeric value and domain ceiling, for the kinds the classifier grades.
    /// Compound kinds return `None`.
    pub fn graded_value(&self, model: &ScoringModel) -> Option<(f64, f64)> {
        match *self {
            Requirement::External { value } => Some((value, model.limits.external_max)),
            Requirement::InternalNeeded { value, .. } => Some((value, model.internal_raw_total())),
            Requirement::Ct1Only { .. }
            | Requirement::Ct2Only { .. }
            | Requirement::Both { .. }
            | Requirement::NotApplicable => None,
        }
    }

    /// True when the value exceeds its ceiling. Compound kinds are never impossible.
    pub fn exceeds_ceiling(&self, model: &ScoringModel) -> bool {
        self.graded_value(model).is_some_and(|(value, ceiling)| value > ceiling)
    }
}

// ── Input state ───────────────────────────────────────────────────────────────

/// Inputs after the weighted-internal override has been applied.
///
/// When a weighted internal summary is given it is converted to its raw
/// equivalent and CT1/CT2 are dropped, whatever their values.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputState {
    pub ct1: Option<f64>,
    pub ct2: Option<f64>,
    pub external: Option<f64>,
    pub equivalent_internal_raw: Option<f64>,
}

impl InputState {
    pub fn resolve(model: &ScoringModel, inputs: &ScoreInputs) -> Self {
        match inputs.weighted_internal {
            Some(weighted) => Self {
                ct1: None,
                ct2: None,
                external: inputs.external,
                equivalent_internal_raw: Some(model.internal_raw_from_weighted(weighted)),
            },
            None => Self {
                ct1: inputs.ct1,
                ct2: inputs.ct2,
                external: inputs.external,
                equivalent_internal_raw: None,
            },
        }
    }

    /// Raw internal total if it is fully known (both CTs, or the summary).
    pub fn internal_raw(&self) -> Option<f64> {
        match (self.equivalent_internal_raw, self.ct1, self.ct2) {
            (Some(raw), _, _) => Some(raw),
            (None, Some(ct1), Some(ct2)) => Some(ct1 + ct2),
            _ => None,
        }
    }
}

// ── Scenario priority table ───────────────────────────────────────────────────
//
//  # | summary | ct1 | ct2 | ext | solves for
//  1 | known   |  -  |  -  |  ?  | External
//  2 |    ?    |  ?  |  ?  | yes | InternalNeeded
//  3 |    ?    | yes |  ?  | yes | Ct2Only
//  4 |    ?    |  ?  | yes | yes | Ct1Only
//  5 |    ?    | yes | yes |  ?  | External
//  6 |    ?    |  ?  |  ?  |  ?  | Both
//  anything else                 | NotApplicable

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scenario {
    SummaryKnown { internal_raw: f64 },
    ExternalOnly { external: f64 },
    Ct1WithExternal { ct1: f64, external: f64 },
    Ct2WithExternal { ct2: f64, external: f64 },
    BothCts { ct1: f64, ct2: f64 },
    NothingKnown,
    Unmatched,
}

impl Scenario {
    pub fn detect(state: &InputState) -> Self {
        match (state.equivalent_internal_raw, state.ct1, state.ct2, state.external) {
            (Some(internal_raw), _, _, None) => Scenario::SummaryKnown { internal_raw },
            (None, None, None, Some(external)) => Scenario::ExternalOnly { external },
            (None, Some(ct1), None, Some(external)) => Scenario::Ct1WithExternal { ct1, external },
            (None, None, Some(ct2), Some(external)) => Scenario::Ct2WithExternal { ct2, external },
            (None, Some(ct1), Some(ct2), None) => Scenario::BothCts { ct1, ct2 },
            (None, None, None, None) => Scenario::NothingKnown,
            _ => Scenario::Unmatched,
        }
    }
}

// ── Solver ────────────────────────────────────────────────────────────────────

pub fn solve(model: &ScoringModel, inputs: &ScoreInputs, target_percent: f64) -> Requirement {
    let state = InputState::resolve(model, inputs);
    solve_scenario(model, Scenario::detect(&state), target_percent)
}

pub fn solve_scenario(model: &ScoringModel, scenario: Scenario, target: f64) -> Requirement {
    match scenario {
        Scenario::SummaryKnown { internal_raw } => {
            Requirement::External { value: external_raw_needed(model, internal_raw, target) }
        }
        Scenario::ExternalOnly { external } => {
            let weighted_needed = target - model.external_weighted_from_raw(external);
            let value = model.internal_raw_from_weighted(weighted_needed);
            Requirement::InternalNeeded { value, weighted_needed, suggestion: CtSplit::proportional(model, value) }
        }
        Scenario::Ct1WithExternal { ct1, external } => {
            Requirement::Ct2Only { value: internal_raw_needed(model, external, target) - ct1 }
        }
        Scenario::Ct2WithExternal { ct2, external } => {
            Requirement::Ct1Only { value: internal_raw_needed(model, external, target) - ct2 }
        }
        Scenario::BothCts { ct1, ct2 } => {
            Requirement::External { value: external_raw_needed(model, ct1 + ct2, target) }
        }
        Scenario::NothingKnown => {
            let ext_if_internal_max = external_raw_needed(model, model.internal_raw_total(), target);
            let internal_if_ext_max = internal_raw_needed(model, model.limits.external_max, target);
            Requirement::Both {
                ext_if_internal_max,
                internal_if_ext_max,
                suggestion: CtSplit::proportional(model, internal_if_ext_max),
            }
        }
        Scenario::Unmatched => Requirement::NotApplicable,
    }
}

fn external_raw_needed(model: &ScoringModel, internal_raw: f64, target: f64) -> f64 {
    model.external_raw_from_weighted(target - model.internal_weighted_from_raw(internal_raw))
}

fn internal_raw_needed(model: &ScoringModel, external: f64, target: f64) -> f64 {
    model.internal_raw_from_weighted(target - model.external_weighted_from_raw(external))
}
