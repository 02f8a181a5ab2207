//! planner.rs: table orchestration
//!
//! Architecture:
//!   InputState (requirement.rs)   → applies the weighted-internal override
//!   Scenario::detect()            → priority table over the four known flags
//!   solve_scenario()              → one Requirement per band bound
//!   classify() (feasibility.rs)   → lower-bound-driven note, upper annotates
//!
//! When internal and external are both known the bands are skipped and the
//! settled grade is reported directly.

use tracing::{debug, trace};

use crate::feasibility::classify;
use crate::model::{BandRow, ScoreInputs, ScoringModel, TableOutcome};
use crate::requirement::{solve_scenario, InputState, Scenario};

/// Entry point: compute the requirement table for the given inputs.
pub fn compute_table(model: &ScoringModel, inputs: &ScoreInputs) -> TableOutcome {
    if inputs.is_empty() {
        debug!("no inputs known, nothing to compute");
        return TableOutcome::Empty;
    }

    let state = InputState::resolve(model, inputs);

    // 1) Everything known: settle the grade
    if let (Some(internal_raw), Some(external)) = (state.internal_raw(), state.external) {
        return direct_outcome(model, internal_raw, external);
    }

    // 2) One scenario for the whole table; it depends only on the known set
    let scenario = Scenario::detect(&state);
    debug!(?scenario, bands = model.bands.len(), "solving band requirements");

    let rows = model
        .bands
        .iter()
        .map(|band| {
            let lower = solve_scenario(model, scenario, band.lower_percent);
            let upper = solve_scenario(model, scenario, band.upper_percent);
            let note = classify(model, &lower, &upper);
            trace!(band = %band.label, ?lower, ?upper, category = ?note.category, "band classified");
            BandRow { band: band.clone(), lower, upper, note }
        })
        .collect();

    TableOutcome::Bands { rows }
}

fn direct_outcome(model: &ScoringModel, internal_raw: f64, external: f64) -> TableOutcome {
    let final_percent = model.final_percentage(internal_raw, external);
    let rounded_percent = round_half_up(final_percent);
    let grade = model.band_for(rounded_percent as f64).map(|b| b.label.clone());
    debug!(final_percent, rounded_percent, grade = grade.as_deref().unwrap_or("N/A"), "grade settled");
    TableOutcome::Direct { grade, final_percent, rounded_percent }
}

/// Ties go toward +inf, so 40.5 rounds to 41 and -0.5 to 0.
fn round_half_up(value: f64) -> i64 {
    // `value - floor` is exact, unlike `value + 0.5` which can round up.
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor as i64 + 1
    } else {
        floor as i64
    }
}
