//! format.rs: deterministic text rendering of solver and planner output
//!
//! Values print with two decimals next to their ceiling (`"12.50 / 75"`).
//! Multi-line cells use `\n`; the renderer decides how to break them.

use crate::model::{BandRow, GradeTone, ScoringModel, TableOutcome};
use crate::requirement::Requirement;

pub const PLACEHOLDER: &str = "--";
pub const EMPTY_STATUS: &str = "Enter at least one field to calculate.";
pub const DIRECT_NOTE: &str = "Grade confirmed";
pub const NOT_AVAILABLE: &str = "N/A";

pub fn format_requirement(model: &ScoringModel, requirement: &Requirement) -> String {
    let limits = &model.limits;
    let internal_total = model.internal_raw_total();
    match *requirement {
        Requirement::External { value } => format!("{value:.2} / {}", limits.external_max),
        Requirement::Ct1Only { value } => format!("{value:.2} / {}", limits.ct1_max),
        Requirement::Ct2Only { value } => format!("{value:.2} / {}", limits.ct2_max),
        Requirement::InternalNeeded { value, suggestion, .. } => format!(
            "Internal needed: {value:.2} / {internal_total}\nCT1≈{:.2}, CT2≈{:.2}",
            suggestion.ct1, suggestion.ct2
        ),
        Requirement::Both { ext_if_internal_max, internal_if_ext_max, .. } => format!(
            "If CTs max → End-Sem ≈ {ext_if_internal_max:.2} / {}\nIf End-Sem max → Internal ≈ {internal_if_ext_max:.2} / {internal_total}",
            limits.external_max
        ),
        Requirement::NotApplicable => PLACEHOLDER.to_string(),
    }
}

/// Cells of one rendered table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    pub grade: String,
    pub range: String,
    pub requirement: String,
    pub note: String,
}

pub fn render_band_row(model: &ScoringModel, row: &BandRow) -> RenderedRow {
    let band = &row.band;
    RenderedRow {
        grade: band.label.clone(),
        range: format!("{}% - {}%", band.lower_percent, band.upper_percent),
        requirement: format!(
            "For {}% → {}\nFor {}% → {}",
            band.lower_percent,
            format_requirement(model, &row.lower),
            band.upper_percent,
            format_requirement(model, &row.upper)
        ),
        note: row.note.text.clone(),
    }
}

pub fn render_direct(grade: Option<&str>, final_percent: f64, rounded_percent: i64) -> RenderedRow {
    RenderedRow {
        grade: grade.unwrap_or(NOT_AVAILABLE).to_string(),
        range: PLACEHOLDER.to_string(),
        requirement: format!("Final: {final_percent:.2}% (rounded: {rounded_percent}%)"),
        note: DIRECT_NOTE.to_string(),
    }
}

/// Plain-text rendering of a whole outcome, one block per row.
pub fn render_outcome(model: &ScoringModel, outcome: &TableOutcome) -> String {
    match outcome {
        TableOutcome::Empty => EMPTY_STATUS.to_string(),
        TableOutcome::Direct { grade, final_percent, rounded_percent } => {
            let row = render_direct(grade.as_deref(), *final_percent, *rounded_percent);
            let tone = GradeTone::for_label(grade.as_deref());
            format!("{} [{}]\n{}\n{}", row.grade, tone.as_str(), row.requirement, row.note)
        }
        TableOutcome::Bands { rows } => rows
            .iter()
            .map(|r| {
                let row = render_band_row(model, r);
                format!("{} ({})\n{}\n=> {}", row.grade, row.range, indent(&row.requirement), row.note)
            })
            .collect::<Vec<_>>()
            .join("\n\n"),
    }
}

fn indent(text: &str) -> String {
    text.lines().map(|l| format!("  {l}")).collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feasibility::{Feasibility, FeasibilityNote};
    use crate::model::GradeBand;
    use crate::requirement::CtSplit;

    #[test]
    fn single_value_kinds_show_their_ceiling() {
        let m = ScoringModel::default();
        assert_eq!(format_requirement(&m, &Requirement::External { value: 12.5 }), "12.50 / 75");
        assert_eq!(format_requirement(&m, &Requirement::Ct1Only { value: 3.0 }), "3.00 / 50");
        assert_eq!(format_requirement(&m, &Requirement::Ct2Only { value: -1.234 }), "-1.23 / 60");
        assert_eq!(format_requirement(&m, &Requirement::NotApplicable), "--");
    }

    #[test]
    fn internal_needed_shows_split() {
        let m = ScoringModel::default();
        let req = Requirement::InternalNeeded {
            value: 55.0,
            weighted_needed: 30.0,
            suggestion: CtSplit { ct1: 25.0, ct2: 30.0 },
        };
        assert_eq!(format_requirement(&m, &req), "Internal needed: 55.00 / 110\nCT1≈25.00, CT2≈30.00");
    }

    #[test]
    fn both_shows_two_lines() {
        let m = ScoringModel::default();
        let req = Requirement::Both {
            ext_if_internal_max: 39.376,
            internal_if_ext_max: 75.1667,
            suggestion: CtSplit { ct1: 0.0, ct2: 0.0 },
        };
        let text = format_requirement(&m, &req);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "If CTs max → End-Sem ≈ 39.38 / 75");
        assert_eq!(lines[1], "If End-Sem max → Internal ≈ 75.17 / 110");
    }

    #[test]
    fn band_row_cells() {
        let m = ScoringModel::default();
        let row = BandRow {
            band: GradeBand::new("F", 0.0, 34.999),
            lower: Requirement::External { value: -10.0 },
            upper: Requirement::External { value: 5.0 },
            note: FeasibilityNote { text: "Skipping is now also an option!".into(), category: Feasibility::Achieved },
        };
        let rendered = render_band_row(&m, &row);
        assert_eq!(rendered.grade, "F");
        assert_eq!(rendered.range, "0% - 34.999%");
        assert_eq!(rendered.requirement, "For 0% → -10.00 / 75\nFor 34.999% → 5.00 / 75");
    }

    #[test]
    fn direct_and_empty_rendering() {
        let m = ScoringModel::default();
        let direct = render_direct(None, 101.4, 101);
        assert_eq!(direct.grade, "N/A");
        assert_eq!(direct.requirement, "Final: 101.40% (rounded: 101%)");

        let outcome = TableOutcome::Direct { grade: Some("O".into()), final_percent: 95.0, rounded_percent: 95 };
        assert!(render_outcome(&m, &outcome).starts_with("O [bright]"));
        assert_eq!(render_outcome(&m, &TableOutcome::Empty), EMPTY_STATUS);
    }
}
