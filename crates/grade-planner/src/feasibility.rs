use serde::{Deserialize, Serialize};

use crate::model::ScoringModel;
use crate::requirement::Requirement;

/// Requirements within this many raw points of their ceiling are hard.
pub const HARD_MARGIN: f64 = 9.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feasibility {
    Impossible,
    Hard,
    Possible,
    Achieved,
}

/// Colour family a renderer uses for a note cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteTone {
    Possible,
    Hard,
    Impossible,
}

impl Feasibility {
    /// An achieved band renders like a possible one: the lower bound alone
    /// already guarantees it.
    pub fn tone(self) -> NoteTone {
        match self {
            Feasibility::Impossible => NoteTone::Impossible,
            Feasibility::Hard => NoteTone::Hard,
            Feasibility::Possible | Feasibility::Achieved => NoteTone::Possible,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeasibilityNote {
    pub text: String,
    pub category: Feasibility,
}

impl FeasibilityNote {
    fn new(category: Feasibility, text: impl Into<String>) -> Self {
        Self { text: text.into(), category }
    }
}

/// Grades a band from its lower-bound requirement. The upper bound only ever
/// annotates the text when it is itself out of reach.
pub fn classify(model: &ScoringModel, lower: &Requirement, upper: &Requirement) -> FeasibilityNote {
    let Some((value, ceiling)) = lower.graded_value(model) else {
        return FeasibilityNote::new(Feasibility::Possible, "Possible");
    };
    let upper_impossible = upper.exceeds_ceiling(model);

    if value > ceiling {
        return FeasibilityNote::new(Feasibility::Impossible, "Impossible");
    }
    if value <= 0.0 {
        let text = if upper_impossible {
            "Already achieved (upper bound impossible)"
        } else {
            "Skipping is now also an option!"
        };
        return FeasibilityNote::new(Feasibility::Achieved, text);
    }
    if value >= ceiling - HARD_MARGIN {
        let text = if upper_impossible { "Possible (hard) - upper bound impossible" } else { "Possible (hard)" };
        return FeasibilityNote::new(Feasibility::Hard, text);
    }
    let text = if upper_impossible { "Possible - upper bound impossible" } else { "Possible" };
    FeasibilityNote::new(Feasibility::Possible, text)
}
