pub mod cli;
pub mod config;
pub mod error;
pub mod feasibility;
pub mod format;
pub mod logging;
pub mod model;
pub mod planner;
pub mod requirement;
pub mod weighting;

pub use crate::error::*;
pub use crate::feasibility::*;
pub use crate::model::*;
pub use crate::planner::compute_table;
pub use crate::requirement::*;
