use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use crate::format::render_outcome;
use crate::logging::init_tracing;
use crate::model::{ScoreInputs, ScoringModel};
use crate::planner::compute_table;

/// Exit code for bad flags or out-of-domain scores.
pub const EXIT_USAGE: i32 = 2;

/// Works out what is still needed for each letter grade.
#[derive(Debug, Parser)]
#[command(name = "grade-planner", author, version, about = "Per-band score requirements for CT1/CT2/End-Sem grading")]
pub struct Cli {
    /// Scoring model JSON (limits, weights, grade bands). Built-in model if omitted.
    #[arg(long, global = true, value_name = "FILE", env = "GRADE_PLANNER_MODEL")]
    pub model: Option<PathBuf>,

    /// Log at debug level.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Explicit log level or filter directive (e.g. `trace`).
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr.
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute the requirement table (or the settled grade) for the known scores.
    Table(TableArgs),
    /// Print the active scoring model as JSON.
    Model,
}

#[derive(Debug, Args)]
pub struct TableArgs {
    /// Raw CT1 score.
    #[arg(long, allow_negative_numbers = true)]
    pub ct1: Option<f64>,
    /// Raw CT2 score.
    #[arg(long, allow_negative_numbers = true)]
    pub ct2: Option<f64>,
    /// Raw End-Sem (external) score.
    #[arg(long = "ext", allow_negative_numbers = true)]
    pub external: Option<f64>,
    /// Weighted internal summary; overrides CT1/CT2.
    #[arg(long = "internal", allow_negative_numbers = true)]
    pub weighted_internal: Option<f64>,
    /// Print the outcome as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

impl TableArgs {
    pub fn inputs(&self) -> ScoreInputs {
        ScoreInputs {
            ct1: self.ct1,
            ct2: self.ct2,
            external: self.external,
            weighted_internal: self.weighted_internal,
        }
    }
}

/// Outcome of a CLI run that the binary turns into an exit code.
#[derive(Debug)]
pub enum RunError {
    Usage(String),
    Failure(anyhow::Error),
}

impl From<anyhow::Error> for RunError {
    fn from(err: anyhow::Error) -> Self {
        RunError::Failure(err)
    }
}

pub fn run(cli: Cli) -> Result<(), RunError> {
    if let Err(err) = init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        return Err(RunError::Usage(format!("invalid log settings: {err}")));
    }

    let model = load_model(cli.model.as_deref())?;
    match cli.command {
        Command::Table(args) => run_table(&model, &args),
        Command::Model => {
            let json = serde_json::to_string_pretty(&model).context("serializing scoring model")?;
            println!("{json}");
            Ok(())
        }
    }
}

fn run_table(model: &ScoringModel, args: &TableArgs) -> Result<(), RunError> {
    let inputs = args.inputs();
    model.check_inputs(&inputs).map_err(|err| RunError::Usage(err.to_string()))?;

    let outcome = compute_table(model, &inputs);
    if args.json {
        let json = serde_json::to_string_pretty(&outcome).context("serializing table")?;
        println!("{json}");
    } else {
        println!("{}", render_outcome(model, &outcome));
    }
    Ok(())
}

fn load_model(path: Option<&std::path::Path>) -> Result<ScoringModel, RunError> {
    match path {
        Some(p) => Ok(ScoringModel::from_path(p).map_err(anyhow::Error::from)?),
        None => Ok(ScoringModel::default()),
    }
}
