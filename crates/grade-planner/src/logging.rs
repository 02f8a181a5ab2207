use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable that overrides every other level setting.
pub const LOG_ENV: &str = "GRADE_PLANNER_LOG";

/// Initialize structured logging to stderr based on CLI arguments.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let directive = match (verbose, log_level) {
        (_, Some(level)) if level.contains('=') => level.to_string(),
        (_, Some(level)) => format!("grade_planner={level}"),
        (true, None) => "grade_planner=debug".to_string(),
        (false, None) => "grade_planner=warn".to_string(),
    };

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(directive));
    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr).with_ansi(false))
            .try_init()?;
    } else {
        registry
            .with(fmt::layer().compact().with_target(false).with_writer(std::io::stderr).with_ansi(false))
            .try_init()?;
    }

    Ok(())
}
