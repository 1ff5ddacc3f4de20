use crate::polybases::errors::PolyError;
use log::LevelFilter;
use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

/// Parses the name of a log level: "debug", "info", "warn", "error", "off" or "none".
/// None stands for the default level, info.
pub fn parse_loglevel(loglevel: Option<&str>) -> Result<LevelFilter, PolyError> {
    let Some(level) = loglevel else {
        return Ok(LevelFilter::Info);
    };
    match level.to_lowercase().as_str() {
        "debug" => Ok(LevelFilter::Debug),
        "info" => Ok(LevelFilter::Info),
        "warn" => Ok(LevelFilter::Warn),
        "error" => Ok(LevelFilter::Error),
        "off" | "none" => Ok(LevelFilter::Off),
        other => Err(PolyError::ConfigurationError(format!(
            "loglevel must be debug, info, warn, error, off or none, got {}",
            other
        ))),
    }
}

/// Starts the terminal logger. Returns false if a global logger was already set
/// (e.g. by a previous call), the old one is kept in that case.
pub fn init_logger(loglevel: Option<&str>) -> Result<bool, PolyError> {
    let level = parse_loglevel(loglevel)?;
    if level == LevelFilter::Off {
        return Ok(false);
    }
    let logger_instance = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
    Ok(logger_instance.is_ok())
}
