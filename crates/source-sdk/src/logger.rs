use std::fs::File;
use std::path::PathBuf;

use log::LevelFilter;
use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode, WriteLogger};

/// Default level. Available values: Off, Error, Warn, Info, Debug, Trace
const LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Default path to the log file.
const LOG_FILE_PATH: &str = "source_sdk.log";

/// Where and how much to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    pub level: LevelFilter,
    /// Also write to this file. `None` logs to the terminal only.
    pub file_path: Option<PathBuf>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: LOG_LEVEL,
            file_path: Some(PathBuf::from(LOG_FILE_PATH)),
        }
    }
}

/// Initializes the logging system with [`LoggerConfig::default`].
pub fn init() -> anyhow::Result<()> {
    init_with(LoggerConfig::default())
}

/// Initializes the logging system.
///
/// Logs go to stderr and, if the file can be created, to `config.file_path`.
/// Fails only if a global logger is already set.
pub fn init_with(config: LoggerConfig) -> anyhow::Result<()> {
    let log_file = config.file_path.as_ref().map(File::create);
    let file_error = match log_file {
        Some(Ok(file)) => {
            CombinedLogger::init(vec![
                // Logger for the terminal (stderr) with colored output.
                TermLogger::new(
                    config.level,
                    Config::default(),
                    TerminalMode::Mixed,
                    ColorChoice::Auto,
                ),
                WriteLogger::new(config.level, Config::default(), file),
            ])?;
            None
        }
        Some(Err(e)) => {
            TermLogger::init(config.level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto)?;
            Some(e)
        }
        None => {
            TermLogger::init(config.level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto)?;
            None
        }
    };

    if let (Some(e), Some(path)) = (file_error, &config.file_path) {
        log::warn!("Could not open log file {}: {e}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_logs_info_to_file() {
        let config = LoggerConfig::default();
        assert_eq!(config.level, LevelFilter::Info);
        assert_eq!(config.file_path.as_deref(), Some(std::path::Path::new("source_sdk.log")));
    }

    #[test]
    fn second_init_fails() {
        let config = LoggerConfig { level: LevelFilter::Warn, file_path: None };
        // Whichever call comes first in this process wins; the next one must fail.
        let _ = init_with(config.clone());
        assert!(init_with(config).is_err());
    }
}
