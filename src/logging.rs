use std::fmt;
use std::fs::File;
use std::path::Path;

use simplelog::*;


#[derive(Debug)]
pub enum LoggingError {
    /// The log file couldn't be created.
    Io(std::io::Error),
    /// A global logger was already installed.
    AlreadyInitialized(log::SetLoggerError),
}

impl fmt::Display for LoggingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggingError::Io(e) => write!(f, "unable to create log file: {e}"),
            LoggingError::AlreadyInitialized(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for LoggingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoggingError::Io(e) => Some(e),
            LoggingError::AlreadyInitialized(e) => Some(e),
        }
    }
}

/// Install a global logger that prints messages at or above `level` to the terminal.
///
/// If `file` is given, everything at `Debug` and above is also written there. Tree
/// rotations and fixup cases are logged at `Trace`, so pass `LevelFilter::Trace` to
/// see them.
pub fn initialize_logging(level: LevelFilter, file: Option<&Path>) -> Result<(), LoggingError> {
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![
        TermLogger::new(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto),
    ];
    if let Some(path) = file {
        let file = File::create(path).map_err(LoggingError::Io)?;
        loggers.push(WriteLogger::new(LevelFilter::Debug, Config::default(), file));
    }
    CombinedLogger::init(loggers).map_err(LoggingError::AlreadyInitialized)
}
