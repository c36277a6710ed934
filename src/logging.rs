use std::str::FromStr;
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use crate::errors::ConfigError;
use crate::initialization::General;

const PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {h({l})} {M} - {m}{n}";

/// Sets up logging to both console and the configured log file
///
/// # Arguments
///
/// * 'general' - log file path and log level
pub fn setup_logger(general: &General) -> Result<(), ConfigError> {
    let level = LevelFilter::from_str(&general.log_level)
        .map_err(|_| ConfigError(format!("unknown log level: {}", general.log_level)))?;

    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build();

    let file = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build(&general.log_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .appender(Appender::builder().build("file", Box::new(file)))
        .build(Root::builder().appender("stdout").appender("file").build(level))?;

    log4rs::init_config(config)?;

    Ok(())
}
