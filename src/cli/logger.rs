//! Console logging for the `base8x` binary.
//!
//! Records go to stderr through a [`log4rs`] console appender so they never
//! mix with encoded output on stdout.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

const STDERR: &str = "stderr";
const PATTERN: &str = "{l}: {m}{n}";

/// Builds the logging config: a single stderr appender at `level`.
fn build_config(level: LevelFilter) -> Result<Config, log4rs::config::runtime::ConfigErrors> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build();

    Config::builder()
        .appender(Appender::builder().build(STDERR, Box::new(stderr)))
        .build(Root::builder().appender(STDERR).build(level))
}

/// Installs the stderr logger. Calling it twice keeps the first logger.
pub fn init(level: LevelFilter) -> Result<(), Box<dyn std::error::Error>> {
    let config = build_config(level)?;
    if log4rs::init_config(config).is_err() {
        log::debug!("logger already installed");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_level_follows_flags() {
        for level in [LevelFilter::Off, LevelFilter::Warn, LevelFilter::Debug] {
            let config = build_config(level).unwrap();
            assert_eq!(config.root().level(), level);
            assert_eq!(config.root().appenders(), [STDERR.to_string()]);
        }
    }

    #[test]
    fn test_single_stderr_appender() {
        let config = build_config(LevelFilter::Warn).unwrap();
        let names: Vec<_> = config.appenders().iter().map(|a| a.name()).collect();
        assert_eq!(names, [STDERR]);
    }
}
