//! [`Args`] definitions.

use clap::Parser;

use crate::config::LogLevel;

/// Interactive console of the real estate brokerage registry.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    /// Log level overriding the configured one.
    #[arg(short, long, value_enum)]
    pub log_level: Option<LogLevel>,
}

impl Args {
    /// Parses command line arguments.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse command line arguments.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }
}

#[cfg(test)]
mod spec {
    use clap::Parser as _;

    use crate::config::LogLevel;

    use super::Args;

    #[test]
    fn parses_overrides() {
        let args = Args::try_parse_from(["app"]).unwrap();
        assert_eq!(args.config, "config.toml");
        assert!(args.log_level.is_none());

        let args =
            Args::try_parse_from(["app", "-c", "brokerage.toml", "-l", "debug"])
                .unwrap();
        assert_eq!(args.config, "brokerage.toml");
        assert!(matches!(args.log_level, Some(LogLevel::Debug)));
    }
}
