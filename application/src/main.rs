use std::{io, sync::OnceLock};

use application::{Args, Config, Console};
use service::{infra::Memory, Service};
use tokio::io::BufReader;
use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    layer::{Layer as _, SubscriberExt as _},
    util::SubscriberInitExt as _,
};

static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Standard output belongs to the console, so every log goes to stderr.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_writer(io::stderr)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || is_logged(*meta.level(), LOG_LEVEL.get().copied())
                })),
        )
        .init();

    _ = start().await;
}

/// Checks whether an event of the provided `level` passes the configured
/// `max` level, defaulting to [`log::Level::INFO`] until one is configured.
fn is_logged(level: log::Level, max: Option<log::Level>) -> bool {
    max.unwrap_or(log::Level::INFO) >= level
}

async fn start() -> Result<(), ()> {
    let Args { config, log_level } = Args::parse().map_err(|e| {
        log::error!("failed to parse command line arguments: {e}");
    })?;

    let Config {
        service: service_config,
        console,
        log,
    } = Config::new(config).map_err(|e| {
        log::error!("failed to load `Config`: {e}");
    })?;

    LOG_LEVEL
        .set(log_level.unwrap_or(log.level).into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let service_config =
        service::Config::try_from(service_config).map_err(|e| {
            log::error!("failed to load `Config`: {e}");
        })?;
    let service = Service::start(service_config, Memory::default())
        .await
        .map_err(|e| {
            log::error!("failed to start `Service`: {e}");
        })?;

    let console = Console::new(service, console.prompt, console.greeting);
    console
        .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await
        .map_err(|e| {
            log::error!("console I/O failed: {e}");
        })
}

#[cfg(test)]
mod spec {
    use tracing::Level;

    use super::is_logged;

    #[test]
    fn filters_by_configured_level() {
        assert!(is_logged(Level::INFO, None));
        assert!(is_logged(Level::ERROR, None));
        assert!(!is_logged(Level::DEBUG, None));

        assert!(!is_logged(Level::INFO, Some(Level::WARN)));
        assert!(is_logged(Level::WARN, Some(Level::WARN)));
        assert!(is_logged(Level::TRACE, Some(Level::TRACE)));
    }
}
