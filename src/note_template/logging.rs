use crate::config::Configuration;
use crate::error::{NoteTemplateError, Result};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

/// `debug` wins over `verbose`; otherwise only warnings and errors are shown.
pub fn level_for(config: &Configuration) -> Level {
    if config.debug {
        Level::DEBUG
    } else if config.verbose {
        Level::INFO
    } else {
        Level::WARN
    }
}

/// Installs the global stderr subscriber. Call once, after the configuration is resolved.
pub fn init(config: &Configuration) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level_for(config))
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| NoteTemplateError::Logging(e.to_string()))?;

    if config.debug {
        log_configuration(config);
    }
    Ok(())
}

fn log_configuration(config: &Configuration) {
    match serde_json::to_string_pretty(config) {
        Ok(json) => debug!("resolved configuration:\n{}", json),
        Err(_) => debug!("resolved configuration: {:#?}", config),
    }
}
