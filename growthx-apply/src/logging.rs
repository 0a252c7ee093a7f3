//! Log setup.
//!
//! The terminal belongs to the wizard while it runs, so log lines go to a
//! file. Directives from `RUST_LOG` override the defaults target by target.

use std::{env, path::PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt};

pub const LOG_FILE: &str = "leadform.log";

const DEFAULT_DIRECTIVES: &[&str] = &[
    "growthx_apply=info",
    "leadform=info",
    "leadform_http=info",
];

/// Directory the log file is written to.
pub fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("growthx-apply"))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Build the filter from the defaults, then `overrides` in `RUST_LOG` syntax.
///
/// A directive for a target already in the defaults replaces it.
fn env_filter(overrides: Option<&str>) -> anyhow::Result<EnvFilter> {
    let overrides = overrides.unwrap_or_default().split(',');
    let mut filter = EnvFilter::default();
    for directive in DEFAULT_DIRECTIVES.iter().copied().chain(overrides) {
        let directive = directive.trim();
        if directive.is_empty() {
            continue;
        }
        filter = filter.add_directive(
            directive
                .parse()
                .with_context(|| format!("invalid log directive `{directive}`"))?,
        );
    }
    Ok(filter)
}

/// Install the global subscriber.
///
/// Keep the returned guard alive until exit, dropping it flushes the writer.
pub fn init_tracing() -> anyhow::Result<WorkerGuard> {
    let dir = log_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let overrides = env::var(EnvFilter::DEFAULT_ENV).ok();
    fmt()
        .with_env_filter(env_filter(overrides.as_deref())?)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to install tracing subscriber: {err}"))?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_directives_parse() {
        let filter = env_filter(None).unwrap().to_string();
        assert!(filter.contains("leadform=info"));
        assert!(filter.contains("growthx_apply=info"));
    }

    #[test]
    fn user_directive_overrides_default() {
        let filter = env_filter(Some("leadform=debug")).unwrap().to_string();
        assert!(filter.contains("leadform=debug"));
        assert!(!filter.contains("leadform=info"));
        assert!(filter.contains("leadform_http=info"));
    }

    #[test]
    fn user_directives_add_new_targets() {
        let filter = env_filter(Some("reqwest=warn, ")).unwrap().to_string();
        assert!(filter.contains("reqwest=warn"));
        assert!(filter.contains("leadform=info"));
    }

    #[test]
    fn invalid_directive_is_reported() {
        assert!(env_filter(Some("leadform=loud")).is_err());
    }

    #[test]
    fn log_dir_is_app_specific() {
        let dir = log_dir();
        assert!(dir.ends_with("growthx-apply") || dir == PathBuf::from("."));
    }
}
