mod cli;
mod commands;
mod workspace;

use std::process::ExitCode;

use splitterm_config::SplittermConfig;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "splitterm=info";

fn main() -> ExitCode {
    let args = cli::parse();

    // Config is read before logging so its level can seed the filter.
    let loaded = match &args.config {
        Some(path) => splitterm_config::load_config_from(path),
        None => splitterm_config::load_config(),
    };

    let log_directive = args
        .log_level
        .as_deref()
        .map(directive_for)
        .or_else(|| {
            loaded
                .as_ref()
                .ok()
                .map(|c| c.logging.level.directive().to_string())
        })
        .unwrap_or_else(|| DEFAULT_DIRECTIVE.to_string());
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| LevelFilter::INFO.into()),
            ),
        )
        .init();

    tracing::debug!("splitterm v{} starting", env!("CARGO_PKG_VERSION"));

    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        SplittermConfig::default()
    });

    match commands::execute(&args, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("splitterm: {e}");
            ExitCode::FAILURE
        }
    }
}

/// A bare level name applies to this binary's crates; anything else is
/// taken as a full directive.
fn directive_for(level: &str) -> String {
    match level {
        "trace" | "debug" | "info" | "warn" | "error" => format!("splitterm={level}"),
        other => other.to_string(),
    }
}
