mod cli;
mod report;

use anyhow::Result;
use clap::Parser;
use qw_stats::{ActiveWeaponEncoding, ItemFlags, StatsConfig};
use tracing::debug;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};

fn main() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(directives.as_deref()))
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

/// `RUST_LOG` directives, falling back to `warn` when none are given.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(directives.unwrap_or_default())
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let encoding: Option<ActiveWeaponEncoding> = match &cli.command {
        Command::Weapon { encoding, .. } => encoding.map(Into::into),
        _ => None,
    };
    let config = StatsConfig::from_env().with_encoding_override(encoding);
    debug!(?config, "loaded config");

    let lines = match cli.command {
        Command::Items { mask } => report::items(ItemFlags::from_raw(mask)),
        Command::Stat { index } => vec![report::slot(index)?],
        Command::Weapon { value, .. } => vec![report::weapon(value, config.active_weapon)],
        Command::Table => report::table(),
    };
    for line in lines {
        println!("{line}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_filter_defaults_to_warn() {
        assert_eq!(log_filter(None).max_level_hint(), Some(LevelFilter::WARN));
        assert_eq!(log_filter(Some("")).max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn log_filter_honours_rust_log_level() {
        assert_eq!(
            log_filter(Some("debug")).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
        assert_eq!(
            log_filter(Some("qw_stats=trace")).max_level_hint(),
            Some(LevelFilter::TRACE)
        );
    }
}
