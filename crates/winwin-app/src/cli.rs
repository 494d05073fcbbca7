use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;
use winwin_common::Rect;

/// winwin: split a window's tabs into two windows and merge them back.
///
/// Reads requests as JSON lines on stdin (`{"action":"splitTabs"}`) and
/// writes acks and button-state broadcasts as JSON lines on stdout.
#[derive(Parser, Debug)]
#[command(name = "winwin", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Simulated screen size.
    #[arg(long, default_value = "1920x1080", value_parser = parse_screen)]
    pub screen: Rect,

    /// Open a window with this many tabs at startup. Repeatable.
    #[arg(short = 'w', long = "window", value_name = "TABS")]
    pub windows: Vec<usize>,

    /// Where the last split ratio is kept.
    #[arg(long)]
    pub ratio_file: Option<PathBuf>,
}

pub fn parse() -> Args {
    Args::parse()
}

/// Parse `WIDTHxHEIGHT` into a screen rect at the origin.
pub fn parse_screen(value: &str) -> Result<Rect, String> {
    let (width, height) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{value}'"))?;
    let width: i32 = width
        .trim()
        .parse()
        .map_err(|e| format!("bad width '{width}': {e}"))?;
    let height: i32 = height
        .trim()
        .parse()
        .map_err(|e| format!("bad height '{height}': {e}"))?;
    if width <= 0 || height <= 0 {
        return Err(format!("screen must be non-empty, got {width}x{height}"));
    }
    Ok(Rect::new(0, 0, width, height))
}

/// Directive for a `--log-level` value. A bare level applies to every
/// winwin crate; anything containing `=` is passed through.
pub fn log_directive(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("winwin={level}")
    }
}

/// Build the log filter. The base is `env` (usually `RUST_LOG`) when set
/// and parseable, else the config directive; a `--log-level` override is
/// added on top of either. Returns the filter and, if the override could
/// not be parsed, a message to log once logging is up.
pub fn log_filter(
    env: Option<&str>,
    override_level: Option<&str>,
    config_directive: &str,
) -> (EnvFilter, Option<String>) {
    let base = env
        .filter(|spec| !spec.trim().is_empty())
        .and_then(|spec| EnvFilter::try_new(spec).ok())
        .unwrap_or_else(|| EnvFilter::new(config_directive));

    let Some(level) = override_level else {
        return (base, None);
    };
    let directive = log_directive(level);
    match directive.parse::<Directive>() {
        Ok(directive) => (base.add_directive(directive), None),
        Err(e) => (base, Some(format!("ignoring --log-level {level}: {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_screen_accepts_dimensions() {
        assert_eq!(parse_screen("1920x1080"), Ok(Rect::new(0, 0, 1920, 1080)));
        assert_eq!(parse_screen("800X600"), Ok(Rect::new(0, 0, 800, 600)));
    }

    #[test]
    fn parse_screen_rejects_garbage() {
        assert!(parse_screen("1920").is_err());
        assert!(parse_screen("wide x tall").is_err());
        assert!(parse_screen("0x600").is_err());
    }

    #[test]
    fn args_collect_windows() {
        let args = Args::try_parse_from(["winwin", "-w", "3", "--window", "1"]).unwrap();
        assert_eq!(args.windows, vec![3, 1]);
        assert_eq!(args.screen, Rect::new(0, 0, 1920, 1080));
        assert!(args.config.is_none());
    }

    #[test]
    fn log_directive_scopes_bare_levels() {
        assert_eq!(log_directive("debug"), "winwin=debug");
        assert_eq!(log_directive("winwin_tiling=trace"), "winwin_tiling=trace");
    }

    #[test]
    fn log_level_is_layered_over_env() {
        let (filter, warning) = log_filter(Some("winwin=warn"), Some("debug"), "winwin=info");
        assert!(warning.is_none());
        assert!(filter.to_string().contains("winwin=debug"));
    }

    #[test]
    fn env_wins_over_config_without_override() {
        let (filter, _) = log_filter(Some("winwin=warn"), None, "winwin=info");
        let rendered = filter.to_string();
        assert!(rendered.contains("winwin=warn"));
        assert!(!rendered.contains("winwin=info"));
    }

    #[test]
    fn config_level_used_without_env() {
        let (filter, _) = log_filter(None, None, "winwin=error");
        assert!(filter.to_string().contains("winwin=error"));

        let (filter, _) = log_filter(Some("  "), None, "winwin=error");
        assert!(filter.to_string().contains("winwin=error"));
    }

    #[test]
    fn bad_override_is_reported() {
        let (filter, warning) = log_filter(None, Some("winwin=loud"), "winwin=info");
        assert!(warning.unwrap().contains("winwin=loud"));
        assert!(filter.to_string().contains("winwin=info"));
    }
}
