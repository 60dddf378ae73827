//! Terminal character counter
//!
//! Counts characters (grapheme clusters), words, lines and UTF-8 bytes as you type, with an
//! optional maximum length that can be enforced as a hard limit.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p charcount-tui -- --max 280 --hard-limit
//! echo "don't stop" | cargo run -p charcount-tui -- --report
//! ```
//!
//! # Keys
//!
//! - Typing / paste / Enter: edit text
//! - Backspace: delete the last character (whole grapheme)
//! - Tab: switch between text and max-length field
//! - Ctrl+K: toggle hard limit
//! - Ctrl+T: toggle light/dark theme (persisted)
//! - Ctrl+Y: copy text to clipboard
//! - Ctrl+L: clear text
//! - Esc / Ctrl+Q: quit
//!
//! # Logging
//!
//! Pass `--log-file <path>` to write logs; the filter is read from `CHARCOUNT_LOG`
//! (e.g. `CHARCOUNT_LOG=debug`) and defaults to `info`.

mod app;
mod preferences;
mod theme;
mod ui;

use app::{App, AppOptions};
use charcount_core::{LimitConfig, LimitStatus, MetricsReport, Segmenter, compute_metrics};
use charcount_core::{enforce_limit, parse_max_graphemes};
use clap::Parser;
use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use preferences::PreferenceStore;
use ratatui::{Terminal, backend::CrosstermBackend};
use serde::Serialize;
use std::{
    fs::File,
    io::{self, Read, stdout},
    path::{Path, PathBuf},
    sync::Mutex,
    time::{Duration, Instant},
};
use theme::Theme;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "charcount", version, about = "Unicode-aware character counter")]
struct Cli {
    /// Maximum length in characters (0 or negative = no limit).
    #[arg(long, allow_hyphen_values = true, default_value = "0")]
    max: String,

    /// Truncate input that exceeds --max instead of only reporting it.
    #[arg(long)]
    hard_limit: bool,

    /// Count Unicode code points instead of grapheme clusters.
    #[arg(long)]
    code_points: bool,

    /// Theme for this session (does not change the saved preference).
    #[arg(long, value_enum)]
    theme: Option<Theme>,

    /// Read text from stdin, print a JSON report and exit.
    #[arg(long)]
    report: bool,

    /// Directory for preferences (defaults to the platform config dir).
    #[arg(long)]
    config_dir: Option<PathBuf>,

    /// Write logs to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn segmenter(&self) -> Segmenter {
        if self.code_points {
            Segmenter::CodePoint
        } else {
            Segmenter::detect()
        }
    }

    fn limit(&self) -> LimitConfig {
        LimitConfig {
            max_graphemes: parse_max_graphemes(&self.max),
            hard_limit_enabled: self.hard_limit,
        }
    }
}

#[derive(Debug, Serialize)]
struct CliReport<'a> {
    segmenter: Segmenter,
    limit: LimitConfig,
    #[serde(flatten)]
    report: MetricsReport,
    status: LimitStatus,
    /// Present only when the hard limit cut the input.
    #[serde(skip_serializing_if = "Option::is_none")]
    clamped_text: Option<&'a str>,
}

fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_env("CHARCOUNT_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file));
    // A subscriber may already be installed (e.g. by an embedding host); keep it.
    let _ = subscriber.try_init();
    Ok(())
}

fn run_report(cli: &Cli) -> io::Result<()> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;

    let segmenter = cli.segmenter();
    let limit = cli.limit();
    let text = enforce_limit(&input, &limit, segmenter);
    let report = compute_metrics(text, &limit, segmenter);
    tracing::debug!(bytes = input.len(), kept = text.len(), "report computed");

    let out = CliReport {
        segmenter,
        limit,
        report,
        status: report.status(),
        clamped_text: (text.len() < input.len()).then_some(text),
    };
    let json = serde_json::to_string_pretty(&out).map_err(io::Error::other)?;
    println!("{json}");
    Ok(())
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    if cli.report {
        return run_report(&cli);
    }

    let store = match &cli.config_dir {
        Some(dir) => Some(PreferenceStore::new(dir)),
        None => PreferenceStore::default_location(),
    };
    let saved_theme = store
        .as_ref()
        .map(|s| s.load_or_default().theme)
        .unwrap_or_default();

    let options = AppOptions {
        limit_input: cli.max.clone(),
        hard_limit: cli.hard_limit,
        segmenter: cli.segmenter(),
        theme: cli.theme.unwrap_or(saved_theme),
    };
    tracing::info!(?options, preferences = ?store.as_ref().map(|s| s.path()), "starting");

    let mut app = App::new(options, store);

    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        tracing::error!(error = %err, "terminal loop failed");
    }
    result
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if app.should_quit {
            break;
        }

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => app.handle_key_event(key),
                Event::Paste(text) => app.handle_paste(text),
                _ => {}
            }
        }

        app.expire_status(Instant::now());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["charcount"]);
        assert_eq!(cli.limit(), LimitConfig::unlimited());
        assert_eq!(cli.segmenter(), Segmenter::Cluster);
        assert!(cli.theme.is_none());
    }

    #[test]
    fn test_cli_limit_flags() {
        let cli = Cli::parse_from(["charcount", "--max", "-3", "--hard-limit", "--code-points"]);
        assert_eq!(cli.limit(), LimitConfig::hard(0));
        assert_eq!(cli.segmenter(), Segmenter::CodePoint);

        let cli = Cli::parse_from(["charcount", "--max", "280", "--theme", "dark"]);
        assert_eq!(cli.limit(), LimitConfig::soft(280));
        assert_eq!(cli.theme, Some(Theme::Dark));
    }

    #[test]
    fn test_report_json_shape() {
        let limit = LimitConfig::hard(3);
        let input = "abcdef";
        let text = enforce_limit(input, &limit, Segmenter::Cluster);
        let report = compute_metrics(text, &limit, Segmenter::Cluster);
        let out = CliReport {
            segmenter: Segmenter::Cluster,
            limit,
            report,
            status: report.status(),
            clamped_text: Some(text),
        };
        let value = serde_json::to_value(&out).unwrap();
        assert_eq!(value["segmenter"], "cluster");
        assert_eq!(value["metrics"]["grapheme_count"], 3);
        assert_eq!(value["used"], 3);
        assert_eq!(value["remaining"], 0);
        assert_eq!(value["status"]["within"]["remaining"], 0);
        assert_eq!(value["clamped_text"], "abc");
    }
}
