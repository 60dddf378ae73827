//! Application state and input handling.
//!
//! All state the renderer needs lives in [`App`] and is handed to [`crate::ui::render`]
//! explicitly.

use crate::preferences::{PreferenceStore, Preferences};
use crate::theme::Theme;
use charcount_core::{
    LimitConfig, MetricsReport, Segmenter, compute_metrics, enforce_limit, parse_max_graphemes,
};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::{Duration, Instant};

/// How long transient status messages (e.g. "Copied") stay visible.
const STATUS_TIMEOUT: Duration = Duration::from_millis(1200);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Text,
    Limit,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub shown_at: Instant,
}

/// Startup options resolved from the command line and preferences.
#[derive(Debug, Clone)]
pub struct AppOptions {
    /// Raw limit field contents (normalized with `parse_max_graphemes`).
    pub limit_input: String,
    pub hard_limit: bool,
    pub segmenter: Segmenter,
    pub theme: Theme,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            limit_input: String::new(),
            hard_limit: false,
            segmenter: Segmenter::detect(),
            theme: Theme::default(),
        }
    }
}

pub struct App {
    text: String,
    limit_input: String,
    hard_limit: bool,
    segmenter: Segmenter,
    theme: Theme,
    focus: Focus,
    report: MetricsReport,
    status: Option<StatusMessage>,
    preferences: Option<PreferenceStore>,
    /// Created on first copy and kept alive: on X11 the copied text is served by this owner.
    clipboard: Option<arboard::Clipboard>,
    pub should_quit: bool,
}

impl App {
    pub fn new(options: AppOptions, preferences: Option<PreferenceStore>) -> Self {
        let limit = LimitConfig {
            max_graphemes: parse_max_graphemes(&options.limit_input),
            hard_limit_enabled: options.hard_limit,
        };
        let mut app = Self {
            text: String::new(),
            limit_input: options.limit_input,
            hard_limit: options.hard_limit,
            segmenter: options.segmenter,
            theme: options.theme,
            focus: Focus::Text,
            report: compute_metrics("", &limit, options.segmenter),
            status: None,
            preferences,
            clipboard: None,
            should_quit: false,
        };
        app.refresh();
        app
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn limit_input(&self) -> &str {
        &self.limit_input
    }

    pub fn hard_limit(&self) -> bool {
        self.hard_limit
    }

    pub fn segmenter(&self) -> Segmenter {
        self.segmenter
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn report(&self) -> &MetricsReport {
        &self.report
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn limit(&self) -> LimitConfig {
        LimitConfig {
            max_graphemes: parse_max_graphemes(&self.limit_input),
            hard_limit_enabled: self.hard_limit,
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // AltGr arrives as Ctrl+Alt on some platforms; those are characters, not shortcuts.
        let shortcut = key.modifiers.contains(KeyModifiers::CONTROL)
            && !key.modifiers.contains(KeyModifiers::ALT);
        match (key.code, shortcut) {
            (KeyCode::Esc, _) | (KeyCode::Char('q'), true) => self.should_quit = true,
            (KeyCode::Char('t'), true) => self.toggle_theme(),
            (KeyCode::Char('k'), true) => self.toggle_hard_limit(),
            (KeyCode::Char('y'), true) => self.copy_to_clipboard(),
            (KeyCode::Char('l'), true) => self.clear(),
            (KeyCode::Tab, _) | (KeyCode::BackTab, _) => {
                self.focus = match self.focus {
                    Focus::Text => Focus::Limit,
                    Focus::Limit => Focus::Text,
                };
            }
            (KeyCode::Enter, _) if self.focus == Focus::Limit => self.focus = Focus::Text,
            (KeyCode::Enter, _) => self.insert_str("\n"),
            (KeyCode::Backspace, _) => self.backspace(),
            (KeyCode::Char(ch), _) => self.insert_char(ch),
            _ => {}
        }
    }

    pub fn handle_paste(&mut self, text: String) {
        // Terminals deliver pasted newlines as CR or CRLF.
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        match self.focus {
            Focus::Text => self.insert_str(&normalized),
            Focus::Limit => {
                for ch in normalized.chars() {
                    self.push_limit_char(ch);
                }
                self.refresh();
            }
        }
    }

    pub fn insert_str(&mut self, s: &str) {
        self.text.push_str(s);
        self.refresh();
    }

    fn insert_char(&mut self, ch: char) {
        match self.focus {
            Focus::Text => {
                self.text.push(ch);
                self.refresh();
            }
            Focus::Limit => {
                self.push_limit_char(ch);
                self.refresh();
            }
        }
    }

    fn push_limit_char(&mut self, ch: char) {
        if ch.is_ascii_digit() || ch == '-' || ch == '+' {
            self.limit_input.push(ch);
        }
    }

    /// Remove the last unit (grapheme with the cluster segmenter) of the focused field.
    fn backspace(&mut self) {
        match self.focus {
            Focus::Text => {
                let count = self.segmenter.count(&self.text);
                if count > 0 {
                    let end = self.segmenter.prefix_end(&self.text, count - 1);
                    self.text.truncate(end);
                }
            }
            Focus::Limit => {
                self.limit_input.pop();
            }
        }
        self.refresh();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.refresh();
    }

    pub fn toggle_hard_limit(&mut self) {
        self.hard_limit = !self.hard_limit;
        tracing::debug!(hard_limit = self.hard_limit, "hard limit toggled");
        self.refresh();
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        tracing::info!(theme = ?self.theme, "theme changed");

        let Some(store) = &self.preferences else {
            return;
        };
        if let Err(err) = store.save(&Preferences { theme: self.theme }) {
            tracing::warn!(error = %err, "failed to save preferences");
            self.set_status(format!("Could not save theme: {err}"));
        }
    }

    fn copy_to_clipboard(&mut self) {
        let clipboard = match self.clipboard.take() {
            Some(clipboard) => Ok(clipboard),
            None => arboard::Clipboard::new(),
        };
        let result = clipboard.and_then(|mut clipboard| {
            let result = clipboard.set_text(self.text.clone());
            self.clipboard = Some(clipboard);
            result
        });
        match result {
            Ok(()) => {
                tracing::debug!(bytes = self.text.len(), "copied text to clipboard");
                self.set_status("✅ Copied".to_string());
            }
            Err(err) => {
                tracing::warn!(error = %err, "clipboard copy failed");
                self.set_status(format!("Copy failed: {err}"));
            }
        }
    }

    fn set_status(&mut self, text: String) {
        self.status = Some(StatusMessage {
            text,
            shown_at: Instant::now(),
        });
    }

    /// Drop the status message once it has been visible long enough.
    pub fn expire_status(&mut self, now: Instant) {
        if self
            .status
            .as_ref()
            .is_some_and(|s| now.duration_since(s.shown_at) >= STATUS_TIMEOUT)
        {
            self.status = None;
        }
    }

    /// Enforce the hard limit (if any), then recompute metrics.
    fn refresh(&mut self) {
        let limit = self.limit();
        let kept = enforce_limit(&self.text, &limit, self.segmenter).len();
        if kept < self.text.len() {
            tracing::debug!(
                max = limit.max_graphemes,
                dropped_bytes = self.text.len() - kept,
                "clamped input to hard limit"
            );
            self.text.truncate(kept);
        }
        self.report = compute_metrics(&self.text, &limit, self.segmenter);
    }
}
