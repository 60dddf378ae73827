//! Rendering.

use crate::app::{App, Focus};
use charcount_core::Segmenter;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};

pub fn render(frame: &mut Frame, app: &App) {
    let palette = app.theme().palette();
    let base = Style::default()
        .fg(palette.foreground)
        .bg(palette.background);
    frame.render_widget(Block::default().style(base), frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_text(frame, app, chunks[1]);
    render_limit(frame, app, chunks[2]);
    render_stats(frame, app, chunks[3]);
    render_progress(frame, app, chunks[4]);
    render_footer(frame, app, chunks[5]);
}

fn block_for(app: &App, title: &str, focused: bool) -> Block<'static> {
    let palette = app.theme().palette();
    let border = if focused { palette.accent } else { palette.border };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(Span::styled(
            title.to_string(),
            Style::default().fg(palette.muted),
        ))
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.theme().palette();
    let mode = match app.segmenter() {
        Segmenter::Cluster => "graphemes",
        Segmenter::CodePoint => "code points",
    };
    let line = Line::from(vec![
        Span::styled(
            " Character Counter ",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("({mode})  "),
            Style::default().fg(palette.muted),
        ),
        Span::styled(
            format!("[Ctrl+T] {}", app.theme().toggle_label()),
            Style::default().fg(palette.accent_alt),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_text(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus() == Focus::Text;
    let block = block_for(app, " Text ", focused);
    let inner = block.inner(area);

    let lines: Vec<&str> = app.text().split('\n').collect();
    // Keep the last line (where input goes) visible.
    let scroll = lines.len().saturating_sub(usize::from(inner.height.max(1)));
    let scroll = u16::try_from(scroll).unwrap_or(u16::MAX);

    let text: Vec<Line> = lines.iter().map(|l| Line::raw(*l)).collect();
    frame.render_widget(Paragraph::new(text).block(block).scroll((scroll, 0)), area);

    if focused && inner.width > 0 && inner.height > 0 {
        let last = lines.last().copied().unwrap_or("");
        let x = u16::try_from(Line::raw(last).width()).unwrap_or(u16::MAX);
        let row = u16::try_from(lines.len().saturating_sub(1)).unwrap_or(u16::MAX);
        let cursor_x = inner.x.saturating_add(x.min(inner.width - 1));
        let cursor_y = inner
            .y
            .saturating_add(row.saturating_sub(scroll).min(inner.height - 1));
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

fn render_limit(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.theme().palette();
    let focused = app.focus() == Focus::Limit;
    let block = block_for(app, " Max length (0 = none) [Tab] ", focused);
    let inner = block.inner(area);

    let hard = if app.hard_limit() { "[x]" } else { "[ ]" };
    let line = Line::from(vec![
        Span::raw(app.limit_input().to_string()),
        Span::styled(
            format!("   {hard} Hard limit [Ctrl+K]"),
            Style::default().fg(palette.muted),
        ),
    ]);
    frame.render_widget(Paragraph::new(line).block(block), area);

    if focused && inner.width > 0 && inner.height > 0 {
        let x = u16::try_from(app.limit_input().len()).unwrap_or(u16::MAX);
        frame.set_cursor_position((inner.x.saturating_add(x.min(inner.width - 1)), inner.y));
    }
}

fn render_stats(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.theme().palette();
    let m = app.report().metrics;
    let stat = |label: &'static str, value: usize| {
        vec![
            Span::styled(format!("{label}: "), Style::default().fg(palette.muted)),
            Span::styled(
                format!("{value}   "),
                Style::default()
                    .fg(palette.foreground)
                    .add_modifier(Modifier::BOLD),
            ),
        ]
    };
    let spans: Vec<Span> = [
        stat("Chars", m.grapheme_count),
        stat("Words", m.word_count),
        stat("Lines", m.line_count),
        stat("Bytes", m.byte_count),
    ]
    .into_iter()
    .flatten()
    .collect();

    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(block_for(app, " Stats ", false)),
        area,
    );
}

fn render_progress(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.theme().palette();
    let report = app.report();
    let (bar, label) = if report.is_over_limit() {
        (palette.danger, palette.warning)
    } else {
        (palette.accent, palette.accent_alt)
    };

    let title = format!(" {} · {} ", report.used_label(), report.status());
    let gauge = Gauge::default()
        .block(block_for(app, &title, false))
        .gauge_style(Style::default().fg(bar).bg(palette.border))
        .label(Span::styled(
            report.fill_width(),
            Style::default().fg(label).add_modifier(Modifier::BOLD),
        ))
        .ratio((report.percent_filled / 100.0).clamp(0.0, 1.0));
    frame.render_widget(gauge, area);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.theme().palette();
    let line = match app.status() {
        Some(status) => Line::from(Span::styled(
            status.text.clone(),
            Style::default().fg(palette.accent),
        )),
        None => Line::from(Span::styled(
            "Ctrl+Y copy · Ctrl+L clear · Ctrl+K hard limit · Ctrl+T theme · Esc quit",
            Style::default().fg(palette.muted),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppOptions;
    use crate::theme::Theme;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 20)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_render_shows_counts_and_limit() {
        let mut app = App::new(
            AppOptions {
                limit_input: "10".to_string(),
                hard_limit: true,
                ..AppOptions::default()
            },
            None,
        );
        app.insert_str("Hello world, don't!");

        let screen = draw(&app);
        assert!(screen.contains("Hello worl"));
        assert!(screen.contains("Chars: 10"));
        assert!(screen.contains("Words: 2"));
        assert!(screen.contains("Lines: 1"));
        assert!(screen.contains("Bytes: 10"));
        assert!(screen.contains("10 / 10"));
        assert!(screen.contains("0 left"));
        assert!(screen.contains("[x] Hard limit"));
    }

    #[test]
    fn test_render_unlimited_dark() {
        let app = App::new(
            AppOptions {
                theme: Theme::Dark,
                ..AppOptions::default()
            },
            None,
        );
        let screen = draw(&app);
        assert!(screen.contains("0 chars"));
        assert!(screen.contains("No limit"));
        assert!(screen.contains("Light Mode"));
    }
}
