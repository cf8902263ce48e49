//! Create form - title, three colors, temperature radio

use crate::app::state::{AppState, FormFocus};
use crate::palette::{parse_rgb, Temperature};
use crate::tui::theme::{get_theme, Theme};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();
    let form = &state.form;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Color 1
            Constraint::Length(3), // Color 2
            Constraint::Length(3), // Color 3
            Constraint::Length(3), // Temperature
            Constraint::Length(1), // Hint
            Constraint::Min(0),
        ])
        .split(area);

    render_text_box(
        frame,
        &theme,
        " Title ",
        &form.title,
        form.focus == FormFocus::Title,
        rows[0],
    );

    for (i, focus) in [FormFocus::Color1, FormFocus::Color2, FormFocus::Color3]
        .into_iter()
        .enumerate()
    {
        render_color_box(
            frame,
            &theme,
            i,
            &form.colors[i],
            form.focus == focus,
            rows[i + 1],
        );
    }

    render_temperature(frame, &theme, form.temperature, form.focus, rows[4]);

    let hint = Paragraph::new(Line::from(vec![
        Span::styled(" Enter", Style::default().fg(theme.palette.accent_alt)),
        Span::styled(" save  ", Style::default().fg(theme.palette.fg_secondary)),
        Span::styled("Tab", Style::default().fg(theme.palette.accent_alt)),
        Span::styled(" next field  ", Style::default().fg(theme.palette.fg_secondary)),
        Span::styled("Esc", Style::default().fg(theme.palette.accent_alt)),
        Span::styled(" back", Style::default().fg(theme.palette.fg_secondary)),
    ]));
    frame.render_widget(hint, rows[5]);
}

fn input_block(theme: &Theme, title: &str, focused: bool) -> Block<'static> {
    let border_color = if focused {
        theme.palette.accent
    } else {
        theme.palette.border
    };
    Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(border_color))
        .title(title.to_string())
        .title_style(Style::default().fg(theme.palette.accent))
}

fn render_text_box(
    frame: &mut Frame,
    theme: &Theme,
    title: &str,
    value: &str,
    focused: bool,
    area: Rect,
) {
    let cursor = if focused { "▏" } else { "" };
    let p = Paragraph::new(Line::from(format!("{value}{cursor}")))
        .style(Style::default().fg(theme.palette.fg_primary))
        .block(input_block(theme, title, focused));
    frame.render_widget(p, area);
}

/// A color field: typed text plus a live swatch once it parses. Text in
/// a field that does not parse yet is dimmed to error tint.
fn render_color_box(
    frame: &mut Frame,
    theme: &Theme,
    idx: usize,
    value: &str,
    focused: bool,
    area: Rect,
) {
    let cursor = if focused { "▏" } else { "" };

    let mut spans = Vec::new();
    match parse_rgb(value.trim()) {
        Some((r, g, b)) => {
            spans.push(Span::styled(
                format!("{value}{cursor}"),
                Style::default().fg(theme.palette.fg_primary),
            ));
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                "      ",
                Style::default().bg(Color::Rgb(r, g, b)),
            ));
        }
        None => {
            let text_color = if value.trim().is_empty() {
                theme.palette.fg_primary
            } else {
                theme.palette.error
            };
            spans.push(Span::styled(
                format!("{value}{cursor}"),
                Style::default().fg(text_color),
            ));
        }
    }

    let title = format!(" Color {} (#rrggbb) ", idx + 1);
    let p = Paragraph::new(Line::from(spans)).block(input_block(theme, &title, focused));
    frame.render_widget(p, area);
}

fn render_temperature(
    frame: &mut Frame,
    theme: &Theme,
    selected: Temperature,
    focus: FormFocus,
    area: Rect,
) {
    let focused = focus == FormFocus::Temperature;

    let mut spans: Vec<Span> = Vec::new();
    for temperature in Temperature::ALL {
        let is_on = temperature == selected;
        let radio = if is_on { "(\u{2022}) " } else { "( ) " };
        let style = if is_on {
            Style::default()
                .fg(theme.palette.temperature(temperature))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.palette.fg_secondary)
        };
        spans.push(Span::styled(
            format!("{radio}{}   ", temperature.label()),
            style,
        ));
    }

    let p = Paragraph::new(Line::from(spans))
        .block(input_block(theme, " Temperature ", focused));
    frame.render_widget(p, area);
}
