//! Help screen showing keybindings

use crate::app::state::AppState;
use crate::tui::theme::get_theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Render the help screen
pub fn render(frame: &mut Frame, _state: &AppState, area: Rect) {
    let theme = get_theme();

    // Split into columns
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    // Left column - Navigation & Cards
    let left_content = vec![
        section_header("Navigation", &theme),
        keybind("j / Down", "Next card", &theme),
        keybind("k / Up", "Previous card", &theme),
        keybind("g", "Go to top", &theme),
        keybind("G", "Go to bottom", &theme),
        keybind("Ctrl+d", "Page down", &theme),
        keybind("Ctrl+u", "Page up", &theme),
        keybind("h / Left", "Previous screen", &theme),
        keybind("l / Right", "Next screen", &theme),
        keybind("Tab", "Next screen", &theme),
        Line::default(),
        section_header("Cards", &theme),
        keybind("n / a / Enter", "New palette", &theme),
        keybind("1 / 2 / 3", "Copy swatch hex", &theme),
        keybind("d / Del", "Delete palette", &theme),
        keybind("r / F5", "Reload from disk", &theme),
    ];

    let left_para = Paragraph::new(left_content).wrap(Wrap { trim: false });
    frame.render_widget(left_para, cols[0]);

    // Right column - Create form & General
    let right_content = vec![
        section_header("Create form", &theme),
        keybind("Tab / Down", "Next field", &theme),
        keybind("BackTab / Up", "Previous field", &theme),
        keybind("Left / Right", "Pick temperature", &theme),
        keybind("Enter", "Save palette", &theme),
        keybind("Ctrl+u", "Clear field", &theme),
        keybind("Esc", "Back to cards", &theme),
        Line::default(),
        section_header("General", &theme),
        keybind("q", "Quit", &theme),
        keybind("?", "This screen", &theme),
    ];

    let right_para = Paragraph::new(right_content).wrap(Wrap { trim: false });
    frame.render_widget(right_para, cols[1]);
}

fn section_header(title: &str, theme: &crate::tui::theme::Theme) -> Line<'static> {
    Line::from(vec![Span::styled(
        format!("━━ {} ━━", title),
        Style::default()
            .fg(theme.palette.accent)
            .add_modifier(Modifier::BOLD),
    )])
}

fn keybind(key: &str, desc: &str, theme: &crate::tui::theme::Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled("  ", Style::default()),
        Span::styled(
            format!("{:14}", key),
            Style::default()
                .fg(theme.palette.accent_alt)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            desc.to_string(),
            Style::default().fg(theme.palette.fg_primary),
        ),
    ])
}
