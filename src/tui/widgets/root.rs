//! Root layout widget - orchestrates main layout structure

use crate::app::state::{AppState, Screen};
use crate::config::Config;
use crate::tui::theme::get_theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders},
    Frame,
};

use super::{cards, form, help, sidebar, status_bar};

/// Main layout structure:
/// ┌──────────┬─────────────────────────────────────────┐
/// │  Menu    │           Main Content                  │
/// │          │      (Palettes/Create/Help)             │
/// │ Palettes │                                         │
/// │  Create  │                                         │
/// │   Help   │                                         │
/// ├──────────┴─────────────────────────────────────────┤
/// │ status / toast                                     │
/// └────────────────────────────────────────────────────┘
pub fn render(frame: &mut Frame, cfg: &Config, state: &mut AppState) {
    let root = frame.area();

    // Main vertical layout: top area | bottom bar
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Top area (sidebar + content)
            Constraint::Length(3), // Bottom bar (status + toast)
        ])
        .split(root);

    // Top area: sidebar | main content
    let top_cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(18), // Sidebar menu
            Constraint::Min(40),    // Main content area
        ])
        .split(rows[0]);

    sidebar::render(frame, state, top_cols[0]);
    render_main_content(frame, cfg, state, top_cols[1]);
    status_bar::render(frame, state, rows[1]);
}

/// Render the main content area based on current screen
fn render_main_content(frame: &mut Frame, _cfg: &Config, state: &mut AppState, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;

    let title = match state.screen {
        Screen::Palettes => format!(" {} Palettes ", icons.palette),
        Screen::Create => format!(" {} New Palette ", icons.create),
        Screen::Help => format!(" {} Keybinds ", icons.help),
    };

    let main = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.border))
        .title(title)
        .title_style(Style::default().fg(theme.palette.accent));
    let inner = main.inner(area);
    frame.render_widget(main, area);

    match state.screen {
        Screen::Palettes => cards::render(frame, state, inner),
        Screen::Create => form::render(frame, state, inner),
        Screen::Help => help::render(frame, state, inner),
    }
}
