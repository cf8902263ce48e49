//! Bottom bar - status text on the left, transient toast on the right

use crate::app::state::{AppState, ToastKind};
use crate::tui::theme::get_theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Percentage(50)])
        .split(inner);

    let status = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(
            state.status.as_str(),
            Style::default().fg(theme.palette.fg_secondary),
        ),
    ]));
    frame.render_widget(status, cols[0]);

    if let Some(toast) = &state.toast {
        let (icon, color) = match toast.kind {
            ToastKind::Success => (icons.success, theme.palette.success),
            ToastKind::Error => (icons.error, theme.palette.error),
        };
        let toast_line = Line::from(vec![
            Span::styled(icon, Style::default().fg(color)),
            Span::raw(" "),
            Span::styled(
                toast.message.as_str(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
        ]);
        let p = Paragraph::new(toast_line).alignment(Alignment::Right);
        frame.render_widget(p, cols[1]);
    }
}
