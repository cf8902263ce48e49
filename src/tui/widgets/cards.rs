//! Palette cards - a bordered card per palette with swatches and banner

use crate::app::state::AppState;
use crate::palette::{parse_rgb, Palette};
use crate::tui::theme::get_theme;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows per card: two border rows, swatch row, banner row.
pub const CARD_HEIGHT: u16 = 4;

pub fn render(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();
    let list = &state.palettes;

    if list.palettes.is_empty() {
        let empty = Paragraph::new(Line::from("No palettes yet. Press n to create one."))
            .style(Style::default().fg(theme.palette.fg_secondary));
        frame.render_widget(empty, area);
        return;
    }

    // Card-wise virtual scroll: only render the cards that fit.
    let visible_cards = (area.height / CARD_HEIGHT).max(1) as usize;
    let scroll_offset = list.scroll_offset.min(list.palettes.len().saturating_sub(1));

    for (slot, (i, palette)) in list
        .palettes
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(visible_cards)
        .enumerate()
    {
        let card_area = Rect::new(
            area.x,
            area.y + slot as u16 * CARD_HEIGHT,
            area.width,
            CARD_HEIGHT,
        )
        .intersection(area);
        if card_area.height < CARD_HEIGHT {
            break;
        }
        render_card(frame, &theme, palette, i == list.selected, card_area);
    }

    // Scroll position indicator in the top-right corner
    if list.palettes.len() > visible_cards {
        let pos_text = format!("{}/{}", list.selected + 1, list.palettes.len());
        let pos_len = pos_text.len() as u16;
        let pos_x = area.x + area.width.saturating_sub(pos_len);
        if pos_x > area.x {
            frame.render_widget(
                Paragraph::new(pos_text).style(Style::default().fg(theme.palette.fg_secondary)),
                Rect::new(pos_x, area.y, pos_len, 1),
            );
        }
    }
}

fn render_card(
    frame: &mut Frame,
    theme: &crate::tui::theme::Theme,
    palette: &Palette,
    is_selected: bool,
    area: Rect,
) {
    let border_color = if is_selected {
        theme.palette.accent
    } else {
        theme.palette.border
    };
    let title_style = if is_selected {
        Style::default()
            .fg(theme.palette.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.palette.fg_primary)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(border_color))
        .title(format!(" {} ", palette.title))
        .title_style(title_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Swatch row: each color as a block of its own color, hex text on top.
    let mut swatch_spans: Vec<Span> = vec![Span::raw(" ")];
    for color in &palette.colors {
        swatch_spans.push(swatch_span(color, theme));
        swatch_spans.push(Span::raw("  "));
    }

    // Banner row: the temperature tag, tinted by its value.
    let icons = &theme.icons;
    let mut banner_spans = vec![
        Span::raw(" "),
        Span::styled(
            format!(" {} ", palette.temperature.label()),
            Style::default()
                .fg(theme.palette.bg_primary)
                .bg(theme.palette.temperature(palette.temperature))
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if is_selected {
        banner_spans.push(Span::styled(
            format!("  {} 1/2/3 copy  {} d delete", icons.copy, icons.delete),
            Style::default().fg(theme.palette.fg_secondary),
        ));
    }

    let content = Paragraph::new(vec![Line::from(swatch_spans), Line::from(banner_spans)]);
    frame.render_widget(content, inner);
}

/// One swatch: the hex text on a background of that exact color. An
/// unparseable color (malformed store write) falls back to plain text.
fn swatch_span<'a>(color: &'a str, theme: &crate::tui::theme::Theme) -> Span<'a> {
    match parse_rgb(color) {
        Some((r, g, b)) => Span::styled(
            format!(" {color} "),
            Style::default()
                .bg(Color::Rgb(r, g, b))
                .fg(contrast_fg(r, g, b)),
        ),
        None => Span::styled(
            format!(" {color} "),
            Style::default().fg(theme.palette.fg_secondary),
        ),
    }
}

/// Black or white, whichever reads better on the swatch color.
fn contrast_fg(r: u8, g: u8, b: u8) -> Color {
    // BT.601 luma approximation
    let luma = 0.299 * f32::from(r) + 0.587 * f32::from(g) + 0.114 * f32::from(b);
    if luma > 150.0 {
        Color::Black
    } else {
        Color::White
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contrast_fg() {
        assert_eq!(contrast_fg(0, 0, 0), Color::White);
        assert_eq!(contrast_fg(255, 255, 255), Color::Black);
        // Winter Reds dark red gets white text
        assert_eq!(contrast_fg(0xa1, 0x01, 0x15), Color::White);
    }
}
