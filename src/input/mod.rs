use crate::app::actions::Action;
use crate::app::events::{Event, InputEvent};
use crate::app::state::{AppState, FormFocus, Screen};
use crossterm::event::{
    self, Event as CtEvent, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind,
};
use tokio::sync::mpsc;

pub fn spawn_input_task(tx: mpsc::Sender<Event>, mouse_enabled: bool) {
    tokio::task::spawn_blocking(move || {
        let _ = mouse_enabled;
        loop {
            if event::poll(std::time::Duration::from_millis(250)).unwrap_or(false) {
                match event::read() {
                    Ok(CtEvent::Key(k)) => {
                        if k.kind == KeyEventKind::Press
                            && tx.blocking_send(Event::Input(InputEvent::Key(k))).is_err()
                        {
                            break;
                        }
                    }
                    Ok(CtEvent::Mouse(m)) => {
                        if tx.blocking_send(Event::Input(InputEvent::Mouse(m))).is_err() {
                            break;
                        }
                    }
                    Ok(CtEvent::Resize(_, _)) => {
                        if tx.blocking_send(Event::Input(InputEvent::Resize)).is_err() {
                            break;
                        }
                    }
                    Ok(_) => {}
                    Err(_) => {}
                }
            }
        }
    });
}

pub fn map_input_to_action(state: &AppState, ev: InputEvent) -> Option<Action> {
    match ev {
        InputEvent::Resize => Some(Action::Resize),
        InputEvent::Mouse(m) => match m.kind {
            MouseEventKind::ScrollUp => Some(Action::ListUp),
            MouseEventKind::ScrollDown => Some(Action::ListDown),
            _ => None,
        },
        InputEvent::Key(k) => match state.screen {
            Screen::Palettes => handle_palettes_screen(k),
            Screen::Create => handle_create_screen(state, k),
            Screen::Help => handle_help_screen(k),
        },
    }
}

fn handle_palettes_screen(k: crossterm::event::KeyEvent) -> Option<Action> {
    match k.code {
        // Quit
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Esc => Some(Action::Quit),

        // Navigation - vim style
        KeyCode::Up | KeyCode::Char('k') => Some(Action::ListUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::ListDown),
        KeyCode::Char('g') => Some(Action::GoTop),
        KeyCode::Char('G') => Some(Action::GoBottom),
        KeyCode::Char('d') if k.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::PageDown),
        KeyCode::Char('u') if k.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::PageUp),

        // Sidebar navigation
        KeyCode::Left | KeyCode::Char('h') => Some(Action::SidebarUp),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::SidebarDown),

        // Screen switching
        KeyCode::Tab => Some(Action::NextScreen),
        KeyCode::BackTab => Some(Action::PrevScreen),

        // Card actions
        KeyCode::Char('n') | KeyCode::Char('a') | KeyCode::Enter => {
            Some(Action::SetScreen(Screen::Create))
        }
        KeyCode::Char('d') | KeyCode::Delete => Some(Action::DeleteSelected),
        KeyCode::Char('1') => Some(Action::CopySwatch(0)),
        KeyCode::Char('2') => Some(Action::CopySwatch(1)),
        KeyCode::Char('3') => Some(Action::CopySwatch(2)),

        KeyCode::Char('r') => Some(Action::Refresh),
        KeyCode::F(5) => Some(Action::Refresh),
        KeyCode::Char('?') | KeyCode::F(1) => Some(Action::SetScreen(Screen::Help)),

        _ => None,
    }
}

fn handle_create_screen(state: &AppState, k: crossterm::event::KeyEvent) -> Option<Action> {
    // Field order and submit work from any field; character keys only
    // reach the focused text buffer.
    match k.code {
        KeyCode::Esc => Some(Action::SetScreen(Screen::Palettes)),
        KeyCode::Tab | KeyCode::Down => Some(Action::FormNextField),
        KeyCode::BackTab | KeyCode::Up => Some(Action::FormPrevField),
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Char('u') if k.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Action::ClearInput)
        }
        KeyCode::Left if state.form.focus == FormFocus::Temperature => {
            Some(Action::TemperaturePrev)
        }
        KeyCode::Right | KeyCode::Char(' ')
            if state.form.focus == FormFocus::Temperature =>
        {
            Some(Action::TemperatureNext)
        }
        KeyCode::Char(c) if state.form.focus != FormFocus::Temperature => {
            Some(Action::InputChar(c))
        }
        _ => None,
    }
}

fn handle_help_screen(k: crossterm::event::KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Esc => Some(Action::SetScreen(Screen::Palettes)),
        KeyCode::Tab => Some(Action::NextScreen),
        KeyCode::BackTab => Some(Action::PrevScreen),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::SidebarUp),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::SidebarDown),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn key(code: KeyCode) -> InputEvent {
        InputEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> InputEvent {
        InputEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    #[test]
    fn test_palettes_screen_keys() {
        let state = AppState::new();
        assert_eq!(
            map_input_to_action(&state, key(KeyCode::Char('j'))),
            Some(Action::ListDown)
        );
        assert_eq!(
            map_input_to_action(&state, key(KeyCode::Char('1'))),
            Some(Action::CopySwatch(0))
        );
        assert_eq!(
            map_input_to_action(&state, key(KeyCode::Char('3'))),
            Some(Action::CopySwatch(2))
        );
        assert_eq!(
            map_input_to_action(&state, key(KeyCode::Delete)),
            Some(Action::DeleteSelected)
        );
        assert_eq!(
            map_input_to_action(&state, key(KeyCode::Char('n'))),
            Some(Action::SetScreen(Screen::Create))
        );
        assert_eq!(
            map_input_to_action(&state, ctrl('d')),
            Some(Action::PageDown)
        );
    }

    #[test]
    fn test_create_screen_typing() {
        let mut state = AppState::new();
        state.screen = Screen::Create;

        assert_eq!(
            map_input_to_action(&state, key(KeyCode::Char('x'))),
            Some(Action::InputChar('x'))
        );
        assert_eq!(
            map_input_to_action(&state, key(KeyCode::Enter)),
            Some(Action::Submit)
        );
        assert_eq!(
            map_input_to_action(&state, key(KeyCode::Esc)),
            Some(Action::SetScreen(Screen::Palettes))
        );

        // 'q' is text here, not quit.
        assert_eq!(
            map_input_to_action(&state, key(KeyCode::Char('q'))),
            Some(Action::InputChar('q'))
        );
    }

    #[test]
    fn test_create_screen_temperature_selector() {
        let mut state = AppState::new();
        state.screen = Screen::Create;
        state.form.focus = FormFocus::Temperature;

        assert_eq!(
            map_input_to_action(&state, key(KeyCode::Right)),
            Some(Action::TemperatureNext)
        );
        assert_eq!(
            map_input_to_action(&state, key(KeyCode::Left)),
            Some(Action::TemperaturePrev)
        );
        // No text buffer under the selector.
        assert_eq!(map_input_to_action(&state, key(KeyCode::Char('x'))), None);
    }
}
