pub mod actions;
pub mod events;
pub mod state;

use crate::clipboard;
use crate::config::Config;
use crate::input;
use crate::storage::Storage;
use crate::tui::{self, TuiTerminal};
use actions::Action;
use events::Event;
use state::{AppState, Screen, Toast};
use tokio::sync::mpsc;

/// Reducer-side estimate of how many cards fit on screen; the widget
/// computes the real count from the frame size.
const VISIBLE_CARDS: usize = 4;

pub struct App {
    cfg: Config,
    config_path: std::path::PathBuf,
    state: AppState,
    store: Storage,
}

impl App {
    pub fn new(cfg: Config, config_path: std::path::PathBuf) -> anyhow::Result<Self> {
        let store = Storage::open(&cfg.paths.data_dir.join("palettes.sqlite3"))?;

        // First run gets the example palettes; the view starts from
        // whatever the store holds, in insertion order.
        store.seed_if_empty();
        let mut state = AppState::new();
        state.palettes.set_palettes(store.get_all());
        state.status = format!("{} palettes", state.palettes.palettes.len());

        // Restore last screen if available
        if let Some(screen_name) = &cfg.ui.last_screen {
            state.screen = match screen_name.as_str() {
                "create" => Screen::Create,
                "help" => Screen::Help,
                _ => Screen::Palettes,
            };
            state.sidebar_selected = screen_to_sidebar(state.screen);
        }

        Ok(Self {
            cfg,
            config_path,
            state,
            store,
        })
    }

    pub async fn run(&mut self, terminal: &mut TuiTerminal) -> anyhow::Result<()> {
        let (tx, mut rx) = mpsc::channel::<Event>(256);

        input::spawn_input_task(tx.clone(), self.cfg.input.mouse);
        // Performance: don't drive the UI with a constant ticker.
        // We re-render once per handled input event.

        // First draw
        tui::draw(terminal, &self.cfg, &mut self.state)?;

        while let Some(ev) = rx.recv().await {
            match ev {
                Event::Input(input_ev) => {
                    if let Some(action) = input::map_input_to_action(&self.state, input_ev) {
                        self.handle_action(action);
                    }
                }
            }

            if self.state.should_quit {
                break;
            }

            tui::draw(terminal, &self.cfg, &mut self.state)?;
        }

        // Save state before quitting
        self.save_state_on_quit();

        Ok(())
    }

    fn save_state_on_quit(&mut self) {
        let screen_name = match self.state.screen {
            Screen::Palettes => "palettes",
            Screen::Create => "create",
            Screen::Help => "help",
        };
        self.cfg.ui.last_screen = Some(screen_name.to_string());

        // Persist to disk
        let _ = crate::config::save(&self.cfg, Some(&self.config_path));
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Submit => self.submit_form(),
            Action::DeleteSelected => self.delete_selected(),
            Action::CopySwatch(idx) => self.copy_swatch(idx),
            Action::Refresh => {
                self.state.palettes.set_palettes(self.store.get_all());
                self.state.status = format!("{} palettes", self.state.palettes.palettes.len());
            }
            _ => self.reduce(action),
        }
    }

    /// Build a palette from the form, persist it, show its card, reset
    /// the form. Invalid input rejects with a toast and changes nothing.
    fn submit_form(&mut self) {
        match self.state.form.build_palette() {
            Ok(palette) => {
                self.store.add(palette.clone());
                self.state.palettes.push(palette);
                self.state.palettes.selected = self.state.palettes.palettes.len() - 1;
                self.state.palettes.update_scroll(VISIBLE_CARDS);
                self.state.form.clear();
                self.state.toast = Some(Toast::success("Palette saved"));
                self.state.status = format!("{} palettes", self.state.palettes.palettes.len());
                self.set_screen(Screen::Palettes);
            }
            Err(msg) => {
                self.state.toast = Some(Toast::error(msg));
            }
        }
    }

    fn delete_selected(&mut self) {
        let Some(palette) = self.state.palettes.selected_palette() else {
            self.state.status = "Nothing to delete".into();
            return;
        };
        let id = palette.id.clone();
        let title = palette.title.clone();

        // Store first, so a palette can never stay persisted without a
        // card and silently resurrect on the next start.
        self.store.remove(&id);
        self.state.palettes.remove_selected();
        self.state.toast = Some(Toast::success(format!("Deleted \"{title}\"")));
        self.state.status = format!("{} palettes", self.state.palettes.palettes.len());
    }

    fn copy_swatch(&mut self, idx: usize) {
        let Some(color) = self.selected_swatch(idx).map(str::to_string) else {
            return;
        };
        match clipboard::set_text(&color) {
            Ok(()) => self.state.toast = Some(Toast::success(format!("Copied {color}"))),
            Err(e) => self.state.toast = Some(Toast::error(format!("Clipboard: {e:#}"))),
        }
    }

    /// The literal hex text shown on swatch `idx` of the selected card.
    fn selected_swatch(&self, idx: usize) -> Option<&str> {
        self.state
            .palettes
            .selected_palette()
            .and_then(|p| p.colors.get(idx))
            .map(String::as_str)
    }

    fn set_screen(&mut self, screen: Screen) {
        self.state.screen = screen;
        self.state.sidebar_selected = screen_to_sidebar(screen);
    }

    fn reduce(&mut self, action: Action) {
        match action {
            Action::Quit => self.state.should_quit = true,
            Action::NextScreen => self.set_screen(self.state.screen.next()),
            Action::PrevScreen => self.set_screen(self.state.screen.prev()),
            Action::SetScreen(screen) => self.set_screen(screen),
            Action::SidebarUp => {
                self.state.sidebar_selected = self.state.sidebar_selected.saturating_sub(1);
                self.state.screen = sidebar_to_screen(self.state.sidebar_selected);
            }
            Action::SidebarDown => {
                self.state.sidebar_selected = (self.state.sidebar_selected + 1).min(2);
                self.state.screen = sidebar_to_screen(self.state.sidebar_selected);
            }
            Action::ListUp => {
                self.state.palettes.select_prev();
                self.state.palettes.update_scroll(VISIBLE_CARDS);
            }
            Action::ListDown => {
                self.state.palettes.select_next();
                self.state.palettes.update_scroll(VISIBLE_CARDS);
            }
            Action::GoTop => {
                self.state.palettes.selected = 0;
                self.state.palettes.scroll_offset = 0;
            }
            Action::GoBottom => {
                self.state.palettes.selected =
                    self.state.palettes.palettes.len().saturating_sub(1);
                self.state.palettes.update_scroll(VISIBLE_CARDS);
            }
            Action::PageUp => {
                self.state.palettes.selected =
                    self.state.palettes.selected.saturating_sub(VISIBLE_CARDS);
                self.state.palettes.update_scroll(VISIBLE_CARDS);
            }
            Action::PageDown => {
                self.state.palettes.selected = (self.state.palettes.selected + VISIBLE_CARDS)
                    .min(self.state.palettes.palettes.len().saturating_sub(1));
                self.state.palettes.update_scroll(VISIBLE_CARDS);
            }
            Action::FormNextField => self.state.form.focus = self.state.form.focus.next(),
            Action::FormPrevField => self.state.form.focus = self.state.form.focus.prev(),
            Action::InputChar(c) => {
                if let Some(buffer) = self.state.form.focused_buffer_mut() {
                    buffer.push(c);
                }
            }
            Action::Backspace => {
                if let Some(buffer) = self.state.form.focused_buffer_mut() {
                    buffer.pop();
                }
            }
            Action::ClearInput => {
                if let Some(buffer) = self.state.form.focused_buffer_mut() {
                    buffer.clear();
                }
            }
            Action::TemperatureNext => {
                self.state.form.temperature = self.state.form.temperature.next();
            }
            Action::TemperaturePrev => {
                self.state.form.temperature = self.state.form.temperature.prev();
            }
            Action::Resize => {
                // Resize is handled by terminal
            }
            Action::Submit
            | Action::DeleteSelected
            | Action::CopySwatch(_)
            | Action::Refresh => {} // handled in handle_action
        }
    }
}

fn sidebar_to_screen(idx: usize) -> Screen {
    match idx {
        0 => Screen::Palettes,
        1 => Screen::Create,
        _ => Screen::Help,
    }
}

fn screen_to_sidebar(screen: Screen) -> usize {
    match screen {
        Screen::Palettes => 0,
        Screen::Create => 1,
        Screen::Help => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::state::ToastKind;
    use super::*;
    use crate::palette::Temperature;

    fn test_app() -> App {
        let store = Storage::open_in_memory().unwrap();
        store.seed_if_empty();
        let mut state = AppState::new();
        state.palettes.set_palettes(store.get_all());
        App {
            cfg: Config::default(),
            config_path: std::path::PathBuf::new(),
            state,
            store,
        }
    }

    fn fill_form(app: &mut App) {
        app.state.form.title = "Test".into();
        app.state.form.colors = ["#111111".into(), "#222222".into(), "#333333".into()];
        app.state.form.temperature = Temperature::Cool;
    }

    #[test]
    fn test_startup_renders_seeds_in_storage_order() {
        let app = test_app();
        let titles: Vec<&str> = app
            .state
            .palettes
            .palettes
            .iter()
            .map(|p| p.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Marcy", "Sleek and Modern", "Winter Reds"]);
    }

    #[test]
    fn test_submit_persists_and_renders_card() {
        let mut app = test_app();
        fill_form(&mut app);

        app.handle_action(Action::Submit);

        let stored = app.store.get_all();
        assert_eq!(stored.len(), 4);
        assert_eq!(stored[3].title, "Test");
        assert_eq!(stored[3].temperature, Temperature::Cool);

        // The card list and the store agree, and the form was reset.
        assert_eq!(app.state.palettes.palettes.len(), 4);
        assert_eq!(app.state.palettes.palettes[3].id, stored[3].id);
        assert!(app.state.form.title.is_empty());
        assert_eq!(app.state.screen, Screen::Palettes);
    }

    #[test]
    fn test_submit_rejects_invalid_color() {
        let mut app = test_app();
        fill_form(&mut app);
        app.state.form.colors[2] = "333".into();

        app.handle_action(Action::Submit);

        assert_eq!(app.store.get_all().len(), 3);
        assert_eq!(app.state.palettes.palettes.len(), 3);
        // Form keeps the user's buffers for correction.
        assert_eq!(app.state.form.title, "Test");
        assert_eq!(
            app.state.toast.as_ref().map(|t| t.kind),
            Some(ToastKind::Error)
        );
    }

    #[test]
    fn test_delete_removes_from_store_and_view() {
        let mut app = test_app();
        app.state.palettes.selected = 1;
        let doomed = app.state.palettes.palettes[1].id.clone();

        app.handle_action(Action::DeleteSelected);

        assert!(app.store.get_all().iter().all(|p| p.id != doomed));
        assert!(app.state.palettes.palettes.iter().all(|p| p.id != doomed));
        assert_eq!(app.state.palettes.palettes.len(), 2);
    }

    #[test]
    fn test_delete_on_empty_list_is_noop() {
        let mut app = test_app();
        app.store.replace_all(&[]);
        app.state.palettes.set_palettes(Vec::new());

        app.handle_action(Action::DeleteSelected);

        assert!(app.store.get_all().is_empty());
    }

    #[test]
    fn test_copy_targets_literal_hex() {
        let mut app = test_app();
        app.state.palettes.selected = 2; // Winter Reds

        assert_eq!(app.selected_swatch(0), Some("#A10115"));
        assert_eq!(app.selected_swatch(2), Some("#600A0A"));
        assert_eq!(app.selected_swatch(3), None);
    }

    #[test]
    fn test_form_typing_goes_to_focused_field() {
        let mut app = test_app();
        app.state.screen = Screen::Create;

        app.handle_action(Action::InputChar('a'));
        app.handle_action(Action::FormNextField);
        app.handle_action(Action::InputChar('#'));
        assert_eq!(app.state.form.title, "a");
        assert_eq!(app.state.form.colors[0], "#");

        app.handle_action(Action::Backspace);
        assert!(app.state.form.colors[0].is_empty());
    }

    #[test]
    fn test_temperature_selector_cycles() {
        let mut app = test_app();
        assert_eq!(app.state.form.temperature, Temperature::Neutral);
        app.handle_action(Action::TemperatureNext);
        assert_eq!(app.state.form.temperature, Temperature::Cool);
        app.handle_action(Action::TemperaturePrev);
        assert_eq!(app.state.form.temperature, Temperature::Neutral);
    }

    #[test]
    fn test_refresh_rereads_store() {
        let mut app = test_app();
        app.store.add(crate::palette::Palette::new(
            "Out of band",
            ["#aaaaaa".into(), "#bbbbbb".into(), "#cccccc".into()],
            Temperature::Warm,
        ));

        app.handle_action(Action::Refresh);

        assert_eq!(app.state.palettes.palettes.len(), 4);
    }

    #[test]
    fn test_screen_navigation() {
        let mut app = test_app();
        app.handle_action(Action::NextScreen);
        assert_eq!(app.state.screen, Screen::Create);
        assert_eq!(app.state.sidebar_selected, 1);
        app.handle_action(Action::SidebarDown);
        assert_eq!(app.state.screen, Screen::Help);
        app.handle_action(Action::SidebarDown);
        assert_eq!(app.state.screen, Screen::Help);
    }
}
