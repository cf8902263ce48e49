use crate::palette::{is_valid_hex, Palette, Temperature};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Palettes,
    Create,
    Help,
}

impl Screen {
    pub fn next(self) -> Self {
        match self {
            Screen::Palettes => Screen::Create,
            Screen::Create => Screen::Help,
            Screen::Help => Screen::Palettes,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Screen::Palettes => Screen::Help,
            Screen::Create => Screen::Palettes,
            Screen::Help => Screen::Create,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub created_at: std::time::Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Success,
            created_at: std::time::Instant::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Error,
            created_at: std::time::Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > std::time::Duration::from_secs(3)
    }
}

/// Which create-form field currently receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    #[default]
    Title,
    Color1,
    Color2,
    Color3,
    Temperature,
}

impl FormFocus {
    pub fn next(self) -> Self {
        match self {
            FormFocus::Title => FormFocus::Color1,
            FormFocus::Color1 => FormFocus::Color2,
            FormFocus::Color2 => FormFocus::Color3,
            FormFocus::Color3 => FormFocus::Temperature,
            FormFocus::Temperature => FormFocus::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormFocus::Title => FormFocus::Temperature,
            FormFocus::Color1 => FormFocus::Title,
            FormFocus::Color2 => FormFocus::Color1,
            FormFocus::Color3 => FormFocus::Color2,
            FormFocus::Temperature => FormFocus::Color3,
        }
    }
}

/// Buffers behind the create form. The temperature selector always holds
/// a valid value, so only the text fields need checking on submit.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub title: String,
    pub colors: [String; 3],
    pub temperature: Temperature,
    pub focus: FormFocus,
}

impl FormState {
    /// The text buffer behind the focused field, if it is a text field.
    pub fn focused_buffer_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            FormFocus::Title => Some(&mut self.title),
            FormFocus::Color1 => Some(&mut self.colors[0]),
            FormFocus::Color2 => Some(&mut self.colors[1]),
            FormFocus::Color3 => Some(&mut self.colors[2]),
            FormFocus::Temperature => None,
        }
    }

    /// Validate the buffers and construct a palette with a fresh id.
    /// Rejection leaves the form untouched.
    pub fn build_palette(&self) -> Result<Palette, String> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err("Title is required".into());
        }

        let mut colors: [String; 3] = Default::default();
        for (i, buffer) in self.colors.iter().enumerate() {
            let color = buffer.trim();
            if !is_valid_hex(color) {
                return Err(format!("Color {} must look like #1a2b3c", i + 1));
            }
            colors[i] = color.to_string();
        }

        Ok(Palette::new(title, colors, self.temperature))
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Card list state: the palettes plus selection and card-wise scrolling.
#[derive(Debug, Clone, Default)]
pub struct PaletteListState {
    pub palettes: Vec<Palette>,
    pub selected: usize,
    pub scroll_offset: usize,
}

impl PaletteListState {
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if !self.palettes.is_empty() {
            self.selected = (self.selected + 1).min(self.palettes.len() - 1);
        }
    }

    pub fn selected_palette(&self) -> Option<&Palette> {
        self.palettes.get(self.selected)
    }

    pub fn set_palettes(&mut self, palettes: Vec<Palette>) {
        self.palettes = palettes;
        self.selected = self.selected.min(self.palettes.len().saturating_sub(1));
        self.scroll_offset = self.scroll_offset.min(self.selected);
    }

    pub fn push(&mut self, palette: Palette) {
        self.palettes.push(palette);
    }

    /// Drop the selected card, keeping selection in bounds.
    pub fn remove_selected(&mut self) -> Option<Palette> {
        if self.selected >= self.palettes.len() {
            return None;
        }
        let palette = self.palettes.remove(self.selected);
        if self.selected >= self.palettes.len() {
            self.selected = self.palettes.len().saturating_sub(1);
        }
        self.scroll_offset = self.scroll_offset.min(self.selected);
        Some(palette)
    }

    /// Keep the selected card inside the window of `visible_cards`.
    pub fn update_scroll(&mut self, visible_cards: usize) {
        if visible_cards == 0 {
            return;
        }
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        } else if self.selected >= self.scroll_offset + visible_cards {
            self.scroll_offset = self.selected - visible_cards + 1;
        }
    }
}

pub struct AppState {
    pub should_quit: bool,

    pub screen: Screen,
    pub sidebar_selected: usize,

    pub palettes: PaletteListState,
    pub form: FormState,

    // Toast notification
    pub toast: Option<Toast>,

    // Status message (for debugging/info)
    pub status: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            screen: Screen::Palettes,
            sidebar_selected: 0,
            palettes: PaletteListState::default(),
            form: FormState::default(),
            toast: None,
            status: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> FormState {
        FormState {
            title: "Test".into(),
            colors: ["#111111".into(), "#222222".into(), "#333333".into()],
            temperature: Temperature::Cool,
            focus: FormFocus::Title,
        }
    }

    #[test]
    fn test_build_palette_from_valid_form() {
        let palette = filled_form().build_palette().unwrap();
        assert_eq!(palette.title, "Test");
        assert_eq!(
            palette.colors,
            ["#111111".to_string(), "#222222".into(), "#333333".into()]
        );
        assert_eq!(palette.temperature, Temperature::Cool);
        assert!(!palette.id.is_empty());
    }

    #[test]
    fn test_build_palette_requires_title() {
        let mut form = filled_form();
        form.title = "   ".into();
        assert!(form.build_palette().is_err());
    }

    #[test]
    fn test_build_palette_rejects_bad_hex() {
        let mut form = filled_form();
        form.colors[1] = "22222".into();
        let err = form.build_palette().unwrap_err();
        assert!(err.contains("Color 2"), "unexpected message: {err}");
    }

    #[test]
    fn test_build_palette_trims_buffers() {
        let mut form = filled_form();
        form.title = "  Padded  ".into();
        form.colors[0] = " #111111 ".into();
        let palette = form.build_palette().unwrap();
        assert_eq!(palette.title, "Padded");
        assert_eq!(palette.colors[0], "#111111");
    }

    #[test]
    fn test_form_focus_cycles() {
        let mut focus = FormFocus::Title;
        for _ in 0..5 {
            focus = focus.next();
        }
        assert_eq!(focus, FormFocus::Title);
        assert_eq!(FormFocus::Title.prev(), FormFocus::Temperature);
    }

    #[test]
    fn test_remove_selected_keeps_selection_in_bounds() {
        let mut list = PaletteListState::default();
        list.set_palettes(crate::palette::seed_palettes());
        list.selected = 2;

        let removed = list.remove_selected().unwrap();
        assert_eq!(removed.title, "Winter Reds");
        assert_eq!(list.selected, 1);

        list.remove_selected();
        list.remove_selected();
        assert!(list.remove_selected().is_none());
        assert_eq!(list.selected, 0);
    }
}
