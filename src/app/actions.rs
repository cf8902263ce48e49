use super::state::Screen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextScreen,
    PrevScreen,
    SetScreen(Screen),

    SidebarUp,
    SidebarDown,
    ListUp,
    ListDown,
    GoTop,
    GoBottom,
    PageUp,
    PageDown,

    // Card actions
    DeleteSelected,
    /// Copy the hex text of swatch 0..=2 on the selected card.
    CopySwatch(usize),
    Refresh,

    // Create form
    FormNextField,
    FormPrevField,
    InputChar(char),
    Backspace,
    ClearInput,
    TemperatureNext,
    TemperaturePrev,
    Submit,

    Resize,
}
