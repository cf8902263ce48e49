//! Nerd Font icons for TUI display
//! Requires a Nerd Font to be installed (https://www.nerdfonts.com)

/// Icon set using Nerd Font glyphs
#[derive(Debug, Clone)]
pub struct Icons {
    // Navigation
    pub palette: &'static str,
    pub create: &'static str,
    pub help: &'static str,

    // Status
    pub success: &'static str,
    pub error: &'static str,

    // Card controls
    pub copy: &'static str,
    pub delete: &'static str,

    // Selection
    pub selected: &'static str,
    pub unselected: &'static str,
}

impl Icons {
    /// Nerd Font icon set
    pub const fn nerd() -> Self {
        Self {
            palette: "\u{f03e}",  // nf-fa-picture_o
            create: "\u{f067}",   // nf-fa-plus
            help: "\u{f059}",     // nf-fa-question_circle

            success: "\u{f00c}",  // nf-fa-check
            error: "\u{f00d}",    // nf-fa-times

            copy: "\u{f0c5}",     // nf-fa-files_o
            delete: "\u{f1f8}",   // nf-fa-trash

            selected: "\u{f054}", // nf-fa-chevron_right
            unselected: " ",
        }
    }
}

impl Default for Icons {
    fn default() -> Self {
        Self::nerd()
    }
}
