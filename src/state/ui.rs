//! UI-related application state

use crate::state::navigation::Navigation;
use crate::ui::theme::{Theme, ThemePreset};

/// UI-related state
pub struct UiState {
    /// Which page is showing
    pub navigation: Navigation,
    /// Active theme preset
    pub theme_preset: ThemePreset,
    /// Colors of the active preset
    pub current_theme: Theme,
    /// Whether theme needs to be applied
    pub theme_dirty: bool,
    /// Whether to show the About dialog
    pub show_about_dialog: bool,
}

impl UiState {
    /// Create a new UiState with the given theme
    pub fn new(preset: ThemePreset) -> Self {
        Self {
            navigation: Navigation::default(),
            theme_preset: preset,
            current_theme: preset.theme(),
            theme_dirty: true, // Apply theme on first frame
            show_about_dialog: false,
        }
    }

    /// Switch theme; applied on the next frame
    pub fn set_theme(&mut self, preset: ThemePreset) {
        self.theme_preset = preset;
        self.current_theme = preset.theme();
        self.theme_dirty = true;
    }
}
