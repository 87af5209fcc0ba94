use eframe::egui::{self, Color32, Stroke, Visuals};
use serde::{Deserialize, Serialize};

/// Available theme presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreset {
    /// Deep blue with emerald accents
    #[default]
    Harbor,
    /// Neutral slate
    Slate,
    /// Muted greens
    Moss,
}

impl ThemePreset {
    pub fn all() -> &'static [ThemePreset] {
        &[ThemePreset::Harbor, ThemePreset::Slate, ThemePreset::Moss]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ThemePreset::Harbor => "Harbor",
            ThemePreset::Slate => "Slate",
            ThemePreset::Moss => "Moss",
        }
    }

    pub fn theme(&self) -> Theme {
        match self {
            ThemePreset::Harbor => Theme::harbor(),
            ThemePreset::Slate => Theme::slate(),
            ThemePreset::Moss => Theme::moss(),
        }
    }
}

impl std::str::FromStr for ThemePreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemePreset::all()
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown theme '{}' (expected harbor, slate or moss)", s))
    }
}

/// Theme color definitions
#[derive(Debug, Clone)]
pub struct Theme {
    pub bg_darkest: Color32,
    pub bg_dark: Color32,
    pub bg_medium: Color32,
    pub bg_light: Color32,

    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,

    /// Encode-side accent
    pub accent: Color32,
    pub accent_hover: Color32,
    pub accent_muted: Color32,
    /// Decode-side accent
    pub accent_alt: Color32,

    pub success: Color32,
    pub error: Color32,

    pub border: Color32,
}

impl Theme {
    /// Harbor: navy panels, cyan and emerald accents
    pub fn harbor() -> Self {
        Self {
            bg_darkest: Color32::from_rgb(8, 18, 36),
            bg_dark: Color32::from_rgb(14, 28, 54),
            bg_medium: Color32::from_rgb(22, 42, 76),
            bg_light: Color32::from_rgb(34, 60, 100),

            text_primary: Color32::from_rgb(240, 249, 255),
            text_secondary: Color32::from_rgb(191, 219, 254), // Blue-200
            text_muted: Color32::from_rgb(125, 150, 185),

            accent: Color32::from_rgb(34, 211, 238),        // Cyan-400
            accent_hover: Color32::from_rgb(103, 232, 249), // Cyan-300
            accent_muted: Color32::from_rgb(8, 145, 178),   // Cyan-600
            accent_alt: Color32::from_rgb(52, 211, 153),    // Emerald-400

            success: Color32::from_rgb(74, 222, 128),
            error: Color32::from_rgb(248, 113, 113),

            border: Color32::from_rgb(45, 80, 125),
        }
    }

    /// Slate: low-contrast grays for long sessions
    pub fn slate() -> Self {
        Self {
            bg_darkest: Color32::from_rgb(15, 23, 42),  // Slate-900
            bg_dark: Color32::from_rgb(30, 41, 59),     // Slate-800
            bg_medium: Color32::from_rgb(51, 65, 85),   // Slate-700
            bg_light: Color32::from_rgb(71, 85, 105),   // Slate-600

            text_primary: Color32::from_rgb(248, 250, 252),
            text_secondary: Color32::from_rgb(203, 213, 225),
            text_muted: Color32::from_rgb(148, 163, 184),

            accent: Color32::from_rgb(148, 163, 184),
            accent_hover: Color32::from_rgb(203, 213, 225),
            accent_muted: Color32::from_rgb(100, 116, 139),
            accent_alt: Color32::from_rgb(125, 211, 252),

            success: Color32::from_rgb(134, 239, 172),
            error: Color32::from_rgb(252, 165, 165),

            border: Color32::from_rgb(71, 85, 105),
        }
    }

    /// Moss: dark greens
    pub fn moss() -> Self {
        Self {
            bg_darkest: Color32::from_rgb(10, 20, 16),
            bg_dark: Color32::from_rgb(17, 31, 25),
            bg_medium: Color32::from_rgb(26, 46, 37),
            bg_light: Color32::from_rgb(40, 66, 54),

            text_primary: Color32::from_rgb(236, 253, 245),
            text_secondary: Color32::from_rgb(187, 222, 205),
            text_muted: Color32::from_rgb(120, 155, 138),

            accent: Color32::from_rgb(16, 185, 129),
            accent_hover: Color32::from_rgb(52, 211, 153),
            accent_muted: Color32::from_rgb(4, 120, 87),
            accent_alt: Color32::from_rgb(45, 212, 191),

            success: Color32::from_rgb(134, 239, 172),
            error: Color32::from_rgb(253, 164, 175),

            border: Color32::from_rgb(52, 84, 68),
        }
    }

    /// Apply this theme to egui's visuals
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = Visuals::dark();

        visuals.window_fill = self.bg_dark;
        visuals.panel_fill = self.bg_dark;
        visuals.faint_bg_color = self.bg_medium;
        visuals.extreme_bg_color = self.bg_darkest;

        let widgets = &mut visuals.widgets;
        widgets.noninteractive.bg_fill = self.bg_medium;
        widgets.noninteractive.bg_stroke = Stroke::new(1.0, self.border);
        widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_secondary);

        for state in [&mut widgets.inactive, &mut widgets.open] {
            state.bg_fill = self.bg_medium;
            state.weak_bg_fill = self.bg_light;
            state.fg_stroke = Stroke::new(1.0, self.text_primary);
        }
        widgets.inactive.bg_stroke = Stroke::new(1.0, self.border);
        widgets.open.bg_stroke = Stroke::new(1.0, self.accent);

        widgets.hovered.bg_fill = self.bg_light;
        widgets.hovered.weak_bg_fill = self.bg_light;
        widgets.hovered.bg_stroke = Stroke::new(1.0, self.accent_hover);
        widgets.hovered.fg_stroke = Stroke::new(1.0, self.text_primary);

        widgets.active.bg_fill = self.accent_muted;
        widgets.active.weak_bg_fill = self.accent_muted;
        widgets.active.bg_stroke = Stroke::new(1.0, self.accent_hover);
        widgets.active.fg_stroke = Stroke::new(1.0, self.text_primary);

        visuals.selection.bg_fill = self.accent.gamma_multiply(0.3);
        visuals.selection.stroke = Stroke::new(1.0, self.accent);
        visuals.hyperlink_color = self.accent;

        visuals.window_stroke = Stroke::new(1.0, self.border);
        visuals.window_shadow = egui::epaint::Shadow::NONE;
        visuals.popup_shadow = egui::epaint::Shadow::NONE;

        ctx.set_visuals(visuals);
    }
}
