//! Theme definitions for folio
//!
//! Two palettes, dark and light, each filling every style slot. The active
//! `Theme` is derived from `ThemeMode` and passed down to the panels; panels
//! never branch on the mode themselves.
//!
//! The process-wide dark-mode flag lives here too. It is written exactly
//! once per theme toggle (and once at startup) and read by rendering code
//! that sits outside the `App` tree, such as the flash backdrop.

use ratatui::style::{Color, Modifier, Style};
use std::sync::atomic::{AtomicBool, Ordering};

/// Which of the two palettes is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    /// Label for the toggle control: names the mode it switches *to*
    pub fn toggle_label(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "☀ Light",
            ThemeMode::Light => "☾ Dark",
        }
    }
}

// Single writer: sync_dark_mode, called from the theme toggle and startup.
// All access happens on the event thread, so Relaxed is enough.
static DARK_MODE: AtomicBool = AtomicBool::new(true);

/// Synchronize the process-wide dark-mode flag with the given mode
pub fn sync_dark_mode(mode: ThemeMode) {
    DARK_MODE.store(mode == ThemeMode::Dark, Ordering::Relaxed);
}

/// Read the process-wide dark-mode flag
pub fn dark_mode_active() -> bool {
    DARK_MODE.load(Ordering::Relaxed)
}

/// Complete theme with all required colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub fg_dim: Color,
    pub fg_subtle: Color,

    // Panel colors
    pub panel_bg: Color,
    pub panel_border: Color,
    pub border_focused: Color,

    // Accent (the emerald point color)
    pub accent: Color,
    pub accent_dim: Color,
    pub on_accent: Color,

    // Selection / hover
    pub selection_bg: Color,
    pub selection_fg: Color,

    // Separator between sidebar sections
    pub separator: Color,

    // Status colors
    pub success: Color,
    pub error: Color,
}

impl Theme {
    /// Derive the full style set from a theme mode
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Dark palette (default): zinc grays with an emerald accent
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(24, 24, 27),            // zinc-900
            fg: Color::Rgb(244, 244, 245),         // zinc-100
            fg_dim: Color::Rgb(161, 161, 170),     // zinc-400
            fg_subtle: Color::Rgb(212, 212, 216),  // zinc-300

            panel_bg: Color::Rgb(39, 39, 42),      // zinc-800
            panel_border: Color::Rgb(63, 63, 70),  // zinc-700
            border_focused: Color::Rgb(52, 211, 153), // emerald-400

            accent: Color::Rgb(16, 185, 129),      // emerald-500
            accent_dim: Color::Rgb(5, 150, 105),   // emerald-600
            on_accent: Color::Rgb(255, 255, 255),

            selection_bg: Color::Rgb(63, 63, 70),  // zinc-700
            selection_fg: Color::Rgb(244, 244, 245),

            separator: Color::Rgb(39, 39, 42),     // zinc-800

            success: Color::Rgb(52, 211, 153),     // emerald-400
            error: Color::Rgb(248, 113, 113),      // red-400
        }
    }

    /// Light palette: white/zinc with the same emerald accent
    pub fn light() -> Self {
        Self {
            bg: Color::Rgb(250, 250, 250),         // zinc-50
            fg: Color::Rgb(24, 24, 27),            // zinc-900
            fg_dim: Color::Rgb(113, 113, 122),     // zinc-500
            fg_subtle: Color::Rgb(63, 63, 70),     // zinc-700

            panel_bg: Color::Rgb(255, 255, 255),
            panel_border: Color::Rgb(228, 228, 231), // zinc-200
            border_focused: Color::Rgb(5, 150, 105), // emerald-600

            accent: Color::Rgb(16, 185, 129),      // emerald-500
            accent_dim: Color::Rgb(5, 150, 105),   // emerald-600
            on_accent: Color::Rgb(255, 255, 255),

            selection_bg: Color::Rgb(228, 228, 231), // zinc-200
            selection_fg: Color::Rgb(24, 24, 27),

            separator: Color::Rgb(228, 228, 231),  // zinc-200

            success: Color::Rgb(5, 150, 105),      // emerald-600
            error: Color::Rgb(220, 38, 38),        // red-600
        }
    }

    /// A washed-out copy of this theme, used while a panel is fading
    pub fn faded(&self) -> Self {
        Self {
            fg: self.fg_dim,
            fg_subtle: self.fg_dim,
            accent: self.accent_dim,
            border_focused: self.panel_border,
            ..self.clone()
        }
    }

    // Style helpers for common UI patterns

    /// Default text style
    pub fn text(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    /// Dimmed text style
    pub fn text_dim(&self) -> Style {
        Style::default().fg(self.fg_dim).bg(self.bg)
    }

    /// Slightly subdued body text
    pub fn text_subtle(&self) -> Style {
        Style::default().fg(self.fg_subtle).bg(self.bg)
    }

    /// Title/header style
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Panel background fill
    pub fn panel(&self) -> Style {
        Style::default().fg(self.fg).bg(self.panel_bg)
    }

    /// Panel border (unfocused)
    pub fn border(&self) -> Style {
        Style::default().fg(self.panel_border).bg(self.bg)
    }

    /// Panel border (focused)
    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.border_focused).bg(self.bg)
    }

    /// Active nav entry: filled accent background
    pub fn nav_active(&self) -> Style {
        Style::default()
            .fg(self.on_accent)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Inactive nav entry: outlined/transparent
    pub fn nav_inactive(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    /// Selected list item
    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.selection_fg)
            .bg(self.selection_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Accent-colored span (links, markers)
    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent).bg(self.bg)
    }

    /// Separator line
    pub fn separator(&self) -> Style {
        Style::default().fg(self.separator).bg(self.bg)
    }

    /// Success message style
    pub fn success(&self) -> Style {
        Style::default().fg(self.success).bg(self.bg)
    }

    /// Error message style
    pub fn error(&self) -> Style {
        Style::default().fg(self.error).bg(self.bg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slots(theme: &Theme) -> Vec<Color> {
        vec![
            theme.bg,
            theme.fg,
            theme.fg_dim,
            theme.fg_subtle,
            theme.panel_bg,
            theme.panel_border,
            theme.border_focused,
            theme.accent,
            theme.accent_dim,
            theme.on_accent,
            theme.selection_bg,
            theme.selection_fg,
            theme.separator,
            theme.success,
            theme.error,
        ]
    }

    #[test]
    fn test_every_slot_is_concrete_in_both_palettes() {
        for mode in [ThemeMode::Dark, ThemeMode::Light] {
            let theme = Theme::from_mode(mode);
            for color in slots(&theme) {
                assert_ne!(color, Color::Reset, "unfilled slot in {:?}", mode);
            }
        }
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(Theme::dark().bg, Theme::light().bg);
        assert_ne!(Theme::dark().fg, Theme::light().fg);
    }

    #[test]
    fn test_toggle_is_an_involution() {
        let mode = ThemeMode::Dark;
        assert_eq!(mode.toggled(), ThemeMode::Light);
        assert_eq!(mode.toggled().toggled(), ThemeMode::Dark);
    }

    #[test]
    fn test_toggle_label_names_the_other_mode() {
        assert!(ThemeMode::Dark.toggle_label().contains("Light"));
        assert!(ThemeMode::Light.toggle_label().contains("Dark"));
    }
}
