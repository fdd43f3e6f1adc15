//! Application state and event handling
//!
//! This is the core of folio, managing:
//! - The two pieces of view state (active tab, theme mode)
//! - The tab switch transition
//! - The contact form
//! - Keyboard input, split per tab

use crate::content::{mailto_uri, Profile, Tab};
use crate::ui::theme::{self, Theme, ThemeMode};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use std::time::{Duration, Instant};

/// Duration of the directional fade when switching tabs
pub const TAB_FADE: Duration = Duration::from_millis(250);

/// Terminal width at which the sidebar appears; below it the compact
/// tab switcher is shown instead
pub const SIDEBAR_BREAKPOINT: u16 = 90;

/// How long a flash message stays visible
const FLASH_SECS: u64 = 3;

/// Phase of a tab switch: the outgoing panel leaves, then the incoming
/// panel settles in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    Exit,
    Enter,
}

/// An in-flight tab switch
#[derive(Debug, Clone)]
pub struct TabTransition {
    pub from: Tab,
    pub started: Instant,
}

impl TabTransition {
    pub fn new(from: Tab) -> Self {
        Self {
            from,
            started: Instant::now(),
        }
    }

    pub fn phase(&self) -> Option<TransitionPhase> {
        Self::phase_at(self.started.elapsed())
    }

    /// Exit for the first half of the fade, Enter for the second, done after
    pub fn phase_at(elapsed: Duration) -> Option<TransitionPhase> {
        if elapsed >= TAB_FADE {
            None
        } else if elapsed * 2 < TAB_FADE {
            Some(TransitionPhase::Exit)
        } else {
            Some(TransitionPhase::Enter)
        }
    }
}

/// Fields of the contact form, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Email,
    Message,
    Send,
}

impl FormField {
    pub fn next(&self) -> Self {
        match self {
            FormField::Name => FormField::Email,
            FormField::Email => FormField::Message,
            FormField::Message => FormField::Send,
            FormField::Send => FormField::Name,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            FormField::Name => FormField::Send,
            FormField::Email => FormField::Name,
            FormField::Message => FormField::Email,
            FormField::Send => FormField::Message,
        }
    }
}

/// Transient contact form state
///
/// Field buffers live here the way the host form controls own their input
/// in a browser; nothing is persisted.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub focus: FormField,
}

impl ContactForm {
    /// Whether printable input currently goes into a text field
    pub fn captures_input(&self) -> bool {
        !matches!(self.focus, FormField::Send)
    }

    fn focused_buffer(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::Name => Some(&mut self.name),
            FormField::Email => Some(&mut self.email),
            FormField::Message => Some(&mut self.message),
            FormField::Send => None,
        }
    }
}

/// Main application state
pub struct App {
    pub should_quit: bool,
    pub active_tab: Tab,
    pub theme_mode: ThemeMode,
    pub theme: Theme,
    pub profile: Profile,

    // In-flight tab switch, if any
    pub transition: Option<TabTransition>,

    // About tab state
    pub about_scroll: u16,

    // Projects tab state
    pub project_selected: usize,

    // Contact tab state
    pub form: ContactForm,

    // Flash message (temporary feedback): (message, is_error, timestamp)
    pub flash_message: Option<(String, bool, Instant)>,
}

impl App {
    pub fn new(profile: Profile, initial_mode: ThemeMode) -> Self {
        Self {
            should_quit: false,
            active_tab: Tab::About,
            theme_mode: initial_mode,
            theme: Theme::from_mode(initial_mode),
            profile,
            transition: None,
            about_scroll: 0,
            project_selected: 0,
            form: ContactForm::default(),
            flash_message: None,
        }
    }

    /// Whether the sidebar layout applies at this terminal width
    pub fn use_sidebar(&self, terminal_width: u16) -> bool {
        terminal_width >= SIDEBAR_BREAKPOINT
    }

    /// Switch the active tab, starting (or restarting) the fade toward it
    pub fn select_tab(&mut self, tab: Tab) {
        if tab == self.active_tab {
            return;
        }
        self.transition = Some(TabTransition::new(self.active_tab));
        self.active_tab = tab;
    }

    /// Flip the theme and synchronize the process-wide dark-mode flag.
    ///
    /// The flag write happens here, as an effect of the state change, so
    /// that rendering code outside this struct's tree observes the new mode
    /// on the very next frame.
    pub fn toggle_theme(&mut self) {
        self.theme_mode = self.theme_mode.toggled();
        self.theme = Theme::from_mode(self.theme_mode);
        theme::sync_dark_mode(self.theme_mode);
    }

    /// Advance time-based state: expire the transition and the flash
    pub fn tick(&mut self) {
        if let Some(transition) = &self.transition {
            if transition.phase().is_none() {
                self.transition = None;
            }
        }
        if let Some((_, _, shown_at)) = &self.flash_message {
            if shown_at.elapsed().as_secs() >= FLASH_SECS {
                self.flash_message = None;
            }
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // The contact form captures printable input while a text field is
        // focused, ahead of the global keybindings.
        if self.active_tab == Tab::Contact && self.form.captures_input() {
            if self.handle_form_input(key) {
                return Ok(());
            }
        }

        // Global keys
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return Ok(());
            }
            KeyCode::Char('t') => {
                self.toggle_theme();
                return Ok(());
            }
            KeyCode::Char('1') => self.select_tab(Tab::About),
            KeyCode::Char('2') => self.select_tab(Tab::Projects),
            KeyCode::Char('3') => self.select_tab(Tab::Contact),
            _ => {}
        }

        // Tab-specific handling
        match self.active_tab {
            Tab::About => self.handle_about_key(key),
            Tab::Projects => self.handle_projects_key(key),
            Tab::Contact => self.handle_contact_key(key),
        }
        Ok(())
    }

    /// Handle keys in the About tab
    fn handle_about_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.about_scroll = self.about_scroll.saturating_add(1);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.about_scroll = self.about_scroll.saturating_sub(1);
            }
            KeyCode::Char('g') => self.about_scroll = 0,
            KeyCode::Char('r') => self.open_link(self.profile.links.resume.clone()),
            KeyCode::Char('h') => self.open_link(self.profile.links.github.clone()),
            KeyCode::Char('l') => self.open_link(self.profile.links.linkedin.clone()),
            _ => {}
        }
    }

    /// Handle keys in the Projects tab
    fn handle_projects_key(&mut self, key: KeyEvent) {
        let count = self.profile.projects.len();
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                if self.project_selected < count.saturating_sub(1) {
                    self.project_selected += 1;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.project_selected = self.project_selected.saturating_sub(1);
            }
            KeyCode::Char('g') => self.project_selected = 0,
            KeyCode::Char('G') => self.project_selected = count.saturating_sub(1),
            KeyCode::Enter | KeyCode::Char('o') => {
                if let Some(project) = self.profile.projects.get(self.project_selected) {
                    self.open_link(project.link.clone());
                }
            }
            _ => {}
        }
    }

    /// Handle keys in the Contact tab while no text field is focused
    fn handle_contact_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => {
                self.form.focus = self.form.focus.next();
            }
            KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => {
                self.form.focus = self.form.focus.prev();
            }
            KeyCode::Enter => self.submit_contact(),
            KeyCode::Char('n') => self.open_link(self.profile.links.notion.clone()),
            KeyCode::Char('r') => self.open_link(self.profile.links.resume.clone()),
            _ => {}
        }
    }

    /// Feed a key to the focused text field. Returns true if consumed.
    fn handle_form_input(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) => {
                if let Some(buffer) = self.form.focused_buffer() {
                    buffer.push(c);
                }
                true
            }
            KeyCode::Backspace => {
                if let Some(buffer) = self.form.focused_buffer() {
                    buffer.pop();
                }
                true
            }
            KeyCode::Enter => {
                // The message field is multi-line; elsewhere Enter advances
                if self.form.focus == FormField::Message {
                    self.form.message.push('\n');
                } else {
                    self.form.focus = self.form.focus.next();
                }
                true
            }
            KeyCode::Tab | KeyCode::Down => {
                self.form.focus = self.form.focus.next();
                true
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.form.focus = self.form.focus.prev();
                true
            }
            KeyCode::Esc => {
                self.form.focus = FormField::Send;
                true
            }
            _ => false,
        }
    }

    /// Build the mail deep link from the form, or None while a required
    /// field is still blank
    pub fn compose_inquiry(&self) -> Option<String> {
        let name = self.form.name.trim();
        let email = self.form.email.trim();
        if name.is_empty() || email.is_empty() {
            return None;
        }
        Some(mailto_uri(
            &self.profile.contact.email,
            name,
            email,
            self.form.message.trim(),
        ))
    }

    /// Submit the contact form: required-field check, then hand the mail
    /// deep link to the OS
    fn submit_contact(&mut self) {
        let Some(uri) = self.compose_inquiry() else {
            self.show_flash("Name and email are required", true);
            return;
        };

        // Whether a mail handler is registered is the OS's business; if
        // nothing picks the link up, this is a silent no-op.
        let _ = open::that(&uri);
        self.show_flash("Opening mail draft…", false);
    }

    /// Open an external link in the system browser
    fn open_link(&mut self, url: String) {
        let _ = open::that(&url);
        self.show_flash("Opening link…", false);
    }

    /// Show a flash message
    fn show_flash(&mut self, message: &str, is_error: bool) {
        self.flash_message = Some((message.into(), is_error, Instant::now()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(Profile::sample(), ThemeMode::default())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn test_initial_state() {
        let app = app();
        assert_eq!(app.active_tab, Tab::About);
        assert_eq!(app.theme_mode, ThemeMode::Dark);
        assert!(app.transition.is_none());
        // The toggle control offers the switch to Light on first load
        assert!(app.theme_mode.toggle_label().contains("Light"));
    }

    #[test]
    fn test_toggle_theme_involution_and_flag() {
        let mut app = app();
        theme::sync_dark_mode(app.theme_mode);

        app.toggle_theme();
        assert_eq!(app.theme_mode, ThemeMode::Light);
        assert!(!theme::dark_mode_active());

        app.toggle_theme();
        assert_eq!(app.theme_mode, ThemeMode::Dark);
        assert!(theme::dark_mode_active());
    }

    #[test]
    fn test_select_tab_sequence() {
        let mut app = app();
        app.select_tab(Tab::Projects);
        app.select_tab(Tab::Contact);
        app.select_tab(Tab::Projects);
        assert_eq!(app.active_tab, Tab::Projects);
        // The restarted transition fades away from the previously shown panel
        assert_eq!(app.transition.as_ref().unwrap().from, Tab::Contact);
    }

    #[test]
    fn test_select_same_tab_is_a_no_op() {
        let mut app = app();
        app.select_tab(Tab::About);
        assert!(app.transition.is_none());
    }

    #[test]
    fn test_transition_phases() {
        assert_eq!(
            TabTransition::phase_at(Duration::from_millis(0)),
            Some(TransitionPhase::Exit)
        );
        assert_eq!(
            TabTransition::phase_at(Duration::from_millis(100)),
            Some(TransitionPhase::Exit)
        );
        assert_eq!(
            TabTransition::phase_at(Duration::from_millis(180)),
            Some(TransitionPhase::Enter)
        );
        assert_eq!(TabTransition::phase_at(Duration::from_millis(250)), None);
        assert_eq!(TabTransition::phase_at(Duration::from_millis(400)), None);
    }

    #[test]
    fn test_tab_keys_switch_panels() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('2'))).unwrap();
        assert_eq!(app.active_tab, Tab::Projects);
        app.handle_key(key(KeyCode::Char('3'))).unwrap();
        assert_eq!(app.active_tab, Tab::Contact);
    }

    #[test]
    fn test_form_captures_printable_input() {
        let mut app = app();
        app.select_tab(Tab::Contact);
        assert_eq!(app.form.focus, FormField::Name);

        // 'q' goes into the name field instead of quitting
        app.handle_key(key(KeyCode::Char('q'))).unwrap();
        assert!(!app.should_quit);
        assert_eq!(app.form.name, "q");

        // Esc hands control back to the global keys
        app.handle_key(key(KeyCode::Esc)).unwrap();
        assert_eq!(app.form.focus, FormField::Send);
        app.handle_key(key(KeyCode::Char('q'))).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_form_focus_cycle() {
        let mut form = ContactForm::default();
        form.focus = FormField::Name;
        assert_eq!(form.focus.next(), FormField::Email);
        assert_eq!(form.focus.next().next(), FormField::Message);
        assert_eq!(form.focus.next().next().next(), FormField::Send);
        assert_eq!(form.focus.next().next().next().next(), FormField::Name);
        assert_eq!(form.focus.prev(), FormField::Send);
    }

    #[test]
    fn test_compose_inquiry_requires_name_and_email() {
        let mut app = app();
        app.form.email = "hong@example.com".into();
        app.form.message = "Hello".into();
        // Name is blank: no deep link is produced
        assert!(app.compose_inquiry().is_none());

        app.form.name = "Hong Gildong".into();
        let uri = app.compose_inquiry().unwrap();
        assert!(uri.starts_with("mailto:you@example.com?"));
    }

    #[test]
    fn test_whitespace_only_name_is_rejected() {
        let mut app = app();
        app.form.name = "   ".into();
        app.form.email = "a@b.c".into();
        assert!(app.compose_inquiry().is_none());
    }

    #[test]
    fn test_sidebar_breakpoint() {
        let app = app();
        assert!(app.use_sidebar(120));
        assert!(app.use_sidebar(SIDEBAR_BREAKPOINT));
        assert!(!app.use_sidebar(SIDEBAR_BREAKPOINT - 1));
    }
}
