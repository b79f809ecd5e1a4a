//! Application state management for skycard
//!
//! This module contains the host-side application state: the card
//! presenter, the help overlay flag, and keyboard input handling. All
//! row-model logic lives in the presenter; the app only translates key
//! presses into presenter commands and records the returned events.

use crossterm::event::{KeyCode, KeyEvent};

use crate::card::{CardPresenter, ExpansionChange};
use crate::cli::StartupConfig;

/// Main application struct managing state and input
pub struct App {
    /// Presenter backing the weather card
    pub presenter: CardPresenter,
    /// Flag indicating the application should quit
    pub should_quit: bool,
    /// Flag to show help overlay
    pub show_help: bool,
    /// Most recent expansion transition, reported in the footer
    pub last_change: Option<ExpansionChange>,
}

impl App {
    /// Creates a new App with a collapsed, unbound card
    pub fn new() -> Self {
        Self {
            presenter: CardPresenter::new(),
            should_quit: false,
            show_help: false,
            last_change: None,
        }
    }

    /// Creates a new App with the given startup configuration.
    ///
    /// Binds the resolved snapshot and pre-expands the card when requested.
    /// The pre-expansion is not recorded as a transition, so the footer
    /// stays quiet until the user toggles.
    ///
    /// # Arguments
    /// * `config` - The startup configuration derived from CLI arguments
    pub fn with_startup_config(config: StartupConfig) -> Self {
        let mut app = Self::new();
        app.presenter.bind(config.snapshot);
        if config.start_expanded {
            app.presenter.toggle_expansion();
        }
        app
    }

    /// Handles keyboard input events
    ///
    /// Key bindings:
    /// - `t`, `Enter`, or space: toggle the detail rows
    /// - `?`: Toggle help overlay
    /// - `q` or `Esc`: Quit the application
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        // Handle help overlay - intercepts all keys when shown
        if self.show_help {
            match key_event.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
                    self.show_help = false;
                }
                _ => {} // Ignore other keys when help is shown
            }
            return;
        }

        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('t') | KeyCode::Char(' ') | KeyCode::Enter => {
                self.toggle_card();
            }
            KeyCode::Char('?') => {
                self.show_help = true;
            }
            _ => {}
        }
    }

    /// Toggles the card and records the transition for the footer
    pub fn toggle_card(&mut self) {
        self.last_change = Some(self.presenter.toggle_expansion());
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::snapshot;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    /// Helper to create a KeyEvent for testing
    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    /// Helper to create an App with the sample snapshot bound
    fn bound_app() -> App {
        App::with_startup_config(StartupConfig {
            snapshot: snapshot::sample(),
            start_expanded: false,
        })
    }

    #[test]
    fn test_new_app_starts_collapsed_and_quiet() {
        let app = App::new();
        assert!(!app.should_quit);
        assert!(!app.show_help);
        assert!(app.last_change.is_none());
        assert!(!app.presenter.is_expanded());
    }

    #[test]
    fn test_startup_config_binds_snapshot() {
        let app = bound_app();
        assert!(app.presenter.snapshot().is_some());
        assert_eq!(app.presenter.row_count(), 1);
    }

    #[test]
    fn test_startup_config_expanded_pre_expands_without_event() {
        let app = App::with_startup_config(StartupConfig {
            snapshot: snapshot::sample(),
            start_expanded: true,
        });
        assert!(app.presenter.is_expanded());
        assert_eq!(app.presenter.row_count(), 5);
        // Pre-expansion is not a user transition
        assert!(app.last_change.is_none());
    }

    #[test]
    fn test_key_t_toggles_and_records_change() {
        let mut app = bound_app();

        app.handle_key(key_event(KeyCode::Char('t')));

        assert!(app.presenter.is_expanded());
        let change = app.last_change.expect("toggle should record a change");
        assert!(!change.from_expanded);
        assert!(change.to_expanded);
    }

    #[test]
    fn test_key_enter_and_space_toggle() {
        let mut app = bound_app();

        app.handle_key(key_event(KeyCode::Enter));
        assert!(app.presenter.is_expanded());

        app.handle_key(key_event(KeyCode::Char(' ')));
        assert!(!app.presenter.is_expanded());
    }

    #[test]
    fn test_key_q_quits() {
        let mut app = bound_app();
        app.handle_key(key_event(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_key_esc_quits() {
        let mut app = bound_app();
        app.handle_key(key_event(KeyCode::Esc));
        assert!(app.should_quit);
    }

    #[test]
    fn test_help_overlay_opens_and_closes() {
        let mut app = bound_app();

        app.handle_key(key_event(KeyCode::Char('?')));
        assert!(app.show_help);

        app.handle_key(key_event(KeyCode::Esc));
        assert!(!app.show_help);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_help_overlay_swallows_toggle_keys() {
        let mut app = bound_app();
        app.handle_key(key_event(KeyCode::Char('?')));

        app.handle_key(key_event(KeyCode::Char('t')));

        assert!(!app.presenter.is_expanded());
        assert!(app.last_change.is_none());
        assert!(app.show_help);
    }

    #[test]
    fn test_unmapped_keys_are_ignored() {
        let mut app = bound_app();
        app.handle_key(key_event(KeyCode::Char('x')));

        assert!(!app.should_quit);
        assert!(!app.show_help);
        assert!(!app.presenter.is_expanded());
    }
}
