//! UI rendering module for skycard
//!
//! This module contains all the rendering logic for the terminal user
//! interface, using the ratatui library for TUI components.

pub mod card_view;
pub mod help_overlay;

pub use card_view::render as render_card;
pub use help_overlay::render as render_help_overlay;
