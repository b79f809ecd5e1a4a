//! Collapsible weather card presenter
//!
//! This module contains the row model for the weather card: a summary row
//! that is always visible, plus four detail rows (sunrise, sunset, high,
//! low) shown while the card is expanded. The presenter owns no rendering;
//! the host queries it for row counts, sizes, and content, and issues the
//! toggle command in response to user interaction.

pub mod presenter;

pub use presenter::{
    CardError, CardPresenter, CellSize, ExpansionChange, RowContent, DETAIL_ROWS,
    DETAIL_ROW_HEIGHT, SUMMARY_ROW_HEIGHT,
};
