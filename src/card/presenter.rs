//! Weather card row model
//!
//! The presenter holds one bound `WeatherSnapshot` and one expansion flag,
//! and answers the host's layout and content queries from those two fields.
//! All operations are synchronous and complete immediately; the host is
//! responsible for serializing calls on its rendering thread.

use std::ops::Range;

use thiserror::Error;

use crate::data::WeatherSnapshot;

/// Height in layout points of the summary row (taller to hold the expand
/// affordance)
pub const SUMMARY_ROW_HEIGHT: f64 = 70.0;

/// Height in layout points of one detail row
pub const DETAIL_ROW_HEIGHT: f64 = 40.0;

/// Indices of the detail rows, which appear and disappear as a block
pub const DETAIL_ROWS: Range<usize> = 1..5;

/// Errors that can occur when querying the presenter
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CardError {
    /// Content or size was queried before any snapshot was bound
    #[error("no weather snapshot bound to the card")]
    NoDataBound,

    /// The host could not supply a container width for layout
    #[error("container width unavailable for layout")]
    LayoutUnavailable,
}

/// Content for one row of the card
#[derive(Debug, Clone, PartialEq)]
pub enum RowContent {
    /// The always-visible summary row; carries the expansion state so the
    /// cell can draw its expand affordance
    Summary { expanded: bool },
    /// One sunrise/sunset/high/low fact row
    Detail { title: String, value: String },
}

/// Size of one cell in layout points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellSize {
    /// Cell width, equal to the container width supplied by the host
    pub width: f64,
    /// Cell height
    pub height: f64,
}

/// Describes one expansion transition, returned from
/// [`CardPresenter::toggle_expansion`] so the host can compute which rows
/// were inserted or removed and refresh accordingly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpansionChange {
    /// Expansion state before the toggle
    pub from_expanded: bool,
    /// Expansion state after the toggle
    pub to_expanded: bool,
}

impl ExpansionChange {
    /// Rows inserted by this transition; empty when collapsing
    pub fn inserted_rows(&self) -> Range<usize> {
        if !self.from_expanded && self.to_expanded {
            DETAIL_ROWS
        } else {
            0..0
        }
    }

    /// Rows removed by this transition; empty when expanding
    pub fn removed_rows(&self) -> Range<usize> {
        if self.from_expanded && !self.to_expanded {
            DETAIL_ROWS
        } else {
            0..0
        }
    }
}

/// Presenter for one weather card
///
/// A presenter instance is created per visible card, receives a snapshot
/// via [`bind`](CardPresenter::bind) on each data update, and is discarded
/// with the card. It starts collapsed.
#[derive(Debug, Default)]
pub struct CardPresenter {
    /// Snapshot currently bound to the card; `None` only before first bind
    snapshot: Option<WeatherSnapshot>,
    /// Whether the detail rows are visible
    expanded: bool,
}

impl CardPresenter {
    /// Creates a collapsed presenter with no snapshot bound
    pub fn new() -> Self {
        Self {
            snapshot: None,
            expanded: false,
        }
    }

    /// Returns whether the detail rows are currently visible
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Returns the currently bound snapshot, if any
    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        self.snapshot.as_ref()
    }

    /// Replaces the bound snapshot wholesale
    ///
    /// The snapshot is trusted as supplied; no validation is performed and
    /// no redraw is triggered. The host decides when to query after a bind.
    pub fn bind(&mut self, snapshot: WeatherSnapshot) {
        self.snapshot = Some(snapshot);
    }

    /// Returns the number of rows to draw: 1 collapsed, 5 expanded
    ///
    /// Row 0 is always the summary row; rows 1-4 exist only while expanded.
    pub fn row_count(&self) -> usize {
        if self.expanded {
            5
        } else {
            1
        }
    }

    /// Returns the cell size for a row
    ///
    /// The summary row is taller than the detail rows; both span the full
    /// container width.
    ///
    /// # Arguments
    /// * `index` - Row index, expected within `0..row_count()`
    /// * `container_width` - Width supplied by the host, or `None` if its
    ///   layout is not yet available
    ///
    /// # Returns
    /// * `Ok(CellSize)` with the row's size
    /// * `Err(CardError::NoDataBound)` if no snapshot has been bound
    /// * `Err(CardError::LayoutUnavailable)` if no width was supplied; the
    ///   caller should substitute a previous or default width
    pub fn row_size(
        &self,
        index: usize,
        container_width: Option<f64>,
    ) -> Result<CellSize, CardError> {
        if self.snapshot.is_none() {
            return Err(CardError::NoDataBound);
        }
        let width = container_width.ok_or(CardError::LayoutUnavailable)?;

        let height = if index == 0 {
            SUMMARY_ROW_HEIGHT
        } else {
            DETAIL_ROW_HEIGHT
        };

        Ok(CellSize { width, height })
    }

    /// Returns the content for a row
    ///
    /// Row 0 yields [`RowContent::Summary`]; rows 1-4 yield the fixed
    /// sunrise/sunset/high/low mapping. Indices outside the documented row
    /// range yield an "n/a" detail row rather than failing, since the card
    /// must never crash mid-render on a malformed host query.
    ///
    /// # Returns
    /// * `Ok(RowContent)` for any index once a snapshot is bound
    /// * `Err(CardError::NoDataBound)` if no snapshot has been bound
    pub fn row_content(&self, index: usize) -> Result<RowContent, CardError> {
        let snapshot = self.snapshot.as_ref().ok_or(CardError::NoDataBound)?;

        if index == 0 {
            return Ok(RowContent::Summary {
                expanded: self.expanded,
            });
        }

        let (title, value) = match index {
            1 => ("Sunrise", snapshot.sunrise.clone()),
            2 => ("Sunset", snapshot.sunset.clone()),
            3 => ("High", format!("{} C", snapshot.high_celsius)),
            4 => ("Low", format!("{} C", snapshot.low_celsius)),
            _ => ("n/a", "n/a".to_string()),
        };

        Ok(RowContent::Detail {
            title: title.to_string(),
            value,
        })
    }

    /// Flips the expansion state
    ///
    /// Returns the transition so the host can work out which rows appeared
    /// or disappeared and run its own refresh.
    pub fn toggle_expansion(&mut self) -> ExpansionChange {
        let from_expanded = self.expanded;
        self.expanded = !self.expanded;
        ExpansionChange {
            from_expanded,
            to_expanded: self.expanded,
        }
    }
}
