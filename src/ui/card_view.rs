//! Weather card rendering
//!
//! Draws the collapsible card by querying the presenter for row count,
//! row sizes, and row content. The presenter sizes rows in abstract layout
//! points; this view maps them onto terminal lines.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::card::{CardPresenter, CellSize, RowContent, DETAIL_ROW_HEIGHT, SUMMARY_ROW_HEIGHT};

/// Layout points represented by one terminal line
const POINTS_PER_LINE: f64 = 10.0;

/// Width substituted when the presenter reports layout as unavailable
const FALLBACK_WIDTH: f64 = 80.0;

/// Renders the weather card view
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    if area.width == 0 || area.height == 0 {
        return;
    }

    let presenter = &app.presenter;

    // Nothing bound yet: placeholder instead of content queries
    if presenter.snapshot().is_none() {
        render_no_data(frame, area);
        return;
    }

    let card_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Span::styled(
            " Weather ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));

    let inner = card_block.inner(area);
    frame.render_widget(card_block, area);

    // One constraint per presenter row, then a spacer and the footer
    let container_width = Some(inner.width as f64);
    let row_count = presenter.row_count();

    let mut constraints = Vec::with_capacity(row_count + 2);
    for index in 0..row_count {
        constraints.push(Constraint::Length(row_lines(
            presenter,
            index,
            container_width,
        )));
    }
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for index in 0..row_count {
        match presenter.row_content(index) {
            Ok(RowContent::Summary { expanded }) => {
                render_summary_row(frame, chunks[index], expanded);
            }
            Ok(RowContent::Detail { title, value }) => {
                render_detail_row(frame, chunks[index], &title, &value);
            }
            Err(_) => {} // Unbound presenters were handled above
        }
    }

    render_footer(frame, chunks[row_count + 1], app);
}

/// Terminal lines for a presenter row
///
/// Substitutes a default width when the presenter reports layout as
/// unavailable, so a degenerate frame still draws at the right heights.
fn row_lines(presenter: &CardPresenter, index: usize, container_width: Option<f64>) -> u16 {
    let size = presenter
        .row_size(index, container_width)
        .unwrap_or(CellSize {
            width: FALLBACK_WIDTH,
            height: if index == 0 {
                SUMMARY_ROW_HEIGHT
            } else {
                DETAIL_ROW_HEIGHT
            },
        });
    (size.height / POINTS_PER_LINE).round() as u16
}

/// Renders the summary row with its expand affordance
fn render_summary_row(frame: &mut Frame, area: Rect, expanded: bool) {
    let chevron = if expanded { "▼" } else { "▶" };
    let hint = if expanded {
        "press t to hide details"
    } else {
        "press t to show details"
    };

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(format!(" {} ", chevron), Style::default().fg(Color::Yellow)),
            Span::styled(
                "Today's weather",
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!("   {}", hint),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Renders one detail row as a title/value line
fn render_detail_row(frame: &mut Frame, area: Rect, title: &str, value: &str) {
    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("   {:<10}", title),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw(value.to_string()),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

/// Renders the footer hint line, including the last structural change
fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let status = match app.last_change {
        Some(change) if !change.inserted_rows().is_empty() => {
            format!("{} details shown · ", change.inserted_rows().len())
        }
        Some(change) if !change.removed_rows().is_empty() => {
            format!("{} details hidden · ", change.removed_rows().len())
        }
        _ => String::new(),
    };

    let footer = Line::from(vec![
        Span::styled(format!(" {}", status), Style::default().fg(Color::DarkGray)),
        Span::styled("t", Style::default().fg(Color::Yellow)),
        Span::styled(" toggle · ", Style::default().fg(Color::DarkGray)),
        Span::styled("?", Style::default().fg(Color::Yellow)),
        Span::styled(" help · ", Style::default().fg(Color::DarkGray)),
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::styled(" quit", Style::default().fg(Color::DarkGray)),
    ]);

    frame.render_widget(Paragraph::new(footer), area);
}

/// Renders a placeholder when no snapshot has been bound
fn render_no_data(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Weather ");

    let message = Paragraph::new("No weather data bound")
        .style(Style::default().fg(Color::DarkGray))
        .block(block);

    frame.render_widget(message, area);
}
