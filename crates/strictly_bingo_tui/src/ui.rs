//! Stateless UI rendering for the bingo card.

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use strictly_bingo::{CellIndex, GRID_SIDE};

const BANNER_WIDTH: u16 = 30;
const BANNER_HEIGHT: u16 = 5;

/// Renders the whole screen: title, card, status, and the bingo banner.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = screen_layout(frame.area());

    let title = app
        .card()
        .show()
        .name()
        .clone()
        .unwrap_or_else(|| "Strictly Bingo".to_string());
    let title = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_card(frame, chunks[1], app);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    if app.card().alert_visible() {
        draw_banner(frame, banner_area(frame.area()));
    }
}

/// Returns where the bingo banner sits on a screen of the given size.
pub fn banner_area(screen: Rect) -> Rect {
    center_rect(screen_layout(screen)[1], BANNER_WIDTH, BANNER_HEIGHT)
}

/// Returns true if a click at `(column, row)` lands on the bingo banner.
pub fn hits_banner(screen: Rect, column: u16, row: u16) -> bool {
    banner_area(screen).contains(Position::new(column, row))
}

fn screen_layout(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(15),   // Card
            Constraint::Length(3), // Status
        ])
        .split(area)
}

fn draw_card(frame: &mut Frame, area: Rect, app: &App) {
    let winning = app.card().winning_cells();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, GRID_SIDE as u32); GRID_SIDE])
        .split(area);

    for (row, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, GRID_SIDE as u32); GRID_SIDE])
            .split(*row_area);

        for (col, cell_area) in cols.iter().enumerate() {
            if let Some(cell) = CellIndex::from_row_col(row, col) {
                draw_cell(frame, *cell_area, app, cell, winning.contains(&cell));
            }
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, cell: CellIndex, on_line: bool) {
    let card = app.card();
    let style = if on_line {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else if card.is_marked(cell) {
        Style::default().fg(Color::Black).bg(Color::Green)
    } else {
        Style::default().fg(Color::White)
    };

    let border = if cell == app.cursor() {
        Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let paragraph = Paragraph::new(card.grid().cell(cell))
        .style(style)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).border_style(border));
    frame.render_widget(paragraph, area);
}

fn draw_banner(frame: &mut Frame, banner_area: Rect) {
    let banner = Paragraph::new("BINGO!\n\nEsc or click to dismiss")
        .style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(Clear, banner_area);
    frame.render_widget(banner, banner_area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
