//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::App;
use crate::games::tictactoe::{Board, Mark, Position};

const CELL_WIDTH: u16 = 12;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Renders title, board with cursor highlight, and status line.
pub fn draw(frame: &mut Frame, app: &App<'_>) {
    let [title_area, board_area, status_area] = screen_layout(frame.area());

    let title = Paragraph::new("Strictly Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, title_area);

    draw_board(frame, board_area, app.game().board(), app.cursor());

    let status = Paragraph::new(vec![
        Line::from(app.status_message()),
        Line::from(Span::styled(
            "1-9 or arrows+Enter to play, click a cell, n new game, q quit",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .style(Style::default().fg(Color::Yellow))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, status_area);
}

/// Finds the cell drawn at a terminal coordinate, for mouse clicks.
pub fn cell_at(area: Rect, column: u16, row: u16) -> Option<Position> {
    let [_, board_area, _] = screen_layout(area);
    let point = ratatui::layout::Position::new(column, row);
    cell_rects(board_area)
        .iter()
        .position(|rect| rect.contains(point))
        .and_then(Position::from_index)
}

fn screen_layout(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Title
            Constraint::Min(BOARD_HEIGHT),    // Board
            Constraint::Length(4),            // Status
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

/// Rectangles of the nine cells in index order.
fn cell_rects(area: Rect) -> [Rect; 9] {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    let mut cells = [Rect::default(); 9];
    for (r, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
            ])
            .split(row_area);
        for (c, cell) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            cells[r * 3 + c] = cell;
        }
    }
    cells
}

fn draw_board(frame: &mut Frame, area: Rect, board: &Board, cursor: Position) {
    let cells = cell_rects(area);

    for pos in Position::ALL {
        let rect = cells[pos.to_index()];
        draw_cell(frame, rect, board, cursor, pos);

        // Vertical bars right of the first two columns.
        if pos.col() < 2 {
            let bar = Rect::new(rect.right(), rect.y, 1, rect.height).intersection(frame.area());
            draw_separator_vertical(frame, bar);
        }
        // Horizontal rules under the first two rows.
        if pos.row() < 2 && pos.col() == 0 {
            let rule = Rect::new(rect.x, rect.bottom(), BOARD_WIDTH, 1).intersection(frame.area());
            draw_separator(frame, rule);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, board: &Board, cursor: Position, pos: Position) {
    let mark = board.get(pos.to_index()).unwrap_or_default();

    let base_style = match mark {
        Mark::Empty => Style::default().fg(Color::DarkGray),
        Mark::First => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Mark::Second => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };

    let style = if pos == cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let symbol = format!(" {} ", mark.symbol());
    let middle = Rect::new(area.x, area.y + area.height / 2, area.width, area.height.min(1));
    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, middle);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = (0..area.height).map(|_| Line::from("│")).collect();
    let sep = Paragraph::new(lines).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
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
