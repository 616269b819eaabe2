use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::text::glyph;
use crate::game::{Board, Tile};

/// Driver facts shown above the board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusLine {
    pub ticks: u64,
    pub paused: bool,
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, board: &Board, status: StatusLine) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Board
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_status(status), chunks[0]);

        let board_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        frame.render_widget(self.render_board(board), board_area);
        frame.render_widget(self.render_controls(), chunks[2]);
    }

    fn render_board(&self, board: &Board) -> Paragraph<'static> {
        let lines: Vec<Line> = board
            .rows()
            .map(|row| {
                let spans: Vec<Span> = row
                    .iter()
                    .map(|&cell| Self::cell_span(Tile::from_cell(cell)))
                    .collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn cell_span(tile: Tile) -> Span<'static> {
        let style = match tile {
            Tile::Empty => Style::default().fg(Color::DarkGray),
            Tile::Food => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            Tile::Snake(_) => Style::default().fg(Color::Green),
        };
        // Two columns per cell keeps the board roughly square in a terminal.
        Span::styled(format!("{} ", glyph(tile)), style)
    }

    fn render_status(&self, status: StatusLine) -> Paragraph<'static> {
        let mut spans = vec![
            Span::styled("Tick: ", Style::default().fg(Color::Yellow)),
            Span::styled(status.ticks.to_string(), Style::default().fg(Color::White)),
        ];
        if status.paused {
            spans.push(Span::raw("    "));
            spans.push(Span::styled(
                "PAUSED",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
        }

        Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
    }

    fn render_controls(&self) -> Paragraph<'static> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Space", Style::default().fg(Color::Cyan)),
            Span::raw(" pause | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
