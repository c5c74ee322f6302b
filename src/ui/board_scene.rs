//! Board rendering with segment highlighting.

use super::game_common::{
    create_game_layout, render_info_panel_frame, render_status_bar, render_thinking_status_bar,
    render_too_small,
};
use crate::board::{Marker, Segment};
use crate::constants::{BOARD_COLS, BOARD_ROWS, LONG_SEGMENT_LEN};
use crate::game::GameSession;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const INFO_PANEL_WIDTH: u16 = 24;
const BOARD_WIDTH: u16 = (BOARD_COLS * 2 - 1) as u16; // "X " format
const BOARD_HEIGHT: u16 = BOARD_ROWS as u16;
const MIN_WIDTH: u16 = BOARD_WIDTH + INFO_PANEL_WIDTH + 6;
const MIN_HEIGHT: u16 = BOARD_HEIGHT + 4;

/// How a cell is highlighted by the segments passing through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Highlight {
    #[default]
    None,
    Three,
    Four,
}

/// Per-cell highlight: a cell on any length-4 segment shows as Four,
/// otherwise a cell on a length-3 segment shows as Three.
pub fn segment_highlights(segments: &[Segment]) -> [[Highlight; BOARD_COLS]; BOARD_ROWS] {
    let mut grid = [[Highlight::None; BOARD_COLS]; BOARD_ROWS];
    for segment in segments {
        let level = if segment.len() == LONG_SEGMENT_LEN {
            Highlight::Four
        } else {
            Highlight::Three
        };
        for &(r, c) in &segment.cells {
            grid[r][c] = grid[r][c].max(level);
        }
    }
    grid
}

/// Render the game scene.
pub fn render_game_scene(frame: &mut Frame, area: Rect, session: &GameSession) {
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        render_too_small(frame, area, MIN_WIDTH, MIN_HEIGHT);
        return;
    }

    let layout = create_game_layout(
        frame,
        area,
        " Segments ",
        Color::Cyan,
        BOARD_HEIGHT,
        INFO_PANEL_WIDTH,
    );

    render_board(frame, layout.content, session);
    render_status_bar_content(frame, layout.status_bar, session);
    render_info_panel(frame, layout.info_panel, session);
}

fn marker_color(marker: Marker) -> Color {
    match marker {
        Marker::X => Color::LightCyan,
        Marker::O => Color::LightRed,
    }
}

fn render_board(frame: &mut Frame, area: Rect, session: &GameSession) {
    let y_offset = area.y + (area.height.saturating_sub(BOARD_HEIGHT)) / 2;
    let x_offset = area.x + (area.width.saturating_sub(BOARD_WIDTH)) / 2;

    let board = &session.state.board;
    let mut segments = session.state.segments(Marker::X);
    segments.extend(session.state.segments(Marker::O));
    let highlights = segment_highlights(&segments);

    for row in 0..BOARD_ROWS {
        let mut spans = Vec::new();
        for col in 0..BOARD_COLS {
            let is_cursor = session.cursor == (row, col);

            let (symbol, mut style) = match board.get(row, col) {
                Some(marker) => (
                    marker.symbol(),
                    Style::default()
                        .fg(marker_color(marker))
                        .add_modifier(Modifier::BOLD),
                ),
                None if is_cursor => (
                    "□",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                None => ("·", Style::default().fg(Color::DarkGray)),
            };

            style = match highlights[row][col] {
                Highlight::Four => style.bg(Color::Magenta),
                Highlight::Three => style.bg(Color::Blue),
                Highlight::None => style,
            };
            if session.last_move == Some((row, col)) {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            if is_cursor && board.get(row, col).is_some() {
                style = style.bg(Color::DarkGray);
            }

            spans.push(Span::styled(symbol, style));
            if col < BOARD_COLS - 1 {
                spans.push(Span::raw(" "));
            }
        }

        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(x_offset, y_offset + row as u16, BOARD_WIDTH, 1),
        );
    }
}

/// Status line text: whose turn it is and both scores.
pub fn status_text(session: &GameSession) -> String {
    let scores = session.state.scores();
    format!(
        "Turn: {} | Score X: {} | Score O: {}",
        session.state.turn.symbol(),
        scores.x,
        scores.o
    )
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, session: &GameSession) {
    if session.ai_thinking() {
        render_thinking_status_bar(frame, area, "Advisor is thinking...");
        return;
    }

    let mut controls = vec![("[Arrows]", "Move"), ("[Enter]", "Place")];
    if session.state.can_undo() {
        controls.push(("[U]", "Undo"));
    }
    controls.push(("[R]", "Reset"));
    controls.push(("[Q]", "Quit"));

    render_status_bar(
        frame,
        area,
        &status_text(session),
        marker_color(session.state.turn),
        &controls,
    );
}

fn render_info_panel(frame: &mut Frame, area: Rect, session: &GameSession) {
    let inner = render_info_panel_frame(frame, area);
    let gray = Style::default().fg(Color::Gray);

    let seat = |marker: Marker| match session.advisor {
        Some(m) if m == marker => "Advisor",
        _ => "Human",
    };

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            "RULES",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("Take turns placing.", gray)),
        Line::from(vec![
            Span::styled("3 in a row", Style::default().bg(Color::Blue)),
            Span::styled(": 1 pt", gray),
        ]),
        Line::from(vec![
            Span::styled("4 in a row", Style::default().bg(Color::Magenta)),
            Span::styled(": +2 pts", gray),
        ]),
        Line::from(""),
    ];

    for marker in Marker::ALL {
        lines.push(Line::from(vec![
            Span::styled(
                marker.symbol(),
                Style::default()
                    .fg(marker_color(marker))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(": {}", seat(marker)), gray),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Moves: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            session.state.move_count().to_string(),
            Style::default().fg(Color::Cyan),
        ),
    ]));
    if session.state.is_full() {
        lines.push(Line::from(Span::styled(
            "Board full",
            Style::default().fg(Color::Yellow),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
