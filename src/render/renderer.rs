use std::str::FromStr;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::game::{Caste, EntityKind, GameStatus, Point, Snapshot};
use crate::metrics::GameMetrics;

const HEADER_ROWS: u16 = 3;
const FOOTER_ROWS: u16 = 3;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Character area left for board cells in a terminal of the given size
    pub fn board_area(cols: u16, rows: u16) -> (u16, u16) {
        let rows = rows.saturating_sub(HEADER_ROWS + FOOTER_ROWS + 2);
        let cols = cols.saturating_sub(2);
        (cols, rows)
    }

    /// Draw one frame. `next_caste` is the caste a restart would use.
    pub fn render(&self, frame: &mut Frame, snapshot: &Snapshot, metrics: &GameMetrics, next_caste: Caste) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_ROWS), // Header
                Constraint::Min(0),              // Game area
                Constraint::Length(FOOTER_ROWS), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(snapshot, metrics), chunks[0]);

        let grid = self.render_grid(snapshot);
        frame.render_widget(grid, chunks[1]);

        if snapshot.status == GameStatus::Over {
            let popup = centered(chunks[1], 44, 13);
            frame.render_widget(Clear, popup);
            frame.render_widget(self.render_game_over(snapshot, metrics, next_caste), popup);
        }

        frame.render_widget(self.render_controls(), chunks[2]);
    }

    fn render_grid(&self, snapshot: &Snapshot) -> Paragraph<'_> {
        let snake_color = Color::from_str(&snapshot.color).unwrap_or(Color::Magenta);
        let mut lines = Vec::with_capacity(snapshot.board.height);

        for y in 0..snapshot.board.height {
            let mut spans = Vec::with_capacity(snapshot.board.width);

            for x in 0..snapshot.board.width {
                let pos = Point::new(x as i32, y as i32);

                let cell = match snapshot.entity_at(pos) {
                    Some(entity) => {
                        let color = if entity.dead { Color::Red } else { snake_color };
                        match entity.kind {
                            EntityKind::Head => Span::styled(
                                "■ ",
                                Style::default().fg(color).add_modifier(Modifier::BOLD),
                            ),
                            EntityKind::Body => Span::styled("□ ", Style::default().fg(color)),
                            EntityKind::Tail => Span::styled("▫ ", Style::default().fg(color)),
                            EntityKind::Food => Span::styled(
                                "● ",
                                Style::default()
                                    .fg(Color::Green)
                                    .add_modifier(Modifier::BOLD),
                            ),
                        }
                    }
                    None => Span::styled(". ", Style::default().fg(Color::DarkGray)),
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

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

    fn render_stats(&self, snapshot: &Snapshot, metrics: &GameMetrics) -> Paragraph<'_> {
        let info = &snapshot.info;
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let mut spans = Vec::new();
        if !info.name.is_empty() {
            spans.push(Span::styled(
                info.name.clone(),
                value.add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw("    "));
        }
        spans.extend([
            Span::styled("Caste: ", label),
            Span::styled(info.caste.clone(), value),
            Span::raw("    "),
            Span::styled("Size: ", label),
            Span::styled(info.size.to_string(), value),
            Span::raw("    "),
            Span::styled("Score: ", label),
            Span::styled(info.score.to_string(), value.add_modifier(Modifier::BOLD)),
            Span::raw("    "),
            Span::styled("Speed: ", label),
            Span::styled(info.speed.to_string(), value),
            Span::raw("    "),
            Span::styled("Best: ", label),
            Span::styled(metrics.high_score.to_string(), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), value),
        ]);

        Paragraph::new(vec![Line::from(spans)]).alignment(Alignment::Center)
    }

    fn render_game_over(
        &self,
        snapshot: &Snapshot,
        metrics: &GameMetrics,
        next_caste: Caste,
    ) -> Paragraph<'_> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);
        let mut text = vec![
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", label),
                Span::styled(
                    snapshot.info.score.to_string(),
                    value.add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("Games: ", label),
                Span::styled(metrics.games_played.to_string(), value),
                Span::raw("   "),
                Span::styled("Longest: ", label),
                Span::styled(metrics.longest_snake.to_string(), value),
            ]),
            Line::from(""),
        ];

        for (i, caste) in Caste::ALL.iter().enumerate() {
            let style = if *caste == next_caste {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            text.push(Line::from(Span::styled(
                format!("{} {}", i + 1, caste.label()),
                style,
            )));
        }

        text.push(Line::from(""));
        text.push(Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
            Span::styled(" to start or ", Style::default().fg(Color::Gray)),
            Span::styled("Q", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            Span::styled(" to quit", Style::default().fg(Color::Gray)),
        ]));

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("1-4", Style::default().fg(Color::Cyan)),
            Span::raw(" caste | "),
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

/// A `width` x `height` rectangle centred in `area`, clipped to fit
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
