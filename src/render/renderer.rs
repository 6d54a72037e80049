use std::collections::HashSet;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{Cell, RoundController, Scene};
use crate::metrics::GameMetrics;

/// What occupies a cell in the drawn frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Head,
    Body,
    Apple,
    Empty,
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, controller: &RoundController, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(1), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(controller, metrics), chunks[0]);
        frame.render_widget(self.render_grid(&controller.scene()), chunks[1]);
        frame.render_widget(self.render_controls(), chunks[2]);
    }

    fn render_grid(&self, scene: &Scene<'_>) -> Paragraph<'static> {
        let body: HashSet<Cell> = scene.body.iter().copied().collect();
        let head = scene.body.front().copied();

        let lines: Vec<Line> = (0..scene.grid.height())
            .map(|row| {
                let spans: Vec<Span> = (0..scene.grid.width())
                    .map(|col| styled(classify(Cell::new(col, row), head, &body, scene.apple)))
                    .collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::Rgb(93, 216, 228)))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, controller: &RoundController, metrics: &GameMetrics) -> Paragraph<'static> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);

        let text = Line::from(vec![
            Span::styled("Length: ", label),
            Span::styled(controller.snake().len().to_string(), value),
            Span::raw("    "),
            Span::styled("Best: ", label),
            Span::styled(metrics.best_length.to_string(), value),
            Span::raw("    "),
            Span::styled("Apples: ", label),
            Span::styled(controller.apples_eaten().to_string(), value),
            Span::raw("    "),
            Span::styled("Round: ", label),
            Span::styled(metrics.rounds_played.to_string(), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ]);

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self) -> Paragraph<'static> {
        let text = Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ]);

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify one cell of a scene
pub fn cell_kind(scene: &Scene<'_>, cell: Cell) -> CellKind {
    let body: HashSet<Cell> = scene.body.iter().copied().collect();
    classify(cell, scene.body.front().copied(), &body, scene.apple)
}

fn classify(cell: Cell, head: Option<Cell>, body: &HashSet<Cell>, apple: Cell) -> CellKind {
    if head == Some(cell) {
        CellKind::Head
    } else if body.contains(&cell) {
        CellKind::Body
    } else if cell == apple {
        CellKind::Apple
    } else {
        CellKind::Empty
    }
}

// Cells are two columns wide so they come out roughly square in a terminal
fn styled(kind: CellKind) -> Span<'static> {
    match kind {
        CellKind::Head => Span::styled(
            "██",
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        ),
        CellKind::Body => Span::styled("██", Style::default().fg(Color::Green)),
        CellKind::Apple => Span::styled(
            "()",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        CellKind::Empty => Span::raw("  "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Action, Apple, ApplePlacer, Direction, GridModel, SnakeState};
    use rand::{SeedableRng, rngs::StdRng};
    use ratatui::{Terminal, backend::TestBackend};

    fn controller() -> RoundController {
        let grid = GridModel::new(8, 4);
        let mut snake = SnakeState::with_direction(Cell::new(2, 1), Direction::Right);
        snake.grow();
        RoundController::with_state(
            grid,
            snake,
            Apple(Cell::new(6, 3)),
            ApplePlacer::new(grid, 32),
            StdRng::seed_from_u64(0),
        )
    }

    #[test]
    fn test_cell_kinds() {
        let mut controller = controller();
        controller.tick(Action::Continue).unwrap();
        let scene = controller.scene();

        assert_eq!(cell_kind(&scene, Cell::new(3, 1)), CellKind::Head);
        assert_eq!(cell_kind(&scene, Cell::new(2, 1)), CellKind::Body);
        assert_eq!(cell_kind(&scene, Cell::new(6, 3)), CellKind::Apple);
        assert_eq!(cell_kind(&scene, Cell::new(0, 0)), CellKind::Empty);
    }

    #[test]
    fn test_vacated_cell_is_drawn_empty() {
        let mut controller = controller();
        controller.tick(Action::Continue).unwrap();
        controller.tick(Action::Continue).unwrap();
        let scene = controller.scene();

        let vacated = scene.vacated.unwrap();
        assert_eq!(vacated, Cell::new(2, 1));
        assert_eq!(cell_kind(&scene, vacated), CellKind::Empty);
    }

    #[test]
    fn test_render_draws_frame() {
        let controller = controller();
        let metrics = GameMetrics::new();
        let renderer = Renderer::new();
        let mut terminal = Terminal::new(TestBackend::new(80, 10)).unwrap();

        terminal
            .draw(|frame| renderer.render(frame, &controller, &metrics))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let content: String = buffer.content.iter().map(|c| c.symbol()).collect();
        assert!(content.contains("Snake"));
        assert!(content.contains("Length"));
        assert!(content.contains("()"));
    }
}
