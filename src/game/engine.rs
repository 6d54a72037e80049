use std::collections::{HashSet, VecDeque};

use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};

use super::{
    action::{Action, Direction},
    apple::{Apple, ApplePlacer},
    config::GameConfig,
    error::GameError,
    grid::{Cell, GridModel},
    snake::{OccupiesCells, SnakeState},
};

/// What happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// Plain move
    Moved,
    /// Head landed on the apple; the snake grows on its next move
    AteApple,
    /// Head hit the body; the snake was reset
    Collided,
}

/// Result of a game tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    pub event: TickEvent,
    /// Tail cell left behind by the move, for incremental redraw
    pub vacated: Option<Cell>,
}

/// Everything a renderer needs after a tick
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub grid: GridModel,
    /// Head first
    pub body: &'a VecDeque<Cell>,
    pub apple: Cell,
    pub vacated: Option<Cell>,
}

/// Drives one round of the game per tick and owns all game state
pub struct RoundController {
    grid: GridModel,
    snake: SnakeState,
    apple: Apple,
    placer: ApplePlacer,
    rng: StdRng,
    last_vacated: Option<Cell>,
    ticks: u64,
    apples_eaten: u64,
    resets: u64,
}

impl RoundController {
    /// Start a session: the snake sits on the grid's center cell with a random
    /// heading and the apple is placed on a free cell.
    pub fn new(config: &GameConfig) -> Result<Self, GameError> {
        let grid = config.grid()?;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let snake = SnakeState::new(grid.center(), &mut rng);
        let placer = ApplePlacer::new(grid, config.max_placement_attempts);
        let apple = placer.place(&occupied_by(&snake), &mut rng)?;

        info!(
            "new round on {}x{} grid, snake at {:?} heading {:?}, apple at {:?}",
            grid.width(),
            grid.height(),
            snake.head(),
            snake.direction(),
            apple.cell()
        );

        Ok(Self::with_state(grid, snake, apple, placer, rng))
    }

    /// Assemble a controller from explicit parts
    pub fn with_state(
        grid: GridModel,
        snake: SnakeState,
        apple: Apple,
        placer: ApplePlacer,
        rng: StdRng,
    ) -> Self {
        Self {
            grid,
            snake,
            apple,
            placer,
            rng,
            last_vacated: None,
            ticks: 0,
            apples_eaten: 0,
            resets: 0,
        }
    }

    /// Forward a steering request to the snake
    pub fn request_direction(&mut self, direction: Direction) {
        self.snake.request_direction(direction);
    }

    /// Execute one tick: steer, move, then either eat or check for a collision
    pub fn tick(&mut self, action: Action) -> Result<TickOutcome, GameError> {
        if let Action::Move(direction) = action {
            self.snake.request_direction(direction);
        }

        let vacated = self.snake.move_snake(&self.grid);
        self.last_vacated = vacated;
        self.ticks += 1;

        let event = if self.snake.head() == self.apple.cell() {
            self.snake.grow();
            self.apples_eaten += 1;

            let mut occupied = occupied_by(&self.snake);
            occupied.extend(vacated);
            self.apple = self.placer.place(&occupied, &mut self.rng)?;
            debug!(
                "apple eaten at {:?}, target length {}, next apple at {:?}",
                self.snake.head(),
                self.snake.target_length(),
                self.apple.cell()
            );
            TickEvent::AteApple
        } else if self.snake.detect_self_collision() {
            info!(
                "self-collision at {:?} with length {}, resetting",
                self.snake.head(),
                self.snake.len()
            );
            self.snake.reset(&mut self.rng);
            self.resets += 1;
            self.apple = self.placer.place(&occupied_by(&self.snake), &mut self.rng)?;
            TickEvent::Collided
        } else {
            TickEvent::Moved
        };

        Ok(TickOutcome { event, vacated })
    }

    pub fn grid(&self) -> GridModel {
        self.grid
    }

    pub fn snake(&self) -> &SnakeState {
        &self.snake
    }

    pub fn apple(&self) -> Apple {
        self.apple
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn apples_eaten(&self) -> u64 {
        self.apples_eaten
    }

    pub fn resets(&self) -> u64 {
        self.resets
    }

    /// Apples collected since the last reset
    pub fn score(&self) -> usize {
        self.snake.target_length() - 1
    }

    pub fn scene(&self) -> Scene<'_> {
        Scene {
            grid: self.grid,
            body: self.snake.body(),
            apple: self.apple.cell(),
            vacated: self.last_vacated,
        }
    }
}

fn occupied_by(entity: &impl OccupiesCells) -> HashSet<Cell> {
    entity.occupied_cells().collect()
}
