use std::collections::VecDeque;

use log::trace;
use rand::Rng;

use super::{
    action::Direction,
    grid::{Cell, GridModel},
};

/// Anything that covers cells of the grid
pub trait OccupiesCells {
    fn occupied_cells(&self) -> impl Iterator<Item = Cell> + '_;
}

/// The snake: an ordered body, its heading and how long it wants to be
#[derive(Debug, Clone, PartialEq)]
pub struct SnakeState {
    /// Body cells, with head at the front. Never empty.
    body: VecDeque<Cell>,
    direction: Direction,
    /// Latest accepted steering request since the last move
    pending: Option<Direction>,
    target_length: usize,
    respawn: Cell,
}

impl SnakeState {
    /// A one-cell snake at `start` heading in a random direction.
    /// `start` is also where the snake respawns after every reset.
    pub fn new<R: Rng + ?Sized>(start: Cell, rng: &mut R) -> Self {
        Self::with_direction(start, rng.gen())
    }

    pub fn with_direction(start: Cell, direction: Direction) -> Self {
        Self {
            body: VecDeque::from([start]),
            direction,
            pending: None,
            target_length: 1,
            respawn: start,
        }
    }

    pub fn head(&self) -> Cell {
        *self.body.front().expect("snake body is never empty")
    }

    /// Body cells, head first
    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn target_length(&self) -> usize {
        self.target_length
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending
    }

    pub fn respawn_cell(&self) -> Cell {
        self.respawn
    }

    /// Queue a turn for the next move. A reversal of the current heading is
    /// dropped; otherwise the request replaces any earlier one.
    pub fn request_direction(&mut self, direction: Direction) {
        if self.direction.is_opposite(direction) {
            trace!("ignoring reversal {:?} while heading {:?}", direction, self.direction);
            return;
        }
        self.pending = Some(direction);
    }

    /// Advance one cell, returning the tail cell that was left behind, if any
    pub fn move_snake(&mut self, grid: &GridModel) -> Option<Cell> {
        if let Some(direction) = self.pending.take() {
            self.direction = direction;
        }

        let new_head = grid.step(self.head(), self.direction);
        self.body.push_front(new_head);

        if self.body.len() > self.target_length {
            self.body.pop_back()
        } else {
            None
        }
    }

    /// Lengthen by one cell, starting with the next move
    pub fn grow(&mut self) {
        self.target_length += 1;
    }

    /// True when the head shares a cell with the rest of the body
    pub fn detect_self_collision(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|cell| *cell == head)
    }

    /// Back to a single cell on the respawn cell, heading somewhere random
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.body.clear();
        self.body.push_back(self.respawn);
        self.target_length = 1;
        self.direction = rng.gen();
        self.pending = None;
    }

    #[cfg(test)]
    pub(crate) fn from_body(body: Vec<Cell>, direction: Direction, respawn: Cell) -> Self {
        assert!(!body.is_empty());
        Self {
            target_length: body.len(),
            body: body.into(),
            direction,
            pending: None,
            respawn,
        }
    }
}

impl OccupiesCells for SnakeState {
    fn occupied_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }
}
