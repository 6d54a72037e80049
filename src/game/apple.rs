use std::collections::HashSet;

use log::{error, warn};
use rand::{Rng, seq::IteratorRandom};

use super::{
    error::GameError,
    grid::{Cell, GridModel},
    snake::OccupiesCells,
};

/// The target cell the snake is chasing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Apple(pub Cell);

impl Apple {
    pub fn cell(&self) -> Cell {
        self.0
    }
}

impl OccupiesCells for Apple {
    fn occupied_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        std::iter::once(self.0)
    }
}

/// Picks apple cells that avoid an occupied set
#[derive(Debug, Clone)]
pub struct ApplePlacer {
    grid: GridModel,
    max_attempts: u32,
}

impl ApplePlacer {
    pub fn new(grid: GridModel, max_attempts: u32) -> Self {
        Self { grid, max_attempts }
    }

    /// Sample uniformly over the grid until a cell outside `occupied` turns up.
    ///
    /// After `max_attempts` rejected samples the free cells are enumerated and
    /// one is chosen uniformly, so the call always terminates. Fails with
    /// [`GameError::BoardFull`] only when no free cell exists.
    pub fn place<R: Rng + ?Sized>(
        &self,
        occupied: &HashSet<Cell>,
        rng: &mut R,
    ) -> Result<Apple, GameError> {
        let cells = self.grid.cell_count();
        debug_assert!(
            occupied.len() <= cells,
            "occupied set ({}) larger than the grid ({})",
            occupied.len(),
            cells
        );

        if occupied.len() < cells {
            for _ in 0..self.max_attempts {
                let cell = Cell::new(
                    rng.gen_range(0..self.grid.width()),
                    rng.gen_range(0..self.grid.height()),
                );
                if !occupied.contains(&cell) {
                    return Ok(Apple(cell));
                }
            }

            warn!(
                "no free cell after {} samples, scanning {} free cells",
                self.max_attempts,
                cells.saturating_sub(occupied.len())
            );
            if let Some(cell) = self
                .grid
                .cells()
                .filter(|cell| !occupied.contains(cell))
                .choose(rng)
            {
                return Ok(Apple(cell));
            }
        }

        error!("board full: {} of {} cells occupied", occupied.len(), cells);
        Err(GameError::BoardFull {
            occupied: occupied.len(),
            cells,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_place_on_empty_board() {
        let placer = ApplePlacer::new(GridModel::new(8, 6), 100);
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..50 {
            let apple = placer.place(&HashSet::new(), &mut rng).unwrap();
            assert!(apple.cell().col < 8);
            assert!(apple.cell().row < 6);
        }
    }

    #[test]
    fn test_last_free_cell_found_by_scan() {
        let grid = GridModel::new(5, 5);
        let free = Cell::new(3, 4);
        let occupied: HashSet<Cell> = grid.cells().filter(|c| *c != free).collect();

        // Zero random attempts forces the enumeration path
        let placer = ApplePlacer::new(grid, 0);
        let mut rng = StdRng::seed_from_u64(11);
        assert_eq!(placer.place(&occupied, &mut rng).unwrap(), Apple(free));
    }

    #[test]
    fn test_full_board_is_reported() {
        let grid = GridModel::new(3, 2);
        let occupied: HashSet<Cell> = grid.cells().collect();
        let placer = ApplePlacer::new(grid, 1000);
        let mut rng = StdRng::seed_from_u64(5);

        match placer.place(&occupied, &mut rng) {
            Err(GameError::BoardFull { occupied, cells }) => {
                assert_eq!(occupied, 6);
                assert_eq!(cells, 6);
            }
            other => panic!("expected BoardFull, got {:?}", other),
        }
    }

    #[test]
    fn test_apple_occupies_its_cell() {
        let apple = Apple(Cell::new(2, 3));
        assert_eq!(apple.occupied_cells().collect::<Vec<_>>(), vec![Cell::new(2, 3)]);
    }

    proptest! {
        #[test]
        fn prop_apple_never_on_occupied_cell(
            width in 1u32..12,
            height in 1u32..12,
            seed in any::<u64>(),
            mask in proptest::collection::vec(any::<bool>(), 144),
            attempts in 0u32..64,
        ) {
            let grid = GridModel::new(width, height);
            let mut occupied: HashSet<Cell> = grid
                .cells()
                .zip(mask.iter())
                .filter_map(|(cell, taken)| taken.then_some(cell))
                .collect();
            // Keep at least one cell free
            occupied.remove(&Cell::new(0, 0));

            let placer = ApplePlacer::new(grid, attempts);
            let mut rng = StdRng::seed_from_u64(seed);
            let apple = placer.place(&occupied, &mut rng).unwrap();
            prop_assert!(grid.contains(apple.cell()));
            prop_assert!(!occupied.contains(&apple.cell()));
        }
    }
}
