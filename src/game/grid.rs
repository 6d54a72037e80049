use super::action::Direction;

/// A cell on the game grid, addressed by column and row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub col: u32,
    pub row: u32,
}

impl Cell {
    pub fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }
}

/// Dimensions of the toroidal playing field, in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridModel {
    width: u32,
    height: u32,
}

impl GridModel {
    /// Both dimensions must be at least one cell.
    pub fn new(width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "grid must have at least one cell");
        Self { width, height }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.col < self.width && cell.row < self.height
    }

    /// The cell the snake spawns and respawns on
    pub fn center(&self) -> Cell {
        Cell::new(self.width / 2, self.height / 2)
    }

    /// One step from `cell` in `direction`, wrapping around every edge.
    ///
    /// This is the only place the wrap-around topology is defined.
    pub fn step(&self, cell: Cell, direction: Direction) -> Cell {
        let (dcol, drow) = direction.delta();
        Cell {
            col: wrap(cell.col, dcol, self.width),
            row: wrap(cell.row, drow, self.height),
        }
    }

    /// Top-left pixel of the square a cell is drawn in
    pub fn pixel_origin(&self, cell: Cell, cell_size: u32) -> (u32, u32) {
        (cell.col * cell_size, cell.row * cell_size)
    }

    /// Every cell of the grid, row by row
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).flat_map(move |row| (0..self.width).map(move |col| Cell::new(col, row)))
    }
}

fn wrap(value: u32, delta: i32, size: u32) -> u32 {
    (i64::from(value) + i64::from(delta)).rem_euclid(i64::from(size)) as u32
}
