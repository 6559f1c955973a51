use std::collections::HashMap;

use log::debug;

use crate::game::shapes::Rgb;
use crate::game::Piece;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Filled(Rgb),
}

impl Cell {
    pub fn is_filled(self) -> bool {
        matches!(self, Cell::Filled(_))
    }
}

/// Row-major cell colors for one instant of the well.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<Cell>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    fn idx(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[self.idx(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, value: Cell) {
        let idx = self.idx(x, y);
        self.cells[idx] = value;
    }

    /// Paint a cell given signed well coordinates, ignoring anything outside.
    pub fn paint(&mut self, x: i32, y: i32, color: Rgb) {
        if x >= 0 && y >= 0 {
            let (xu, yu) = (x as usize, y as usize);
            if xu < self.width && yu < self.height {
                self.set(xu, yu, Cell::Filled(color));
            }
        }
    }

    pub fn row(&self, y: usize) -> &[Cell] {
        &self.cells[y * self.width..(y + 1) * self.width]
    }

    pub fn rows(&self) -> Vec<Vec<Cell>> {
        (0..self.height).map(|y| self.row(y).to_vec()).collect()
    }
}

/// The well's durable state: every locked cell keyed by `(x, y)`.
#[derive(Debug, Clone)]
pub struct Board {
    pub width: usize,
    pub height: usize,
    locked: HashMap<(i32, i32), Rgb>,
}

impl Board {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            locked: HashMap::new(),
        }
    }

    pub fn locked(&self) -> &HashMap<(i32, i32), Rgb> {
        &self.locked
    }

    pub fn get(&self, x: i32, y: i32) -> Cell {
        self.locked
            .get(&(x, y))
            .map_or(Cell::Empty, |&color| Cell::Filled(color))
    }

    /// Place a single locked cell. Used to seed boards and by `lock`.
    pub fn set(&mut self, x: i32, y: i32, color: Rgb) {
        self.locked.insert((x, y), color);
    }

    /// Project the locked cells onto a fresh grid.
    pub fn grid(&self) -> Grid {
        let mut grid = Grid::new(self.width, self.height);
        for (&(x, y), &color) in &self.locked {
            grid.paint(x, y, color);
        }
        grid
    }

    /// Column bounds apply at every height; cells above the well (y < 0) are
    /// open space, cells inside must be unlocked.
    pub fn is_valid(&self, piece: &Piece) -> bool {
        piece.occupied_cells().into_iter().all(|(x, y)| {
            if x < 0 || x >= self.width as i32 {
                return false;
            }
            if y < 0 {
                return true;
            }
            y < self.height as i32 && !self.locked.contains_key(&(x, y))
        })
    }

    /// Write every cell of the piece into the locked set. No validity check.
    pub fn lock(&mut self, piece: &Piece) {
        for (x, y) in piece.occupied_cells() {
            self.locked.insert((x, y), piece.color);
        }
    }

    /// Remove every full row and drop the survivors above to close the gaps.
    /// Each survivor falls by the number of cleared rows below it, so
    /// non-adjacent clears compact per gap. Returns the number of rows removed.
    pub fn clear_full_rows(&mut self) -> usize {
        let grid = self.grid();
        let mut cleared: Vec<i32> = Vec::new();
        for y in (0..self.height).rev() {
            if grid.row(y).iter().all(|cell| cell.is_filled()) {
                cleared.push(y as i32);
            }
        }
        if cleared.is_empty() {
            return 0;
        }
        self.locked.retain(|&(_, y), _| !cleared.contains(&y));

        // Move in descending y so no entry lands on one still waiting to move.
        let mut keys: Vec<(i32, i32)> = self.locked.keys().copied().collect();
        keys.sort_by(|a, b| b.1.cmp(&a.1));
        for (x, y) in keys {
            let drop = cleared.iter().filter(|&&row| row > y).count() as i32;
            if drop > 0 {
                if let Some(color) = self.locked.remove(&(x, y)) {
                    self.locked.insert((x, y + drop), color);
                }
            }
        }
        debug!("cleared rows {:?}", cleared);
        cleared.len()
    }

    /// Any locked cell in the top guard row (or above it) ends the game.
    pub fn is_loss(&self) -> bool {
        self.locked.keys().any(|&(_, y)| y < 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::ShapeKind;

    const RED: Rgb = Rgb(255, 0, 0);

    #[test]
    fn grid_projects_locked_cells() {
        let mut board = Board::new(4, 3);
        board.set(1, 2, RED);
        board.set(-1, -1, RED);
        let grid = board.grid();
        assert_eq!(grid.get(1, 2), Cell::Filled(RED));
        assert_eq!(grid.cells.iter().filter(|c| c.is_filled()).count(), 1);
    }

    #[test]
    fn negative_rows_are_open_space_inside_columns() {
        let board = Board::new(10, 20);
        let mut piece = Piece::new(ShapeKind::I, 3, 0);
        piece.rotate();
        piece.y = -2;
        assert!(board.is_valid(&piece));
        piece.x = -1;
        assert!(!board.is_valid(&piece));
        piece.x = 10;
        assert!(!board.is_valid(&piece));
    }

    #[test]
    fn floor_blocks_piece() {
        let board = Board::new(10, 20);
        let piece = Piece::new(ShapeKind::O, 4, 18);
        assert!(board.is_valid(&piece));
        assert!(!board.is_valid(&piece.shifted(0, 1)));
    }

    #[test]
    fn non_adjacent_full_rows_compact_correctly() {
        let mut board = Board::new(3, 5);
        for x in 0..3 {
            board.set(x, 4, RED);
            board.set(x, 2, RED);
        }
        board.set(0, 3, RED);
        board.set(1, 1, RED);
        assert_eq!(board.clear_full_rows(), 2);
        let mut cells: Vec<_> = board.locked().keys().copied().collect();
        cells.sort();
        assert_eq!(cells, vec![(0, 4), (1, 3)]);
    }
}
