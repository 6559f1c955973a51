use crate::game::shapes::{Rgb, ShapeKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub kind: ShapeKind,
    pub x: i32,
    pub y: i32,
    pub matrix: Vec<Vec<bool>>,
    pub color: Rgb,
}

impl Piece {
    pub fn new(kind: ShapeKind, x: i32, y: i32) -> Self {
        Self {
            kind,
            x,
            y,
            matrix: kind.matrix(),
            color: kind.color(),
        }
    }

    /// Rotate the matrix a quarter turn clockwise: reverse the row order, then
    /// transpose. No bounds checking.
    pub fn rotate(&mut self) {
        let rows = self.matrix.len();
        let cols = self.matrix.first().map_or(0, Vec::len);
        let rotated: Vec<Vec<bool>> = (0..cols)
            .map(|i| (0..rows).map(|j| self.matrix[rows - 1 - j][i]).collect())
            .collect();
        self.matrix = rotated;
    }

    pub fn rotated(&self) -> Self {
        let mut next = self.clone();
        next.rotate();
        next
    }

    pub fn shifted(&self, dx: i32, dy: i32) -> Self {
        let mut next = self.clone();
        next.x += dx;
        next.y += dy;
        next
    }

    /// Absolute well coordinates covered by the piece, row by row.
    pub fn occupied_cells(&self) -> Vec<(i32, i32)> {
        self.matrix
            .iter()
            .enumerate()
            .flat_map(|(dy, row)| {
                row.iter()
                    .enumerate()
                    .filter(|&(_, &filled)| filled)
                    .map(move |(dx, _)| (self.x + dx as i32, self.y + dy as i32))
            })
            .collect()
    }
}
