use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

pub const SHAPE_KINDS: [ShapeKind; 7] = [
    ShapeKind::I,
    ShapeKind::J,
    ShapeKind::L,
    ShapeKind::O,
    ShapeKind::S,
    ShapeKind::T,
    ShapeKind::Z,
];

const I: &[&[u8]] = &[&[1, 1, 1, 1]];
const J: &[&[u8]] = &[&[1, 0, 0], &[1, 1, 1]];
const L: &[&[u8]] = &[&[0, 0, 1], &[1, 1, 1]];
const O: &[&[u8]] = &[&[1, 1], &[1, 1]];
const S: &[&[u8]] = &[&[0, 1, 1], &[1, 1, 0]];
const T: &[&[u8]] = &[&[0, 1, 0], &[1, 1, 1]];
const Z: &[&[u8]] = &[&[1, 1, 0], &[0, 1, 1]];

impl ShapeKind {
    pub fn from_index(idx: usize) -> Option<Self> {
        SHAPE_KINDS.get(idx).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Spawn orientation as rows of 0/1 flags, top row first.
    pub fn rows(self) -> &'static [&'static [u8]] {
        match self {
            ShapeKind::I => I,
            ShapeKind::J => J,
            ShapeKind::L => L,
            ShapeKind::O => O,
            ShapeKind::S => S,
            ShapeKind::T => T,
            ShapeKind::Z => Z,
        }
    }

    pub fn matrix(self) -> Vec<Vec<bool>> {
        self.rows()
            .iter()
            .map(|row| row.iter().map(|&v| v != 0).collect())
            .collect()
    }

    pub fn color(self) -> Rgb {
        match self {
            ShapeKind::I => Rgb(0, 255, 255),
            ShapeKind::J => Rgb(0, 0, 255),
            ShapeKind::L => Rgb(255, 165, 0),
            ShapeKind::O => Rgb(255, 255, 0),
            ShapeKind::S => Rgb(0, 255, 0),
            ShapeKind::T => Rgb(128, 0, 128),
            ShapeKind::Z => Rgb(255, 0, 0),
        }
    }
}

/// Uniform draw over the catalog. The only source of randomness in the core.
pub fn pick_random<R: Rng + ?Sized>(rng: &mut R) -> ShapeKind {
    SHAPE_KINDS[rng.gen_range(0..SHAPE_KINDS.len())]
}
