pub mod board;
pub mod piece;
pub mod shapes;
pub mod state;

pub use board::{Board, Cell, Grid};
pub use piece::Piece;
pub use shapes::{pick_random, Rgb, ShapeKind, SHAPE_KINDS};
pub use state::{new_session, Game, Intent, Snapshot, POINTS_PER_ROW};
