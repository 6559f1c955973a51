pub mod config;
pub mod error;
pub mod game;

pub use config::{WellConfig, BOARD_H, BOARD_W, CELL_W, POLL_MS, SIDEBAR_W};
pub use error::ConfigError;
pub use game::{new_session, Cell, Game, Intent, Rgb, ShapeKind, Snapshot};
