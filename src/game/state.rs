use std::time::Duration;

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::ConfigError;
use crate::game::{pick_random, Board, Cell, Piece, ShapeKind};
use crate::WellConfig;

pub const POINTS_PER_ROW: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
    HardDrop,
}

/// Read-only view of a session, detached from its internals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub grid: Vec<Vec<Cell>>,
    pub score: u64,
    pub lines_cleared: u64,
    pub game_over: bool,
    pub next_kind: ShapeKind,
    pub next_matrix: Vec<Vec<bool>>,
}

pub struct Game<R: Rng = StdRng> {
    config: WellConfig,
    pub board: Board,
    pub current: Piece,
    pub next: Piece,
    pub score: u64,
    pub lines_cleared: u64,
    pub game_over: bool,
    fall_timer: Duration,
    rng: R,
}

/// Start a session seeded from `seed`, or from OS entropy when absent.
pub fn new_session(config: WellConfig, seed: Option<u64>) -> Result<Game, ConfigError> {
    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    Game::with_rng(config, rng)
}

impl<R: Rng> Game<R> {
    pub fn with_rng(config: WellConfig, mut rng: R) -> Result<Self, ConfigError> {
        let config = config.validate()?;
        let current = spawn_piece(&config, &mut rng);
        let next = spawn_piece(&config, &mut rng);
        debug!(
            "new session {}x{}, first {:?}, next {:?}",
            config.columns, config.rows, current.kind, next.kind
        );
        Ok(Self {
            config,
            board: Board::new(config.columns, config.rows),
            current,
            next,
            score: 0,
            lines_cleared: 0,
            game_over: false,
            fall_timer: Duration::ZERO,
            rng,
        })
    }

    pub fn config(&self) -> &WellConfig {
        &self.config
    }

    pub fn fall_timer(&self) -> Duration {
        self.fall_timer
    }

    /// Accumulate elapsed time and apply at most one gravity step.
    pub fn tick(&mut self, elapsed: Duration) {
        if self.game_over {
            return;
        }
        self.fall_timer += elapsed;
        if self.fall_timer >= self.config.fall_interval {
            self.fall_timer = Duration::ZERO;
            self.tick_gravity();
        }
    }

    pub fn tick_gravity(&mut self) {
        if self.game_over {
            return;
        }
        if !self.move_current(0, 1) {
            self.lock_piece();
        }
    }

    /// Returns whether the intent changed the falling piece.
    pub fn apply_intent(&mut self, intent: Intent) -> bool {
        if self.game_over {
            return false;
        }
        let applied = match intent {
            Intent::MoveLeft => self.move_current(-1, 0),
            Intent::MoveRight => self.move_current(1, 0),
            Intent::SoftDrop => self.move_current(0, 1),
            Intent::Rotate => self.rotate_current(),
            Intent::HardDrop => {
                self.hard_drop();
                true
            }
        };
        if !applied {
            trace!("rejected {:?} at ({}, {})", intent, self.current.x, self.current.y);
        }
        applied
    }

    pub fn move_current(&mut self, dx: i32, dy: i32) -> bool {
        if self.game_over {
            return false;
        }
        let next = self.current.shifted(dx, dy);
        if self.board.is_valid(&next) {
            self.current = next;
            true
        } else {
            false
        }
    }

    pub fn rotate_current(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let next = self.current.rotated();
        if self.board.is_valid(&next) {
            self.current = next;
            true
        } else {
            false
        }
    }

    pub fn hard_drop(&mut self) {
        if self.game_over {
            return;
        }
        while self.move_current(0, 1) {}
        self.lock_piece();
    }

    /// Merge the falling piece into the board, promote the lookahead, clear
    /// rows and score them, then check for overflow.
    pub fn lock_piece(&mut self) {
        self.board.lock(&self.current);
        debug!(
            "locked {:?} at ({}, {})",
            self.current.kind, self.current.x, self.current.y
        );
        let fresh = spawn_piece(&self.config, &mut self.rng);
        self.current = std::mem::replace(&mut self.next, fresh);
        self.fall_timer = Duration::ZERO;

        let cleared = self.board.clear_full_rows() as u64;
        self.lines_cleared += cleared;
        self.score += cleared * POINTS_PER_ROW;

        if self.board.is_loss() {
            debug!("game over with score {}", self.score);
            self.game_over = true;
        }
    }

    /// Locked cells plus the falling piece's visible cells.
    pub fn snapshot(&self) -> Snapshot {
        let mut grid = self.board.grid();
        if !self.game_over {
            for (x, y) in self.current.occupied_cells() {
                grid.paint(x, y, self.current.color);
            }
        }
        Snapshot {
            grid: grid.rows(),
            score: self.score,
            lines_cleared: self.lines_cleared,
            game_over: self.game_over,
            next_kind: self.next.kind,
            next_matrix: self.next.matrix.clone(),
        }
    }
}

fn spawn_piece<R: Rng + ?Sized>(config: &WellConfig, rng: &mut R) -> Piece {
    Piece::new(pick_random(rng), config.spawn_x(), 0)
}
