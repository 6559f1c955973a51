// Well dimensions, timing and terminal presentation constants.
use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::ConfigError;

pub const BOARD_W: usize = 10;
pub const BOARD_H: usize = 20;
pub const FALL_MS: u64 = 500;
pub const CELL_W: usize = 2; // render each block as two characters wide
pub const SIDEBAR_W: u16 = 16;
pub const POLL_MS: u64 = 16;
// Narrowest well the spawn rule can handle: x = columns / 2 - 2 must stay >= 0
// and the 4-wide I piece must fit.
pub const MIN_COLUMNS: usize = 4;
// Keeps coordinates inside i32 and the drawn well inside a u16 terminal rect.
pub const MAX_DIM: usize = 1024;

pub const ENV_ROWS: &str = "BLOCKWELL_ROWS";
pub const ENV_COLUMNS: &str = "BLOCKWELL_COLUMNS";
pub const ENV_FALL_MS: &str = "BLOCKWELL_FALL_MS";
pub const ENV_SEED: &str = "BLOCKWELL_SEED";
pub const ENV_LOG: &str = "BLOCKWELL_LOG";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WellConfig {
    pub rows: usize,
    pub columns: usize,
    pub fall_interval: Duration,
}

impl Default for WellConfig {
    fn default() -> Self {
        Self {
            rows: BOARD_H,
            columns: BOARD_W,
            fall_interval: Duration::from_millis(FALL_MS),
        }
    }
}

impl WellConfig {
    pub fn new(rows: usize, columns: usize) -> Result<Self, ConfigError> {
        Self {
            rows,
            columns,
            ..Self::default()
        }
        .validate()
    }

    /// Defaults overridden by `BLOCKWELL_ROWS`, `BLOCKWELL_COLUMNS` and
    /// `BLOCKWELL_FALL_MS` when set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(rows) = parse_var::<usize, _>(&lookup, ENV_ROWS)? {
            config.rows = rows;
        }
        if let Some(columns) = parse_var::<usize, _>(&lookup, ENV_COLUMNS)? {
            config.columns = columns;
        }
        if let Some(ms) = parse_var::<u64, _>(&lookup, ENV_FALL_MS)? {
            config.fall_interval = Duration::from_millis(ms);
        }
        config.validate()
    }

    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.rows == 0 {
            return Err(ConfigError::ZeroRows);
        }
        if self.columns == 0 {
            return Err(ConfigError::ZeroColumns);
        }
        if self.columns < MIN_COLUMNS {
            return Err(ConfigError::TooNarrow {
                columns: self.columns,
                min: MIN_COLUMNS,
            });
        }
        if self.rows > MAX_DIM || self.columns > MAX_DIM {
            return Err(ConfigError::TooLarge {
                rows: self.rows,
                columns: self.columns,
                max: MAX_DIM,
            });
        }
        if self.fall_interval.is_zero() {
            return Err(ConfigError::ZeroFallInterval);
        }
        Ok(self)
    }

    /// Anchor column for freshly spawned pieces.
    pub fn spawn_x(&self) -> i32 {
        self.columns as i32 / 2 - 2
    }
}

pub fn env_var<T: FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    parse_var(&|key: &str| env::var(key).ok(), key)
}

fn parse_var<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnv { key, value }),
        None => Ok(None),
    }
}
