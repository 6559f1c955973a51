#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("well must have at least one row")]
    ZeroRows,
    #[error("well must have at least one column")]
    ZeroColumns,
    #[error("well is {columns} columns wide, need at least {min}")]
    TooNarrow { columns: usize, min: usize },
    #[error("well is {columns}x{rows}, at most {max} per side")]
    TooLarge { rows: usize, columns: usize, max: usize },
    #[error("fall interval must be non-zero")]
    ZeroFallInterval,
    #[error("invalid value for {key}: {value:?}")]
    InvalidEnv { key: &'static str, value: String },
}
