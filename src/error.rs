use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("board has {len} cells, expected {cols}x{rows}")]
    LengthMismatch { len: usize, cols: usize, rows: usize },
    #[error("unknown brush `{0}`")]
    UnknownBrush(String),
}
