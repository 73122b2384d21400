use thiserror::Error;

/// Raised by the one list operation that validates its index instead of
/// ignoring it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CanvasError {
    #[error("index {index} is out of range for a canvas of {len} shapes")]
    IndexOutOfRange { index: usize, len: usize },
}
