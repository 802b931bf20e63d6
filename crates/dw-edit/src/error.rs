//! Error types for the editing engine.

use dw_core::DwError;
use thiserror::Error;

use crate::tool::ToolKind;

/// Result type for editing operations.
pub type EditResult<T> = Result<T, EditError>;

/// Errors raised while editing a world.
#[derive(Debug, Error)]
pub enum EditError {
    /// A world-level contract violation.
    #[error(transparent)]
    World(#[from] DwError),

    /// `start` was called while another gesture was still open.
    #[error("a {0} gesture is already in progress")]
    GestureInProgress(ToolKind),

    /// The dragged rectangle exceeds the configured limit.
    #[error("gesture covers {cells} cells, limit is {limit}")]
    GestureTooLarge {
        /// Cells covered by the gesture.
        cells: u64,
        /// Configured maximum.
        limit: u64,
    },
}
