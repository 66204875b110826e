//! Error type for the few helpers that can fail with more than an absent result.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}.")]
    Image(#[from] image::ImageError),

    /// A cell type was dequeued before being registered with the table view.
    /// Callers usually treat this as a programming error.
    #[error("No cell registered for '{identifier}'. Register the cell type with the table view first.")]
    CellNotRegistered { identifier: String },
}

/// Convenience alias for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
