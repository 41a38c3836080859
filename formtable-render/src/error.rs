//! Error types for rendering and mounting

use thiserror::Error;

/// Result type for render operations
pub type Result<T> = std::result::Result<T, RenderError>;

/// Errors raised while mounting the rendered table into a host document.
///
/// Rendering itself cannot fail; only locating and writing the mount point can.
#[derive(Debug, Error)]
pub enum RenderError {
    /// No element carries the requested id
    #[error("mount point not found: no element with id '{id}'")]
    MountPointNotFound { id: String },

    /// The element exists but cannot hold content
    #[error("invalid mount point '{id}': {reason}")]
    InvalidMountPoint { id: String, reason: String },
}
