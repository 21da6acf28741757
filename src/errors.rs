//! Error Types
//!
//! [`AnimatorError`] covers every failure the library reports:
//! - invalid configuration (zero tick period, bad config values)
//! - playback misuse, only when strict mode is enabled
//! - failures raised by scene elements and event handlers
//! - config file I/O and parsing
//!
//! Element and handler failures are not caught. They abort the current tick
//! and come back unchanged as [`AnimatorError::Callback`].

use thiserror::Error;

use crate::core::{PlaybackState, SceneId};

#[derive(Error, Debug)]
pub enum AnimatorError {
    /// A value that can never produce a working animator.
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Operation rejected in strict mode (e.g. `play` while playing).
    #[error("Cannot {operation} while {state}")]
    State {
        operation: &'static str,
        state: PlaybackState,
    },

    /// Scene id not registered with this animator.
    #[error("Unknown scene: {0}")]
    UnknownScene(SceneId),

    /// Failure raised by a scene element or event handler.
    #[error(transparent)]
    Callback(#[from] anyhow::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result alias used across the library
pub type Result<T> = std::result::Result<T, AnimatorError>;
