pub mod canvas;
pub mod cli;
pub mod config;
pub mod core;
pub mod driver;
pub mod errors;
pub mod scenes;
pub mod traits;

pub use crate::core::{
    element, Animator, Element, Frame, Millis, PlayOptions, PlaybackState, Scene, SceneId,
    TickOutcome,
};
pub use errors::{AnimatorError, Result};
