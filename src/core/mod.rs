pub mod animator;
pub mod frame;
pub mod scene;
pub mod ticker;

pub use animator::{Animator, PlayOptions, PlaybackState, TickOutcome};
pub use frame::Frame;
pub use scene::{element, Element, Scene, SceneHandler, SceneId};
pub use ticker::{Millis, Ticker, DEFAULT_TICK_PERIOD};
