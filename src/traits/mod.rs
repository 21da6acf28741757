pub mod tick_source;

pub use tick_source::*;
