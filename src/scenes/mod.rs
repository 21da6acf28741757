//! Bundled demo scenes drawing on a [`Canvas`]

mod bars;
mod common;
mod pulse;
mod sweep;

use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;
use crate::core::{Millis, Scene};

pub use bars::create_bars_scene;
pub use common::hue_color;
pub use pulse::create_pulse_scene;
pub use sweep::create_sweep_scene;

/// Which bundled scene to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pattern {
    Pulse,
    Sweep,
    Bars,
}

/// Build a bundled scene that logs its own start and completion
pub fn build_scene(pattern: Pattern, name: &str, duration: Millis) -> Scene<Canvas> {
    let mut scene = match pattern {
        Pattern::Pulse => create_pulse_scene(name, duration),
        Pattern::Sweep => create_sweep_scene(name, duration),
        Pattern::Bars => create_bars_scene(name, duration),
    };

    scene
        .on_start(|scene| {
            log::info!("playing {} ({}ms)", scene.name(), scene.duration());
            Ok(())
        })
        .on_complete(|scene| {
            log::info!("finished {}", scene.name());
            Ok(())
        });
    scene
}
