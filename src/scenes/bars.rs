use crate::canvas::{Canvas, Rgba};
use crate::core::{Millis, Scene};

use super::common::hue_color;

const BAR_COUNT: u32 = 8;

/// Equalizer-style bars rising at staggered rates
pub fn create_bars_scene(name: &str, duration: Millis) -> Scene<Canvas> {
    let mut scene: Scene<Canvas> = Scene::named(name, duration);

    scene.add_element(|frame| {
        let progress = frame.progress();
        let canvas = frame.surface_mut();
        let (w, h) = canvas.dimensions();
        let bar_width = (w / BAR_COUNT).max(1);

        canvas.clear(Rgba::BLACK);
        for bar in 0..BAR_COUNT {
            // each bar peaks at a different point of the scene
            let phase = (progress * (1.0 + bar as f32 * 0.35)).fract();
            let height = ((phase * h as f32) as u32).max(1);
            let x = (bar * bar_width) as i32;
            let y = (h - height) as i32;

            let color = hue_color(bar as f32 / BAR_COUNT as f32);
            canvas.fill_rect(x, y, bar_width.saturating_sub(1).max(1), height, color);
        }
        Ok(())
    });

    scene
}
