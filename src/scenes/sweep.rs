use crate::canvas::{Canvas, Rgba};
use crate::core::{Millis, Scene};

use super::common::hue_color;

/// Vertical scan line crossing the canvas, leaving a trail behind
pub fn create_sweep_scene(name: &str, duration: Millis) -> Scene<Canvas> {
    let mut scene: Scene<Canvas> = Scene::named(name, duration);

    scene.add_element(|frame| {
        if frame.is_first_frame() {
            frame.surface_mut().clear(Rgba::BLACK);
        }
        Ok(())
    });
    scene.add_element(|frame| {
        let progress = frame.progress();
        let pass = frame.pass();
        let canvas = frame.surface_mut();
        let (w, h) = canvas.dimensions();

        let x = (progress * w.saturating_sub(1) as f32) as i32;
        canvas.line((x, 0), (x, h as i32 - 1), hue_color(0.15 * pass as f32 + 0.5));
        Ok(())
    });

    scene
}
