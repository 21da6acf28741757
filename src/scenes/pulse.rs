use crate::canvas::{Canvas, Rgba};
use crate::core::{Millis, Scene};

use super::common::{center, hue_color};

/// Circle growing from the center while its hue drifts
pub fn create_pulse_scene(name: &str, duration: Millis) -> Scene<Canvas> {
    let mut scene: Scene<Canvas> = Scene::named(name, duration);

    scene.add_element(|frame| {
        frame.surface_mut().clear(Rgba::BLACK);
        Ok(())
    });
    scene.add_element(|frame| {
        let progress = frame.progress();
        let canvas = frame.surface_mut();
        let (cx, cy) = center(canvas);
        let (w, h) = canvas.dimensions();
        let max_radius = w.min(h) / 2;

        let radius = 1 + (progress * max_radius as f32) as u32;
        canvas.fill_circle(cx, cy, radius, hue_color(progress * 0.5));
        Ok(())
    });

    scene
}
