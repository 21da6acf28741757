use crate::canvas::{Canvas, Rgba};

/// Fully saturated color for a hue in [0, 1)
pub fn hue_color(hue: f32) -> Rgba {
    let h_prime = (hue.rem_euclid(1.0)) * 6.0;
    let x = 1.0 - ((h_prime % 2.0) - 1.0).abs();

    let (r, g, b) = match h_prime as i32 {
        0 => (1.0, x, 0.0),
        1 => (x, 1.0, 0.0),
        2 => (0.0, 1.0, x),
        3 => (0.0, x, 1.0),
        4 => (x, 0.0, 1.0),
        _ => (1.0, 0.0, x),
    };

    let channel = |v: f32| (v * 255.0).round() as u8;
    Rgba::opaque(channel(r), channel(g), channel(b))
}

pub fn center(canvas: &Canvas) -> (i32, i32) {
    let (w, h) = canvas.dimensions();
    (w as i32 / 2, h as i32 / 2)
}
