// canvas.rs - In-memory RGBA surface the bundled scenes draw on

/// RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Perceived brightness [0, 1], weighted by alpha
    pub fn luma(&self) -> f32 {
        let l = 0.299 * self.r as f32 + 0.587 * self.g as f32 + 0.114 * self.b as f32;
        (l / 255.0) * (self.a as f32 / 255.0)
    }
}

/// Fixed-size pixel grid, drawn on in place
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    pixels: Vec<Rgba>,
    width: u32,
    height: u32,
}

impl Canvas {
    /// Create a fully transparent canvas
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![Rgba::TRANSPARENT; width as usize * height as usize],
            width,
            height,
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Read a pixel, `None` outside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        self.index(x, y).map(|idx| self.pixels[idx])
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    /// Fill the whole canvas
    pub fn clear(&mut self, color: Rgba) {
        self.pixels.fill(color);
    }

    /// Write a pixel, silently clipped
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        if x < 0 || y < 0 {
            return;
        }
        if let Some(idx) = self.index(x as u32, y as u32) {
            self.pixels[idx] = color;
        }
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgba) {
        for dy in 0..height as i32 {
            for dx in 0..width as i32 {
                self.set_pixel(x + dx, y + dy, color);
            }
        }
    }

    pub fn fill_circle(&mut self, cx: i32, cy: i32, radius: u32, color: Rgba) {
        let r = radius as i32;
        let r_sq = r * r;

        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy <= r_sq {
                    self.set_pixel(cx + dx, cy + dy, color);
                }
            }
        }
    }

    /// Bresenham line, both endpoints inclusive
    pub fn line(&mut self, (x1, y1): (i32, i32), (x2, y2): (i32, i32), color: Rgba) {
        let (mut x, mut y) = (x1, y1);

        let dx = (x2 - x).abs();
        let dy = -(y2 - y).abs();
        let sx = if x < x2 { 1 } else { -1 };
        let sy = if y < y2 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.set_pixel(x, y, color);

            if x == x2 && y == y2 {
                break;
            }

            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Number of pixels that are not fully transparent
    pub fn coverage(&self) -> usize {
        self.pixels.iter().filter(|p| p.a > 0).count()
    }

    /// Render as text, one char per pixel, denser glyphs for brighter pixels
    pub fn to_ascii(&self) -> String {
        const RAMP: &[u8] = b" .:-=+*#%@";

        self.pixels
            .chunks(self.width.max(1) as usize)
            .map(|row| {
                row.iter()
                    .map(|p| {
                        let level = (p.luma() * (RAMP.len() - 1) as f32).round() as usize;
                        RAMP[level.min(RAMP.len() - 1)] as char
                    })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba = Rgba::opaque(255, 0, 0);

    #[test]
    fn canvas_creation() {
        let canvas = Canvas::new(10, 8);
        assert_eq!(canvas.dimensions(), (10, 8));
        assert_eq!(canvas.pixels().len(), 80);
        assert_eq!(canvas.coverage(), 0);
    }

    #[test]
    fn canvas_clear() {
        let mut canvas = Canvas::new(10, 10);
        canvas.clear(RED);

        assert_eq!(canvas.pixel(0, 0), Some(RED));
        assert_eq!(canvas.pixel(9, 9), Some(RED));
        assert_eq!(canvas.coverage(), 100);
    }

    #[test]
    fn canvas_bounds_checking() {
        let mut canvas = Canvas::new(10, 10);
        canvas.set_pixel(100, 100, RED);
        canvas.set_pixel(-1, 3, RED);

        assert_eq!(canvas.coverage(), 0);
        assert_eq!(canvas.pixel(10, 0), None);
    }

    #[test]
    fn canvas_rect() {
        let mut canvas = Canvas::new(10, 10);
        canvas.fill_rect(2, 2, 4, 3, RED);

        assert_eq!(canvas.pixel(2, 2), Some(RED));
        assert_eq!(canvas.pixel(5, 4), Some(RED));
        assert_eq!(canvas.pixel(6, 4), Some(Rgba::TRANSPARENT));
        assert_eq!(canvas.coverage(), 12);
    }

    #[test]
    fn canvas_filled_circle() {
        let mut canvas = Canvas::new(20, 20);
        canvas.fill_circle(10, 10, 3, RED);

        assert_eq!(canvas.pixel(10, 10), Some(RED));
        assert_eq!(canvas.pixel(10, 7), Some(RED));
        assert_eq!(canvas.pixel(10, 6), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn canvas_line() {
        let mut canvas = Canvas::new(30, 30);
        canvas.line((5, 5), (15, 15), RED);

        assert_eq!(canvas.pixel(5, 5), Some(RED));
        assert_eq!(canvas.pixel(10, 10), Some(RED));
        assert_eq!(canvas.pixel(15, 15), Some(RED));
        assert_eq!(canvas.coverage(), 11);
    }

    #[test]
    fn canvas_line_clips_offscreen_segment() {
        let mut canvas = Canvas::new(10, 10);
        canvas.line((-5, 2), (4, 2), RED);

        assert_eq!(canvas.coverage(), 5);
    }

    #[test]
    fn canvas_ascii_uses_brightness_ramp() {
        let mut canvas = Canvas::new(3, 2);
        canvas.set_pixel(0, 0, Rgba::WHITE);
        canvas.set_pixel(2, 1, Rgba::BLACK);

        assert_eq!(canvas.to_ascii(), "@  \n   ");
    }
}
