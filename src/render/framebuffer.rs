use raylib::prelude::*;

/// Fixed-resolution RGBA pixel buffer, allocated once.
pub struct Framebuffer {
    pub color_buffer: Vec<Color>,
    pub width: u32,
    pub height: u32,
    pub background_color: Color,
    pub current_color: Color,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        let bg = Color::BLACK;
        Self {
            color_buffer: vec![bg; size],
            width,
            height,
            background_color: bg,
            current_color: Color::WHITE,
        }
    }

    #[inline]
    pub fn clear(&mut self) {
        self.color_buffer.fill(self.background_color);
    }

    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32) {
        if x < self.width && y < self.height {
            self.color_buffer[(y * self.width + x) as usize] = self.current_color;
        }
    }

    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Color {
        if x < self.width && y < self.height {
            return self.color_buffer[(y * self.width + x) as usize];
        }
        self.background_color
    }

    #[inline] pub fn set_current_color(&mut self, c: Color) { self.current_color = c; }
    #[inline] pub fn set_background_color(&mut self, c: Color) { self.background_color = c; }

    /// Paint rows `y0..y1` of column `x` with the current colour.
    pub fn fill_column(&mut self, x: u32, y0: u32, y1: u32) {
        for y in y0..y1.min(self.height) {
            self.set_pixel(x, y);
        }
    }

    /// Stretch the buffer over the window, one filled block per pixel.
    pub fn draw_scaled<D: RaylibDraw>(&self, d: &mut D, scale: PixelScale) {
        let (bw, bh) = (scale.w.ceil() as i32, scale.h.ceil() as i32);
        for y in 0..self.height {
            let sy = (y as f32 * scale.h).floor() as i32;
            for x in 0..self.width {
                let sx = (x as f32 * scale.w).floor() as i32;
                d.draw_rectangle(sx, sy, bw, bh, self.get_pixel(x, y));
            }
        }
    }
}

/// Size of one buffer pixel on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelScale {
    pub w: f32,
    pub h: f32,
}

impl PixelScale {
    pub fn fit(screen_w: i32, screen_h: i32, fb: &Framebuffer) -> Self {
        Self {
            w: screen_w as f32 / fb.width as f32,
            h: screen_h as f32 / fb.height as f32,
        }
    }
}
