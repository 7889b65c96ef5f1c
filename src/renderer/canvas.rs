//! `Surface` over a browser 2D canvas context

use web_sys::{CanvasPattern, CanvasRenderingContext2d, HtmlImageElement};

use super::surface::{Sprite, Surface};

impl Sprite for HtmlImageElement {
    fn is_loaded(&self) -> bool {
        self.complete() && self.natural_width() > 0
    }

    fn height(&self) -> f32 {
        self.natural_height() as f32
    }
}

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

// Canvas calls only fail for detached or broken images; a skipped draw is fine
impl Surface for CanvasSurface {
    type Image = HtmlImageElement;
    type Pattern = CanvasPattern;

    fn clear(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ctx.clear_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn draw_image(&mut self, image: &HtmlImageElement, x: f32, y: f32) {
        let _ = self
            .ctx
            .draw_image_with_html_image_element(image, x as f64, y as f64);
    }

    fn draw_image_sized(&mut self, image: &HtmlImageElement, x: f32, y: f32, w: f32, h: f32) {
        let _ = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
            image, x as f64, y as f64, w as f64, h as f64,
        );
    }

    fn create_pattern(&mut self, image: &HtmlImageElement) -> Option<CanvasPattern> {
        self.ctx
            .create_pattern_with_html_image_element(image, "repeat")
            .ok()
            .flatten()
    }

    fn fill_rect_pattern(&mut self, pattern: &CanvasPattern, x: f32, y: f32, w: f32, h: f32) {
        self.ctx.save();
        self.ctx.set_fill_style_canvas_pattern(pattern);
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
        self.ctx.restore();
    }

    fn fill_text(&mut self, text: &str, font: &str, color: &str, x: f32, y: f32) {
        self.ctx.set_font(font);
        self.ctx.set_fill_style_str(color);
        let _ = self.ctx.fill_text(text, x as f64, y as f64);
    }
}
