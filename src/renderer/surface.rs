//! Drawing-surface abstraction
//!
//! Mirrors the handful of 2D-context calls the game needs.

/// An image resource that may still be loading
pub trait Sprite {
    /// Whether the image has finished loading and can be drawn
    fn is_loaded(&self) -> bool;
    /// Natural height in pixels (0 until loaded)
    fn height(&self) -> f32;
}

/// A 2D drawing target
pub trait Surface {
    type Image: Sprite;
    /// Repeating fill built from an image
    type Pattern;

    fn clear(&mut self, x: f32, y: f32, w: f32, h: f32);
    /// Draw an image at its natural size
    fn draw_image(&mut self, image: &Self::Image, x: f32, y: f32);
    fn draw_image_sized(&mut self, image: &Self::Image, x: f32, y: f32, w: f32, h: f32);
    /// Build a repeating pattern; `None` if the image cannot be tiled yet
    fn create_pattern(&mut self, image: &Self::Image) -> Option<Self::Pattern>;
    /// Fill a rectangle, tiling the pattern
    fn fill_rect_pattern(&mut self, pattern: &Self::Pattern, x: f32, y: f32, w: f32, h: f32);
    fn fill_text(&mut self, text: &str, font: &str, color: &str, x: f32, y: f32);
}
