//! Canvas rendering module
//!
//! Rendering is a pure read of `GameState`. Drawing goes through the `Surface`
//! trait so the scene logic runs (and is tested) without a browser.

pub mod scene;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use scene::{Sprites, draw_frame};
pub use surface::{Sprite, Surface};
