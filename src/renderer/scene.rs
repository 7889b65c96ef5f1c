//! Frame composition
//!
//! Draw order: clear, avatar, then either the obstacles (running) or the
//! start prompt (idle).

use super::surface::{Sprite, Surface};
use crate::settings::Settings;
use crate::sim::{GameState, Obstacle};
use crate::tuning::Tuning;

/// Images the scene draws
#[derive(Debug, Clone)]
pub struct Sprites<I> {
    pub avatar: I,
    /// Cap at the bottom of the upper barrier
    pub pipe_top: I,
    /// Cap at the top of the lower barrier
    pub pipe_bottom: I,
    /// Tiled barrier body
    pub pipe_fill: I,
}

impl<I: Sprite> Sprites<I> {
    /// Obstacles need every pipe image; the fill pattern can't be built before
    pub fn pipes_loaded(&self) -> bool {
        self.pipe_fill.is_loaded() && self.pipe_top.is_loaded() && self.pipe_bottom.is_loaded()
    }
}

/// Render the current state
pub fn draw_frame<S: Surface>(
    surface: &mut S,
    state: &GameState,
    sprites: &Sprites<S::Image>,
    settings: &Settings,
) {
    let tuning = &state.tuning;
    surface.clear(0.0, 0.0, tuning.screen_width, tuning.screen_height);

    draw_avatar(surface, state, &sprites.avatar);

    if state.is_running() {
        draw_obstacles(surface, state, sprites);
    } else {
        draw_prompt(surface, settings);
    }
}

pub fn draw_avatar<S: Surface>(surface: &mut S, state: &GameState, image: &S::Image) {
    if !image.is_loaded() {
        return;
    }
    let avatar = &state.avatar;
    surface.draw_image_sized(image, avatar.pos.x, avatar.pos.y, avatar.size.x, avatar.size.y);
}

/// Draw every obstacle; a no-op until all pipe images have loaded
pub fn draw_obstacles<S: Surface>(surface: &mut S, state: &GameState, sprites: &Sprites<S::Image>) {
    if !sprites.pipes_loaded() {
        return;
    }
    let Some(pattern) = surface.create_pattern(&sprites.pipe_fill) else {
        return;
    };

    for obstacle in state.obstacles.iter() {
        draw_obstacle(surface, obstacle, &state.tuning, sprites, &pattern);
    }
}

fn draw_obstacle<S: Surface>(
    surface: &mut S,
    obstacle: &Obstacle,
    tuning: &Tuning,
    sprites: &Sprites<S::Image>,
    pattern: &S::Pattern,
) {
    let x = obstacle.x;
    let w = obstacle.width;

    // Upper barrier: body from the screen top, cap resting on the gap
    let top_cap_h = sprites.pipe_top.height();
    let top_cap_y = obstacle.gap_top - top_cap_h;
    if top_cap_y > 0.0 {
        surface.fill_rect_pattern(pattern, x, 0.0, w, top_cap_y);
    }
    surface.draw_image(&sprites.pipe_top, x, top_cap_y);

    // Lower barrier: cap hanging from the gap, body down to the screen bottom
    let bottom_cap_y = obstacle.gap_bottom();
    let body_y = bottom_cap_y + sprites.pipe_bottom.height();
    surface.draw_image(&sprites.pipe_bottom, x, bottom_cap_y);
    if body_y < tuning.screen_height {
        surface.fill_rect_pattern(pattern, x, body_y, w, tuning.screen_height - body_y);
    }
}

pub fn draw_prompt<S: Surface>(surface: &mut S, settings: &Settings) {
    surface.fill_text(
        &settings.prompt_text,
        &settings.prompt_font,
        &settings.prompt_color,
        settings.prompt_x,
        settings.prompt_y,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    pub struct TestSprite {
        pub name: &'static str,
        pub loaded: bool,
        pub height: f32,
    }

    impl Sprite for TestSprite {
        fn is_loaded(&self) -> bool {
            self.loaded
        }

        fn height(&self) -> f32 {
            if self.loaded { self.height } else { 0.0 }
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    pub enum DrawCall {
        Clear,
        Image(&'static str, f32, f32),
        ImageSized(&'static str, f32, f32, f32, f32),
        Pattern(&'static str),
        FillRect(f32, f32, f32, f32),
        Text(String, f32, f32),
    }

    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        pub calls: Vec<DrawCall>,
    }

    impl Surface for RecordingSurface {
        type Image = TestSprite;
        type Pattern = &'static str;

        fn clear(&mut self, _x: f32, _y: f32, _w: f32, _h: f32) {
            self.calls.push(DrawCall::Clear);
        }

        fn draw_image(&mut self, image: &TestSprite, x: f32, y: f32) {
            self.calls.push(DrawCall::Image(image.name, x, y));
        }

        fn draw_image_sized(&mut self, image: &TestSprite, x: f32, y: f32, w: f32, h: f32) {
            self.calls.push(DrawCall::ImageSized(image.name, x, y, w, h));
        }

        fn create_pattern(&mut self, image: &TestSprite) -> Option<&'static str> {
            self.calls.push(DrawCall::Pattern(image.name));
            Some(image.name)
        }

        fn fill_rect_pattern(&mut self, _pattern: &&'static str, x: f32, y: f32, w: f32, h: f32) {
            self.calls.push(DrawCall::FillRect(x, y, w, h));
        }

        fn fill_text(&mut self, text: &str, _font: &str, _color: &str, x: f32, y: f32) {
            self.calls.push(DrawCall::Text(text.to_string(), x, y));
        }
    }

    pub fn sprites(loaded: bool) -> Sprites<TestSprite> {
        let sprite = |name| TestSprite {
            name,
            loaded,
            height: 26.0,
        };
        Sprites {
            avatar: sprite("avatar"),
            pipe_top: sprite("pipe_top"),
            pipe_bottom: sprite("pipe_bottom"),
            pipe_fill: sprite("pipe_fill"),
        }
    }

    #[test]
    fn test_idle_draws_avatar_and_prompt() {
        let state = GameState::new(1);
        let settings = Settings::default();
        let mut surface = RecordingSurface::default();

        draw_frame(&mut surface, &state, &sprites(true), &settings);

        assert_eq!(
            surface.calls,
            vec![
                DrawCall::Clear,
                DrawCall::ImageSized("avatar", 50.0, 150.0, 20.0, 20.0),
                DrawCall::Text(settings.prompt_text.clone(), 50.0, 240.0),
            ]
        );
    }

    #[test]
    fn test_running_draws_pipe_segments() {
        let mut state = GameState::new(1);
        state.press();
        let tuning = state.tuning.clone();
        state.obstacles.spawn_at(100.0, &tuning);
        let mut surface = RecordingSurface::default();

        draw_frame(&mut surface, &state, &sprites(true), &Settings::default());

        assert_eq!(
            surface.calls,
            vec![
                DrawCall::Clear,
                DrawCall::ImageSized("avatar", 50.0, 150.0, 20.0, 20.0),
                DrawCall::Pattern("pipe_fill"),
                DrawCall::FillRect(320.0, 0.0, 52.0, 74.0),
                DrawCall::Image("pipe_top", 320.0, 74.0),
                DrawCall::Image("pipe_bottom", 320.0, 200.0),
                DrawCall::FillRect(320.0, 226.0, 52.0, 254.0),
            ]
        );
    }

    #[test]
    fn test_gap_at_top_skips_upper_body() {
        let mut state = GameState::new(1);
        state.press();
        let tuning = state.tuning.clone();
        state.obstacles.spawn_at(0.0, &tuning);
        let mut surface = RecordingSurface::default();

        draw_obstacles(&mut surface, &state, &sprites(true));

        assert!(surface.calls.contains(&DrawCall::Image("pipe_top", 320.0, -26.0)));
        assert!(!surface.calls.iter().any(|c| matches!(c, DrawCall::FillRect(_, y, _, _) if *y == 0.0)));
    }

    #[test]
    fn test_obstacles_wait_for_images() {
        let mut state = GameState::new(1);
        state.press();
        let tuning = state.tuning.clone();
        state.obstacles.spawn_at(100.0, &tuning);

        let mut partial = sprites(true);
        partial.pipe_bottom.loaded = false;
        let mut surface = RecordingSurface::default();
        draw_frame(&mut surface, &state, &partial, &Settings::default());

        // Avatar still drawn, but no pattern or pipe calls
        assert_eq!(
            surface.calls,
            vec![
                DrawCall::Clear,
                DrawCall::ImageSized("avatar", 50.0, 150.0, 20.0, 20.0),
            ]
        );
    }

    #[test]
    fn test_unloaded_avatar_is_skipped() {
        let state = GameState::new(1);
        let mut surface = RecordingSurface::default();

        draw_frame(&mut surface, &state, &sprites(false), &Settings::default());

        assert_eq!(surface.calls.len(), 2);
        assert!(matches!(surface.calls[1], DrawCall::Text(..)));
    }
}
