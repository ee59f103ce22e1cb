/*
 * Camera Module
 *
 * This module defines the Camera struct that maps the arena onto the window.
 * The arena has its origin in the bottom-left corner with y pointing up;
 * nannou windows have the origin in the center. The camera keeps the whole
 * arena in view, scaling it uniformly to fit the window.
 */

use glam::DVec2;
use nannou::prelude::*;

pub struct Camera {
    pub arena_size: DVec2,
    pub zoom: f32,
}

impl Camera {
    pub fn new(arena_width: f64, arena_height: f64) -> Self {
        Self {
            arena_size: DVec2::new(arena_width, arena_height),
            zoom: 1.0,
        }
    }

    // Recompute the zoom so the arena fills the window without distortion
    pub fn fit(&mut self, window_rect: Rect) {
        let zoom_x = window_rect.w() / self.arena_size.x as f32;
        let zoom_y = window_rect.h() / self.arena_size.y as f32;
        self.zoom = zoom_x.min(zoom_y).max(f32::EPSILON);
    }

    // Convert a point from arena space to screen space
    pub fn world_to_screen(&self, point: DVec2, window_rect: Rect) -> Vec2 {
        let centered = point - self.arena_size / 2.0;
        vec2(centered.x as f32, centered.y as f32) * self.zoom + window_rect.xy()
    }

    // Convert a point from screen space to arena space
    pub fn screen_to_world(&self, point: Vec2, window_rect: Rect) -> DVec2 {
        let centered = (point - window_rect.xy()) / self.zoom;
        DVec2::new(centered.x as f64, centered.y as f64) + self.arena_size / 2.0
    }

    // Arena bounds in screen space, for drawing the border
    pub fn arena_rect(&self, window_rect: Rect) -> Rect {
        let bottom_left = self.world_to_screen(DVec2::ZERO, window_rect);
        let top_right = self.world_to_screen(self.arena_size, window_rect);
        Rect::from_corners(bottom_left, top_right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arena_center_maps_to_window_center() {
        let camera = Camera::new(640.0, 480.0);
        let window = Rect::from_w_h(640.0, 480.0);
        assert_eq!(camera.world_to_screen(DVec2::new(320.0, 240.0), window), Vec2::ZERO);
        assert_eq!(
            camera.world_to_screen(DVec2::ZERO, window),
            vec2(-320.0, -240.0)
        );
    }

    #[test]
    fn screen_to_world_inverts_world_to_screen() {
        let mut camera = Camera::new(640.0, 480.0);
        let window = Rect::from_w_h(1280.0, 720.0);
        camera.fit(window);
        assert_eq!(camera.zoom, 1.5);

        let point = DVec2::new(100.0, 50.0);
        let back = camera.screen_to_world(camera.world_to_screen(point, window), window);
        assert!((back - point).length() < 1e-3);
    }

    #[test]
    fn arena_rect_spans_the_scaled_arena() {
        let mut camera = Camera::new(640.0, 480.0);
        let window = Rect::from_w_h(320.0, 240.0);
        camera.fit(window);
        let rect = camera.arena_rect(window);
        assert_eq!(rect.w(), 320.0);
        assert_eq!(rect.h(), 240.0);
    }
}
