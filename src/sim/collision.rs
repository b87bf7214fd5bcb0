//! Collision detection
//!
//! Pure AABB test between the bird and the current pipe pair. No state and
//! no mutation; the tick decides what a hit means.

use glam::Vec2;

use super::rect::Rect;

/// The bird's collision box: a square of side `radius` centered on `pos`.
///
/// `radius` is the side length, not a half-extent, which makes the hitbox
/// noticeably smaller than the rendered sprite. The margin is intentional
/// game feel; grazing a pipe visually does not end the run.
pub fn bird_frame(pos: Vec2, radius: f32) -> Rect {
    Rect::centered(pos, radius)
}

/// True if the bird overlaps either pipe
pub fn check(bird_pos: Vec2, bird_radius: f32, top: &Rect, bottom: &Rect) -> bool {
    let frame = bird_frame(bird_pos, bird_radius);
    frame.intersects(top) || frame.intersects(bottom)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pipes_at(x: f32, top_height: f32, gap: f32, width: f32) -> (Rect, Rect) {
        let top = Rect::new(x, 0.0, width, top_height);
        let bottom = Rect::new(x, top_height + gap, width, top_height);
        (top, bottom)
    }

    #[test]
    fn test_frame_side_is_radius() {
        let frame = bird_frame(Vec2::new(100.0, 300.0), 13.0);
        assert_eq!(frame.w, 13.0);
        assert_eq!(frame.h, 13.0);
        assert_eq!(frame.left(), 93.5);
    }

    #[test]
    fn test_bird_inside_top_pipe_hits() {
        let (top, bottom) = pipes_at(80.0, 300.0, 100.0, 100.0);
        // Frame fully inside the top pipe
        assert!(check(Vec2::new(120.0, 150.0), 13.0, &top, &bottom));
    }

    #[test]
    fn test_bird_inside_bottom_pipe_hits() {
        let (top, bottom) = pipes_at(80.0, 300.0, 100.0, 100.0);
        assert!(check(Vec2::new(120.0, 450.0), 13.0, &top, &bottom));
    }

    #[test]
    fn test_bird_centered_in_gap_misses() {
        let (top, bottom) = pipes_at(80.0, 300.0, 100.0, 100.0);
        // Gap spans y 300..400; dead center leaves >40px on each side
        assert!(!check(Vec2::new(120.0, 350.0), 13.0, &top, &bottom));
    }

    #[test]
    fn test_bird_left_of_pipes_misses() {
        let (top, bottom) = pipes_at(400.0, 300.0, 100.0, 100.0);
        assert!(!check(Vec2::new(100.0, 150.0), 13.0, &top, &bottom));
    }

    #[test]
    fn test_grazing_edge_hits() {
        let (top, bottom) = pipes_at(106.5, 300.0, 100.0, 100.0);
        // Frame right edge exactly touches the pipes' left edge
        assert!(check(Vec2::new(100.0, 150.0), 13.0, &top, &bottom));
    }
}
