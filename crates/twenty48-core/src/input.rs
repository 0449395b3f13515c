//! Device input to [`Direction`] translation. Unknown input maps to `None`
//! and never reaches the engine.

use serde::{Deserialize, Serialize};

use crate::engine::Direction;

/// Minimum swipe displacement, in pixels, before a touch counts as a move.
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 20.0;

impl Direction {
    /// Map a key name to a direction.
    ///
    /// Accepts browser key names (`ArrowUp`, ...) plus the terminal aliases
    /// `w/a/s/d`, `k/h/j/l` and `up/down/left/right`, case-insensitively.
    ///
    /// ```
    /// use twenty48_core::engine::Direction;
    /// assert_eq!(Direction::from_key("ArrowLeft"), Some(Direction::Left));
    /// assert_eq!(Direction::from_key("Enter"), None);
    /// ```
    pub fn from_key(key: &str) -> Option<Direction> {
        match key.trim().to_ascii_lowercase().as_str() {
            "arrowup" | "up" | "w" | "k" => Some(Direction::Up),
            "arrowdown" | "down" | "s" | "j" => Some(Direction::Down),
            "arrowleft" | "left" | "a" | "h" => Some(Direction::Left),
            "arrowright" | "right" | "d" | "l" => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Touch displacement from touch start to touch end, screen coordinates
/// (y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Swipe {
    pub dx: f64,
    pub dy: f64,
}

impl Swipe {
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Build from start and end touch points.
    pub fn between(start: (f64, f64), end: (f64, f64)) -> Self {
        Self::new(end.0 - start.0, end.1 - start.1)
    }

    /// Dominant-axis direction, or `None` when the longer axis does not
    /// exceed `threshold`. Ties between axes resolve vertically.
    pub fn direction(&self, threshold: f64) -> Option<Direction> {
        let (abs_x, abs_y) = (self.dx.abs(), self.dy.abs());
        if abs_x.max(abs_y) <= threshold {
            return None;
        }
        if abs_x > abs_y {
            if self.dx > 0.0 {
                Some(Direction::Right)
            } else {
                Some(Direction::Left)
            }
        } else if self.dy > 0.0 {
            Some(Direction::Down)
        } else {
            Some(Direction::Up)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_maps_keys() {
        assert_eq!(Direction::from_key("ArrowUp"), Some(Direction::Up));
        assert_eq!(Direction::from_key("ArrowDown"), Some(Direction::Down));
        assert_eq!(Direction::from_key("ArrowRight"), Some(Direction::Right));
        assert_eq!(Direction::from_key(" W "), Some(Direction::Up));
        assert_eq!(Direction::from_key("h"), Some(Direction::Left));
        assert_eq!(Direction::from_key("Right"), Some(Direction::Right));
        assert_eq!(Direction::from_key(""), None);
        assert_eq!(Direction::from_key("Space"), None);
    }

    #[test]
    fn it_maps_swipes() {
        let t = DEFAULT_SWIPE_THRESHOLD;
        assert_eq!(Swipe::new(50.0, 10.0).direction(t), Some(Direction::Right));
        assert_eq!(Swipe::new(-50.0, 10.0).direction(t), Some(Direction::Left));
        assert_eq!(Swipe::new(5.0, 40.0).direction(t), Some(Direction::Down));
        assert_eq!(Swipe::new(5.0, -40.0).direction(t), Some(Direction::Up));
        assert_eq!(Swipe::new(30.0, -30.0).direction(t), Some(Direction::Up));
    }

    #[test]
    fn it_ignores_short_swipes() {
        let t = DEFAULT_SWIPE_THRESHOLD;
        assert_eq!(Swipe::new(20.0, 0.0).direction(t), None);
        assert_eq!(Swipe::new(-12.0, 19.9).direction(t), None);
        assert_eq!(Swipe::new(f64::NAN, 0.0).direction(t), None);
        assert_eq!(
            Swipe::between((100.0, 100.0), (100.0, 121.0)).direction(t),
            Some(Direction::Down)
        );
    }
}
