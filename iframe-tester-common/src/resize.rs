//! Edge-drag resize arithmetic for the frame stage

use crate::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use std::fmt;

/// Smallest width or height a drag can produce, in pixels
pub const MIN_FRAME_SIZE: i32 = 100;

/// Which handle is being dragged
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResizeEdge {
    Top,
    Right,
    Bottom,
    Left,
}

impl ResizeEdge {
    pub const ALL: [ResizeEdge; 4] = [
        ResizeEdge::Top,
        ResizeEdge::Right,
        ResizeEdge::Bottom,
        ResizeEdge::Left,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResizeEdge::Top => "top",
            ResizeEdge::Right => "right",
            ResizeEdge::Bottom => "bottom",
            ResizeEdge::Left => "left",
        }
    }

    /// Whether this edge changes the width (as opposed to the height)
    pub fn is_horizontal(&self) -> bool {
        matches!(self, ResizeEdge::Left | ResizeEdge::Right)
    }
}

impl fmt::Display for ResizeEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Leading integer of a CSS length, parsed the way `parseInt` does
pub fn parse_css_pixels(value: &str) -> Option<i32> {
    let trimmed = value.trim_start();
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    rest[..digits_len]
        .parse::<i32>()
        .ok()
        .map(|n| sign * n)
}

/// New dimension produced by a drag step
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FrameResize {
    Width(String),
    Height(String),
}

/// Pointer position and frame size captured when a drag starts
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragOrigin {
    pub edge: ResizeEdge,
    pub x: f64,
    pub y: f64,
    pub width: i32,
    pub height: i32,
}

impl DragOrigin {
    /// Start a drag. Dimensions that don't begin with a number fall back to the defaults.
    pub fn begin(edge: ResizeEdge, x: f64, y: f64, width: &str, height: &str) -> Self {
        let fallback = |s: &str| parse_css_pixels(s).unwrap_or(MIN_FRAME_SIZE);
        Self {
            edge,
            x,
            y,
            width: parse_css_pixels(width).unwrap_or_else(|| fallback(DEFAULT_WIDTH)),
            height: parse_css_pixels(height).unwrap_or_else(|| fallback(DEFAULT_HEIGHT)),
        }
    }

    /// Dimension for the pointer now at (`x`, `y`). Top/left shrink as the
    /// pointer moves toward the frame, bottom/right grow.
    pub fn resize_to(&self, x: f64, y: f64) -> FrameResize {
        let dx = (x - self.x).round() as i32;
        let dy = (y - self.y).round() as i32;
        let px = |n: i32| format!("{}px", n.max(MIN_FRAME_SIZE));
        match self.edge {
            ResizeEdge::Right => FrameResize::Width(px(self.width.saturating_add(dx))),
            ResizeEdge::Left => FrameResize::Width(px(self.width.saturating_sub(dx))),
            ResizeEdge::Bottom => FrameResize::Height(px(self.height.saturating_add(dy))),
            ResizeEdge::Top => FrameResize::Height(px(self.height.saturating_sub(dy))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_css_pixels() {
        assert_eq!(parse_css_pixels("640px"), Some(640));
        assert_eq!(parse_css_pixels("  12.7em"), Some(12));
        assert_eq!(parse_css_pixels("-5px"), Some(-5));
        assert_eq!(parse_css_pixels("100%"), Some(100));
        assert_eq!(parse_css_pixels("auto"), None);
        assert_eq!(parse_css_pixels(""), None);
        assert_eq!(parse_css_pixels("-"), None);
    }

    #[test]
    fn test_drag_right_grows_width() {
        let drag = DragOrigin::begin(ResizeEdge::Right, 10.0, 10.0, "640px", "480px");
        assert_eq!(
            drag.resize_to(60.0, 200.0),
            FrameResize::Width("690px".to_string())
        );
    }

    #[test]
    fn test_drag_clamps_to_minimum() {
        let drag = DragOrigin::begin(ResizeEdge::Right, 700.0, 0.0, "640px", "480px");
        assert_eq!(
            drag.resize_to(0.0, 0.0),
            FrameResize::Width("100px".to_string())
        );
        let drag = DragOrigin::begin(ResizeEdge::Right, 700.0, 0.0, "640px", "480px");
        assert_eq!(
            drag.resize_to(160.0, 0.0),
            FrameResize::Width("100px".to_string())
        );
    }

    #[test]
    fn test_left_and_top_shrink_toward_frame() {
        let left = DragOrigin::begin(ResizeEdge::Left, 100.0, 100.0, "640px", "480px");
        assert_eq!(
            left.resize_to(140.0, 100.0),
            FrameResize::Width("600px".to_string())
        );
        let top = DragOrigin::begin(ResizeEdge::Top, 100.0, 100.0, "640px", "480px");
        assert_eq!(
            top.resize_to(100.0, 70.0),
            FrameResize::Height("510px".to_string())
        );
    }

    #[test]
    fn test_bottom_grows_height() {
        let drag = DragOrigin::begin(ResizeEdge::Bottom, 0.0, 0.0, "640px", "480px");
        assert_eq!(
            drag.resize_to(999.0, 20.4),
            FrameResize::Height("500px".to_string())
        );
    }

    #[test]
    fn test_no_maximum() {
        let drag = DragOrigin::begin(ResizeEdge::Right, 0.0, 0.0, "640px", "480px");
        assert_eq!(
            drag.resize_to(5000.0, 0.0),
            FrameResize::Width("5640px".to_string())
        );
    }

    #[test]
    fn test_unparsable_start_uses_default() {
        let drag = DragOrigin::begin(ResizeEdge::Bottom, 0.0, 0.0, "auto", "fit-content");
        assert_eq!(drag.width, 640);
        assert_eq!(drag.height, 480);
    }
}
