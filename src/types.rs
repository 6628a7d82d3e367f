//! Core types for timefield.
//!
//! Geometry for section hit testing, the color type the cursor blink
//! interpolates over, and the `Response` flags handlers hand back to the
//! host event loop.

// =============================================================================
// Color
// =============================================================================

/// RGBA color with 8-bit channels (0-255).
///
/// Alpha 255 = fully opaque, 0 = fully transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Transparent color.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Linear interpolation between two colors.
    #[inline]
    pub fn lerp(a: Self, b: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let inv_t = 1.0 - t;

        Self {
            r: ((a.r as f32 * inv_t) + (b.r as f32 * t)) as u8,
            g: ((a.g as f32 * inv_t) + (b.g as f32 * t)) as u8,
            b: ((a.b as f32 * inv_t) + (b.b as f32 * t)) as u8,
            a: ((a.a as f32 * inv_t) + (b.a as f32 * t)) as u8,
        }
    }
}

// =============================================================================
// Geometry
// =============================================================================

/// A point in host coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A size in host coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle: a section's on-screen bounds.
///
/// The host renderer assigns one to each section so tap and wheel events
/// can be mapped back to a section index.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub pos: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(pos: Point, size: Size) -> Self {
        Self { pos, size }
    }

    /// Strict interior containment, matching tap hit testing: points on
    /// the edges do not hit.
    pub fn contains(&self, p: Point) -> bool {
        p.x > self.pos.x
            && p.y > self.pos.y
            && p.x < self.pos.x + self.size.width
            && p.y < self.pos.y + self.size.height
    }
}

// =============================================================================
// Handler Response
// =============================================================================

bitflags::bitflags! {
    /// What the host event loop should do after a handler ran.
    ///
    /// Handlers never reach into the toolkit themselves; they report the
    /// needed side effects and the host performs them. An empty response
    /// means the event was ignored.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Response: u8 {
        /// The widget changed visually and needs a redraw.
        const REDRAW = 1 << 0;
        /// Focus should move to the next focusable widget.
        const FOCUS_NEXT = 1 << 1;
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        let a = Rgba::rgb(0, 0, 0);
        let b = Rgba::rgb(255, 255, 255);

        assert_eq!(Rgba::lerp(a, b, 0.0), a);
        assert_eq!(Rgba::lerp(a, b, 1.0), b);
    }

    #[test]
    fn test_lerp_midpoint() {
        let a = Rgba::new(0, 100, 200, 0);
        let b = Rgba::new(200, 100, 0, 255);

        let mid = Rgba::lerp(a, b, 0.5);
        assert_eq!(mid.r, 100);
        assert_eq!(mid.g, 100);
        assert_eq!(mid.b, 100);
        assert_eq!(mid.a, 127);
    }

    #[test]
    fn test_lerp_clamps_t() {
        let a = Rgba::rgb(10, 10, 10);
        let b = Rgba::rgb(20, 20, 20);

        assert_eq!(Rgba::lerp(a, b, -1.0), a);
        assert_eq!(Rgba::lerp(a, b, 2.0), b);
    }

    #[test]
    fn test_rect_contains() {
        let r = Rect::new(Point::new(10.0, 10.0), Size::new(20.0, 10.0));

        assert!(r.contains(Point::new(15.0, 15.0)));
        assert!(!r.contains(Point::new(5.0, 15.0)));
        assert!(!r.contains(Point::new(35.0, 15.0)));
        // Edges are exclusive.
        assert!(!r.contains(Point::new(10.0, 15.0)));
        assert!(!r.contains(Point::new(30.0, 20.0)));
    }

    #[test]
    fn test_response_flags() {
        let r = Response::REDRAW | Response::FOCUS_NEXT;
        assert!(r.contains(Response::REDRAW));
        assert!(r.contains(Response::FOCUS_NEXT));
        assert!(Response::empty().is_empty());
    }
}
