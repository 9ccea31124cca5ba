//! Geometry value types
//!
//! Points, sizes, rectangles and 2D affine transforms. All components are
//! `f64` and each animatable type exposes its components as a fixed-size
//! array in a documented order.

/// 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Components as `[x, y]`
    pub const fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }

    pub const fn from_array([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

/// 2D size
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Components as `[x, y, width, height]`
    pub const fn to_array(self) -> [f64; 4] {
        [
            self.origin.x,
            self.origin.y,
            self.size.width,
            self.size.height,
        ]
    }

    pub const fn from_array([x, y, width, height]: [f64; 4]) -> Self {
        Self::new(x, y, width, height)
    }
}

/// 2x3 affine matrix, coefficients `[a, b, c, d, tx, ty]`:
///
/// ```text
/// | a  c  tx |
/// | b  d  ty |
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine2D {
    pub elements: [f64; 6],
}

impl Default for Affine2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Affine2D {
    pub const IDENTITY: Affine2D = Affine2D {
        elements: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
    };

    pub const fn new(a: f64, b: f64, c: f64, d: f64, tx: f64, ty: f64) -> Self {
        Self {
            elements: [a, b, c, d, tx, ty],
        }
    }

    pub const fn translation(x: f64, y: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, x, y)
    }

    /// Counter-clockwise rotation by `angle` radians about the origin
    pub fn rotation(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(c, s, -s, c, 0.0, 0.0)
    }

    /// Components as `[a, b, c, d, tx, ty]`
    pub const fn to_array(self) -> [f64; 6] {
        self.elements
    }

    pub const fn from_array(elements: [f64; 6]) -> Self {
        Self { elements }
    }
}
