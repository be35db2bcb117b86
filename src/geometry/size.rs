use super::EPSILON;

/// A 2D extent.
///
/// Either component may be negative; a rectangle carrying a negative extent
/// is "unstandardized" and most consumers normalize it first via
/// [`Rect::standardized`](super::Rect::standardized).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Size {
    /// The zero extent.
    pub const ZERO: Size = Size::new(0.0, 0.0);

    /// Creates a size from its extents.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Component-wise equality within [`EPSILON`].
    #[must_use]
    pub fn approx_eq(self, other: Size) -> bool {
        (self.width - other.width).abs() < EPSILON
            && (self.height - other.height).abs() < EPSILON
    }
}
