use serde::{Deserialize, Serialize};

/// Rendering surface size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Returns a copy with negative or non-finite dimensions clamped to zero.
    #[must_use]
    pub fn sanitized(self) -> Self {
        Self {
            width: clamp_dimension(self.width),
            height: clamp_dimension(self.height),
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

fn clamp_dimension(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::Viewport;

    #[test]
    fn sanitized_clamps_negative_and_non_finite() {
        let viewport = Viewport::new(-20.0, f64::NAN).sanitized();
        assert_eq!(viewport, Viewport::new(0.0, 0.0));

        let viewport = Viewport::new(f64::INFINITY, 300.0).sanitized();
        assert_eq!(viewport, Viewport::new(0.0, 300.0));
    }

    #[test]
    fn zero_sized_viewport_is_not_valid() {
        assert!(!Viewport::new(0.0, 10.0).is_valid());
        assert!(Viewport::new(1.0, 1.0).is_valid());
    }
}
