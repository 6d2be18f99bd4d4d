//! Pointer-driven card tilt math.

use crate::config;

/// Rotation applied to a card while the pointer hovers it, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TiltVector {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl TiltVector {
    pub const NEUTRAL: Self = Self { rotate_x: 0.0, rotate_y: 0.0 };

    /// Tilt from the pointer position relative to the card's top-left
    /// corner. The divisor bounds the magnitude so a card never rotates
    /// more than half its dimension in degrees over ten.
    pub fn from_pointer(x: f64, y: f64, width: f64, height: f64) -> Self {
        let center_x = width / 2.0;
        let center_y = height / 2.0;
        Self {
            rotate_x: (y - center_y) / config::TILT_DIVISOR,
            rotate_y: (center_x - x) / config::TILT_DIVISOR,
        }
    }

    pub fn is_neutral(&self) -> bool {
        self.rotate_x == 0.0 && self.rotate_y == 0.0
    }

    /// CSS transform for the card. The neutral vector renders the resting
    /// transform so mouse-leave settles the card flat.
    pub fn transform(&self) -> String {
        if self.is_neutral() {
            "perspective(1000px) rotateX(0) rotateY(0) translateZ(0)".to_string()
        } else {
            format!(
                "perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg) translateZ(20px)",
                self.rotate_x, self.rotate_y
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_at_center_is_neutral() {
        let tilt = TiltVector::from_pointer(150.0, 100.0, 300.0, 200.0);
        assert!(tilt.is_neutral());
        assert_eq!(tilt.transform(), TiltVector::NEUTRAL.transform());
    }

    #[test]
    fn corners_tilt_toward_the_pointer() {
        // Top-left: card leans back and to the left.
        let tilt = TiltVector::from_pointer(0.0, 0.0, 300.0, 200.0);
        assert!(tilt.rotate_x < 0.0);
        assert!(tilt.rotate_y > 0.0);

        // Bottom-right mirrors it.
        let tilt = TiltVector::from_pointer(300.0, 200.0, 300.0, 200.0);
        assert!(tilt.rotate_x > 0.0);
        assert!(tilt.rotate_y < 0.0);
    }

    #[test]
    fn magnitude_is_bounded_by_the_divisor() {
        let tilt = TiltVector::from_pointer(0.0, 0.0, 300.0, 200.0);
        assert!(tilt.rotate_x.abs() <= 200.0 / 2.0 / 10.0);
        assert!(tilt.rotate_y.abs() <= 300.0 / 2.0 / 10.0);
    }

    #[test]
    fn active_transform_lifts_the_card() {
        let tilt = TiltVector::from_pointer(0.0, 0.0, 300.0, 200.0);
        let css = tilt.transform();
        assert!(css.contains("translateZ(20px)"));
        assert!(css.starts_with("perspective(1000px)"));
    }
}
