//! Color type shared by the particle layer and the Canvas2D renderer.

use crate::lerp;

/// An RGBA color with 8-bit channels and a unit-interval alpha
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Same color with a different alpha
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// CSS `rgba(...)` string accepted by Canvas2D fill/stroke styles
    pub fn css(&self) -> String {
        format!(
            "rgba({},{},{},{:.3})",
            self.r,
            self.g,
            self.b,
            self.a.clamp(0.0, 1.0)
        )
    }

    /// Channel-wise blend toward `other` by `t`
    pub fn mix(self, other: Rgba, t: f32) -> Rgba {
        Rgba {
            r: lerp(self.r as f32, other.r as f32, t).round() as u8,
            g: lerp(self.g as f32, other.g as f32, t).round() as u8,
            b: lerp(self.b as f32, other.b as f32, t).round() as u8,
            a: lerp(self.a, other.a, t),
        }
    }
}

/// Fixed palette for buttons, bursts, and text
pub mod palette {
    use super::Rgba;

    /// Deep blue circular start button
    pub const START_FILL: Rgba = Rgba::new(10, 35, 90, 1.0);
    pub const START_HOVER: Rgba = Rgba::new(30, 70, 160, 1.0);

    /// Rectangular answer / restart buttons
    pub const BUTTON_FILL: Rgba = Rgba::new(50, 100, 200, 0.8);
    pub const BUTTON_HOVER: Rgba = Rgba::new(100, 180, 255, 1.0);

    /// Verdict highlights on the feedback screen
    pub const ANSWER_NEUTRAL: Rgba = Rgba::new(60, 110, 200, 0.86);
    pub const ANSWER_CORRECT: Rgba = Rgba::new(30, 190, 100, 0.94);
    pub const ANSWER_WRONG: Rgba = Rgba::new(200, 60, 60, 0.94);

    /// Burst tints
    pub const BURST_SUCCESS: Rgba = Rgba::opaque(80, 220, 120);
    pub const BURST_FAILURE: Rgba = Rgba::opaque(240, 120, 120);
    pub const BURST_CELEBRATE: Rgba = Rgba::opaque(255, 200, 80);

    /// Percentage readout tiers
    pub const GRADE_GREEN: Rgba = Rgba::opaque(80, 220, 120);
    pub const GRADE_AMBER: Rgba = Rgba::opaque(255, 200, 80);
    pub const GRADE_RED: Rgba = Rgba::opaque(240, 100, 100);

    pub const TEXT_DARK: Rgba = Rgba::opaque(0, 0, 0);
    pub const TEXT_LIGHT: Rgba = Rgba::opaque(255, 255, 255);
}

/// Color tier for the final percentage readout
pub fn grade_color(percent: u32) -> Rgba {
    if percent >= 80 {
        palette::GRADE_GREEN
    } else if percent >= 50 {
        palette::GRADE_AMBER
    } else {
        palette::GRADE_RED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_format() {
        assert_eq!(Rgba::opaque(255, 0, 10).css(), "rgba(255,0,10,1.000)");
        assert_eq!(Rgba::new(1, 2, 3, 0.5).css(), "rgba(1,2,3,0.500)");
    }

    #[test]
    fn test_css_clamps_alpha() {
        assert_eq!(Rgba::new(0, 0, 0, 1.5).css(), "rgba(0,0,0,1.000)");
        assert_eq!(Rgba::new(0, 0, 0, -0.2).css(), "rgba(0,0,0,0.000)");
    }

    #[test]
    fn test_grade_tiers() {
        assert_eq!(grade_color(100), palette::GRADE_GREEN);
        assert_eq!(grade_color(80), palette::GRADE_GREEN);
        assert_eq!(grade_color(79), palette::GRADE_AMBER);
        assert_eq!(grade_color(50), palette::GRADE_AMBER);
        assert_eq!(grade_color(49), palette::GRADE_RED);
        assert_eq!(grade_color(0), palette::GRADE_RED);
    }

    #[test]
    fn test_mix_endpoints() {
        let a = Rgba::opaque(0, 0, 0);
        let b = Rgba::opaque(255, 255, 255);
        assert_eq!(a.mix(b, 0.0), a);
        assert_eq!(a.mix(b, 1.0), b);
    }
}
