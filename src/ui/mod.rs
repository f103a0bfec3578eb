//! Interactive button registry: shapes, layout, hit-testing.
//!
//! Geometry is derived proportionally from the canvas size and rebuilt
//! wholesale on resize. Buttons are read-only during a frame; answer labels
//! are composed at draw time from the current question.

use glam::Vec2;

use crate::color::{Rgba, palette};
use crate::quiz::OptionKey;

/// Button geometry as a tagged shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ButtonShape {
    Circle { center: Vec2, radius: f32 },
    Rect { origin: Vec2, size: Vec2 },
}

impl ButtonShape {
    /// Point-inside test: circles measure Euclidean distance to the center,
    /// rects test the open bounding box
    pub fn contains(&self, p: Vec2) -> bool {
        match *self {
            ButtonShape::Circle { center, radius } => center.distance(p) <= radius,
            ButtonShape::Rect { origin, size } => {
                p.x > origin.x && p.x < origin.x + size.x && p.y > origin.y && p.y < origin.y + size.y
            }
        }
    }

    pub fn center(&self) -> Vec2 {
        match *self {
            ButtonShape::Circle { center, .. } => center,
            ButtonShape::Rect { origin, size } => origin + size / 2.0,
        }
    }
}

/// What clicking a button does
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ButtonAction {
    StartQuiz,
    Answer(OptionKey),
    Restart,
}

/// An interactive region with its styling
#[derive(Debug, Clone)]
pub struct Button {
    pub shape: ButtonShape,
    /// Fixed label; empty for answer buttons, whose text comes per question
    pub label: &'static str,
    pub fill: Rgba,
    pub hover: Rgba,
    pub action: ButtonAction,
}

impl Button {
    pub fn contains(&self, p: Vec2) -> bool {
        self.shape.contains(p)
    }
}

/// Every live button, re-derived from the canvas size on resize
#[derive(Debug, Clone)]
pub struct Layout {
    pub width: f32,
    pub height: f32,
    pub start: Button,
    /// A, B, C, D in order, stacked in a centered column
    pub answers: [Button; 4],
    pub restart: Button,
}

impl Layout {
    pub fn compute(width: f32, height: f32) -> Self {
        let btn_w = (width * 0.7).min(800.0);
        let btn_h = (height * 0.12).min(90.0);
        let gap = (height * 0.03).min(20.0);

        let start = Button {
            shape: ButtonShape::Circle {
                center: Vec2::new(width / 2.0, height / 2.0 + 50.0),
                radius: (width.min(height) * 0.08).floor().min(80.0),
            },
            label: "Start Quiz",
            fill: palette::START_FILL,
            hover: palette::START_HOVER,
            action: ButtonAction::StartQuiz,
        };

        let restart = Button {
            shape: ButtonShape::Rect {
                origin: Vec2::new(width / 2.0 - 120.0, height / 2.0 + 150.0),
                size: Vec2::new(240.0, 64.0),
            },
            label: "Play Again",
            fill: palette::BUTTON_FILL,
            hover: palette::BUTTON_HOVER,
            action: ButtonAction::Restart,
        };

        let left = width / 2.0 - btn_w / 2.0;
        let top = (height * 0.35).max(160.0);
        let answers = OptionKey::ALL.map(|key| Button {
            shape: ButtonShape::Rect {
                origin: Vec2::new(left, top + key.index() as f32 * (btn_h + gap)),
                size: Vec2::new(btn_w, btn_h),
            },
            label: "",
            fill: palette::BUTTON_FILL,
            hover: palette::BUTTON_HOVER,
            action: ButtonAction::Answer(key),
        });

        Self {
            width,
            height,
            start,
            answers,
            restart,
        }
    }

    /// Which answer button, if any, contains the point
    pub fn answer_at(&self, p: Vec2) -> Option<OptionKey> {
        OptionKey::ALL
            .into_iter()
            .find(|&key| self.answer(key).contains(p))
    }

    pub fn answer(&self, key: OptionKey) -> &Button {
        &self.answers[key.index()]
    }

    /// Burst origin for a selected answer
    pub fn answer_center(&self, key: OptionKey) -> Vec2 {
        self.answer(key).shape.center()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_hit() {
        let shape = ButtonShape::Circle {
            center: Vec2::new(100.0, 100.0),
            radius: 50.0,
        };
        assert!(shape.contains(Vec2::new(100.0, 100.0)));
        assert!(shape.contains(Vec2::new(150.0, 100.0))); // on the rim
        assert!(!shape.contains(Vec2::new(151.0, 100.0)));
        assert!(!shape.contains(Vec2::new(136.0, 136.0))); // corner of bounding box
    }

    #[test]
    fn test_rect_hit_is_strict() {
        let shape = ButtonShape::Rect {
            origin: Vec2::new(10.0, 20.0),
            size: Vec2::new(100.0, 40.0),
        };
        assert!(shape.contains(Vec2::new(50.0, 40.0)));
        assert!(!shape.contains(Vec2::new(10.0, 40.0))); // on the edge
        assert!(!shape.contains(Vec2::new(111.0, 40.0)));
        assert!(!shape.contains(Vec2::new(50.0, 61.0)));
    }

    #[test]
    fn test_layout_answers_centered_and_stacked() {
        let layout = Layout::compute(1000.0, 800.0);
        let ButtonShape::Rect { origin, size } = layout.answers[0].shape else {
            panic!("answer buttons are rects");
        };
        assert!((origin.x + size.x / 2.0 - 500.0).abs() < 0.001);

        // stacked downward without overlap
        for pair in layout.answers.windows(2) {
            let ButtonShape::Rect { origin: a, size: sa } = pair[0].shape else {
                unreachable!()
            };
            let ButtonShape::Rect { origin: b, .. } = pair[1].shape else {
                unreachable!()
            };
            assert!(b.y >= a.y + sa.y);
        }
    }

    #[test]
    fn test_answer_at_maps_keys() {
        let layout = Layout::compute(1000.0, 800.0);
        for key in OptionKey::ALL {
            let hit = layout.answer_at(layout.answer_center(key));
            assert_eq!(hit, Some(key));
        }
        assert_eq!(layout.answer_at(Vec2::new(1.0, 1.0)), None);
    }

    #[test]
    fn test_resize_invalidates_stale_coordinates() {
        let wide = Layout::compute(1600.0, 900.0);
        // a point inside answer A on the wide layout, far left of center
        let p = Vec2::new(
            wide.answer_center(OptionKey::A).x - 380.0,
            wide.answer_center(OptionKey::A).y,
        );
        assert_eq!(wide.answer_at(p), Some(OptionKey::A));

        // after shrinking, the same coordinates fall outside the new column
        let narrow = Layout::compute(400.0, 900.0);
        assert_eq!(narrow.answer_at(p), None);
    }

    #[test]
    fn test_layout_scales_with_canvas() {
        let small = Layout::compute(320.0, 480.0);
        let ButtonShape::Circle { radius, .. } = small.start.shape else {
            panic!("start button is a circle");
        };
        assert!((radius - (320.0f32 * 0.08).floor()).abs() < 0.001);

        let big = Layout::compute(4000.0, 3000.0);
        let ButtonShape::Circle { radius, .. } = big.start.shape else {
            unreachable!()
        };
        assert!((radius - 80.0).abs() < 0.001); // capped
        let ButtonShape::Rect { size, .. } = big.answers[0].shape else {
            unreachable!()
        };
        assert!((size.x - 800.0).abs() < 0.001); // width capped too
    }
}
