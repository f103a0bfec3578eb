//! Canvas2D rendering (wasm only)
//!
//! Draw order each frame: animated background (gradient, glow, stars, grid),
//! the particle layer, then the current phase's screen. Everything here is a
//! read-only view of `GameState` + `Layout`.

pub mod background;
pub mod screens;

use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::color::Rgba;
use crate::settings::Settings;
use crate::sim::{GameState, Phase};
use crate::ui::Layout;

pub struct Renderer {
    ctx: CanvasRenderingContext2d,
}

impl Renderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx })
    }

    pub fn draw(&self, state: &GameState, layout: &Layout, settings: &Settings) {
        let ctx = &self.ctx;
        background::draw(ctx, state, layout, settings);
        self.draw_particles(state);

        match state.phase {
            Phase::Start => screens::draw_start(ctx, state, layout),
            Phase::Question => screens::draw_question(ctx, state, layout),
            Phase::Feedback {
                selected, correct, ..
            } => screens::draw_feedback(ctx, state, layout, selected, correct),
            Phase::Result => screens::draw_result(ctx, state, layout),
        }
    }

    fn draw_particles(&self, state: &GameState) {
        let ctx = &self.ctx;
        for mote in &state.particles.motes {
            ctx.set_fill_style_str(&Rgba::new(255, 255, 255, mote.alpha).css());
            fill_circle(ctx, mote.pos.x as f64, mote.pos.y as f64, mote.radius as f64);
        }
        for burst in &state.particles.bursts {
            ctx.set_fill_style_str(&burst.color.with_alpha(burst.alpha()).css());
            fill_circle(ctx, burst.pos.x as f64, burst.pos.y as f64, burst.radius as f64);
        }
    }
}

/// Filled circle path helper
pub(crate) fn fill_circle(ctx: &CanvasRenderingContext2d, x: f64, y: f64, r: f64) {
    ctx.begin_path();
    let _ = ctx.arc(x, y, r, 0.0, TAU);
    ctx.fill();
}
