//! Animated backdrop: vertical gradient, soft glow, star layer, faint grid.
//!
//! Depends only on the frame counter and canvas size.

use web_sys::CanvasRenderingContext2d;

use super::fill_circle;
use crate::color::Rgba;
use crate::settings::Settings;
use crate::sim::GameState;
use crate::ui::Layout;

const GRID_SPACING: f64 = 120.0;

pub fn draw(ctx: &CanvasRenderingContext2d, state: &GameState, layout: &Layout, settings: &Settings) {
    let (w, h) = (layout.width as f64, layout.height as f64);
    // drifts the gradient hues slowly; one unit every two seconds
    let t = state.frame as f64 * 0.5 / 60.0;

    draw_gradient(ctx, w, h, t);
    draw_glow(ctx, w, h);
    draw_stars(ctx, state, settings);
    draw_grid(ctx, state, w, h, settings);
}

fn draw_gradient(ctx: &CanvasRenderingContext2d, w: f64, h: f64, t: f64) {
    let top = Rgba::opaque(
        (200.0 + 10.0 * t.sin()) as u8,
        (230.0 + 8.0 * (t * 1.1).cos()) as u8,
        255,
    );
    let bottom = Rgba::opaque(
        (160.0 + 12.0 * (t + 1.2).cos()) as u8,
        (200.0 + 6.0 * (t * 0.8).sin()) as u8,
        (240.0 + 6.0 * (t * 1.3).cos()) as u8,
    );

    let gradient = ctx.create_linear_gradient(0.0, 0.0, 0.0, h);
    let _ = gradient.add_color_stop(0.0, &top.css());
    let _ = gradient.add_color_stop(1.0, &bottom.css());
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.fill_rect(0.0, 0.0, w, h);
}

/// Soft radial light centered on the upper third
fn draw_glow(ctx: &CanvasRenderingContext2d, w: f64, h: f64) {
    let (cx, cy) = (w / 2.0, h * 0.33);
    let Ok(gradient) = ctx.create_radial_gradient(cx, cy, 0.0, cx, cy, 300.0) else {
        return;
    };
    let _ = gradient.add_color_stop(0.0, "rgba(220,240,255,0.11)");
    let _ = gradient.add_color_stop(1.0, "rgba(220,240,255,0)");
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.fill_rect(cx - 300.0, cy - 300.0, 600.0, 600.0);
}

fn draw_stars(ctx: &CanvasRenderingContext2d, state: &GameState, settings: &Settings) {
    for star in &state.particles.stars {
        let alpha = if settings.reduced_motion {
            0.6
        } else {
            star.alpha(state.frame)
        };
        ctx.set_fill_style_str(&Rgba::new(230, 240, 255, alpha * 0.9).css());
        fill_circle(ctx, star.pos.x as f64, star.pos.y as f64, star.radius as f64);
    }
}

/// Very faint grid scrolling diagonally with the frame counter
fn draw_grid(ctx: &CanvasRenderingContext2d, state: &GameState, w: f64, h: f64, settings: &Settings) {
    let (gx, gy) = if settings.reduced_motion {
        (0.0, 0.0)
    } else {
        (
            (state.frame as f64 * 0.04) % GRID_SPACING,
            (state.frame as f64 * 0.03) % GRID_SPACING,
        )
    };

    ctx.set_stroke_style_str("rgba(190,210,230,0.04)");
    ctx.set_line_width(1.0);

    let mut x = -GRID_SPACING + gx;
    while x < w {
        ctx.begin_path();
        ctx.move_to(x, 0.0);
        ctx.line_to(x, h);
        ctx.stroke();
        x += GRID_SPACING;
    }
    let mut y = -GRID_SPACING + gy;
    while y < h {
        ctx.begin_path();
        ctx.move_to(0.0, y);
        ctx.line_to(w, y);
        ctx.stroke();
        y += GRID_SPACING;
    }
}
