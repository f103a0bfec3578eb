//! Per-phase screen drawing.
//!
//! Each routine is a pure read of the state; transitions and countdowns live
//! in `sim::tick`.

use web_sys::CanvasRenderingContext2d;

use crate::color::{Rgba, grade_color, palette};
use crate::quiz::OptionKey;
use crate::sim::GameState;
use crate::ui::{Button, ButtonShape, Layout};

pub fn draw_start(ctx: &CanvasRenderingContext2d, state: &GameState, layout: &Layout) {
    let (cx, cy) = (layout.width as f64 / 2.0, layout.height as f64 / 2.0);

    set_text(ctx, "bold 48px sans-serif", &palette::TEXT_DARK);
    let _ = ctx.fill_text("Stellar Quiz", cx, cy - 100.0);

    set_text(ctx, "24px sans-serif", &palette::TEXT_DARK);
    let subtitle = format!(
        "{} of {} questions, drawn at random",
        state.total(),
        state.pool.len()
    );
    let _ = ctx.fill_text(&subtitle, cx, cy - 30.0);

    draw_button(ctx, &layout.start, None, hovered(state, &layout.start));
}

pub fn draw_question(ctx: &CanvasRenderingContext2d, state: &GameState, layout: &Layout) {
    let Some(question) = state.current_question() else {
        return;
    };
    let cx = layout.width as f64 / 2.0;

    set_text(ctx, "28px sans-serif", &palette::TEXT_DARK);
    let progress = format!("Question {} of {}", state.current + 1, state.total());
    let _ = ctx.fill_text(&progress, cx, 50.0);

    set_text(ctx, "32px sans-serif", &palette::TEXT_DARK);
    let _ = ctx.fill_text_with_max_width(
        &question.prompt,
        cx,
        110.0,
        (layout.width as f64 - 160.0).max(100.0),
    );

    for key in OptionKey::ALL {
        let button = layout.answer(key);
        let label = format!("{}. {}", key, question.option(key));
        draw_button(ctx, button, Some(&label), hovered(state, button));
    }
}

pub fn draw_feedback(
    ctx: &CanvasRenderingContext2d,
    state: &GameState,
    layout: &Layout,
    selected: OptionKey,
    correct: OptionKey,
) {
    let (w, h) = (layout.width as f64, layout.height as f64);

    // dim the scene but keep the stars and particles visible underneath
    ctx.set_fill_style_str("rgba(0,0,0,0.55)");
    ctx.fill_rect(0.0, 0.0, w, h);

    if let Some(question) = state.current_question() {
        set_text(ctx, "28px sans-serif", &palette::TEXT_LIGHT);
        let _ = ctx.fill_text_with_max_width(&question.prompt, w / 2.0, 100.0, (w - 160.0).max(100.0));

        for key in OptionKey::ALL {
            let button = layout.answer(key);
            let fill = if key == correct {
                palette::ANSWER_CORRECT
            } else if key == selected {
                palette::ANSWER_WRONG
            } else {
                palette::ANSWER_NEUTRAL
            };
            let label = format!("{}. {}", key, question.option(key));
            draw_rect_button(ctx, button, &label, fill, true);
        }
    }

    let message = if selected == correct {
        "Correct!".to_string()
    } else {
        format!("Incorrect... the correct answer is {correct}")
    };
    set_text(ctx, "bold 48px sans-serif", &palette::TEXT_LIGHT);
    let _ = ctx.fill_text(&message, w / 2.0, h * 0.78);
}

pub fn draw_result(ctx: &CanvasRenderingContext2d, state: &GameState, layout: &Layout) {
    let cx = layout.width as f64 / 2.0;

    set_text(ctx, "bold 50px sans-serif", &palette::TEXT_LIGHT);
    let _ = ctx.fill_text("Quiz Complete!", cx, 120.0);

    set_text(ctx, "28px sans-serif", &palette::TEXT_LIGHT);
    let score_line = format!("Score: {} / {}", state.score, state.total());
    let _ = ctx.fill_text(&score_line, cx, 190.0);

    let percent = state.percent();
    set_text(ctx, "bold 72px sans-serif", &grade_color(percent));
    let _ = ctx.fill_text(&format!("{percent}%"), cx, 280.0);

    set_text(ctx, "24px sans-serif", &palette::TEXT_DARK);
    let _ = ctx.fill_text(state.result_message(), cx, 360.0);

    draw_button(ctx, &layout.restart, None, hovered(state, &layout.restart));
}

fn hovered(state: &GameState, button: &Button) -> bool {
    state.cursor.is_some_and(|c| button.contains(c))
}

fn set_text(ctx: &CanvasRenderingContext2d, font: &str, color: &Rgba) {
    ctx.set_font(font);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.set_fill_style_str(&color.css());
}

/// Draw a button with hover styling; `label` overrides the fixed label
fn draw_button(ctx: &CanvasRenderingContext2d, button: &Button, label: Option<&str>, hovered: bool) {
    let text = label.unwrap_or(button.label);
    match button.shape {
        ButtonShape::Circle { center, radius } => {
            let fill = if hovered { button.hover } else { button.fill };
            ctx.set_fill_style_str(&fill.css());
            super::fill_circle(ctx, center.x as f64, center.y as f64, radius as f64);
            if hovered {
                ctx.set_stroke_style_str("rgba(255,255,255,1)");
                ctx.set_line_width(2.0);
                ctx.stroke();
            }

            let size = (radius * 0.35).max(14.0);
            set_text(ctx, &format!("bold {size:.0}px sans-serif"), &palette::TEXT_LIGHT);
            let _ = ctx.fill_text(text, center.x as f64, center.y as f64);
        }
        ButtonShape::Rect { .. } => {
            let fill = if hovered { button.hover } else { button.fill };
            draw_rect_button(ctx, button, text, fill, hovered);
        }
    }
}

/// Rounded rect body plus centered label; `outlined` adds the white border
fn draw_rect_button(
    ctx: &CanvasRenderingContext2d,
    button: &Button,
    text: &str,
    fill: Rgba,
    outlined: bool,
) {
    let ButtonShape::Rect { origin, size } = button.shape else {
        return;
    };
    let (x, y) = (origin.x as f64, origin.y as f64);
    let (w, h) = (size.x as f64, size.y as f64);

    rounded_rect_path(ctx, x, y, w, h, 10.0);
    ctx.set_fill_style_str(&fill.css());
    ctx.fill();
    if outlined {
        ctx.set_stroke_style_str("rgba(255,255,255,0.86)");
        ctx.set_line_width(1.5);
        ctx.stroke();
    }

    set_text(ctx, "20px sans-serif", &palette::TEXT_LIGHT);
    let _ = ctx.fill_text_with_max_width(text, x + w / 2.0, y + h / 2.0, (w - 24.0).max(20.0));
}

fn rounded_rect_path(ctx: &CanvasRenderingContext2d, x: f64, y: f64, w: f64, h: f64, r: f64) {
    let r = r.min(w / 2.0).min(h / 2.0);
    ctx.begin_path();
    ctx.move_to(x + r, y);
    let _ = ctx.arc_to(x + w, y, x + w, y + h, r);
    let _ = ctx.arc_to(x + w, y + h, x, y + h, r);
    let _ = ctx.arc_to(x, y + h, x, y, r);
    let _ = ctx.arc_to(x, y, x + w, y, r);
    ctx.close_path();
}
