//! Fixed timestep update: input handling, transitions, scoring.
//!
//! `tick` is the only place game state changes. Rendering reads the state it
//! leaves behind.

use glam::Vec2;
use rand::Rng;

use super::state::{GameState, Phase};
use crate::color::palette;
use crate::consts::*;
use crate::quiz::OptionKey;
use crate::ui::Layout;

/// Input gathered since the previous tick. `click` is a one-shot the caller
/// clears after each tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Pointer position in canvas coordinates
    pub cursor: Option<Vec2>,
    /// A click or tap delivered this frame
    pub click: Option<Vec2>,
}

/// Advance the game by one tick
pub fn tick(state: &mut GameState, input: &TickInput, layout: &Layout) {
    state.frame += 1;
    if input.cursor.is_some() {
        state.cursor = input.cursor;
    }

    state.particles.update(layout.width, layout.height);

    match state.phase {
        Phase::Start => {
            if clicked(input, |p| layout.start.contains(p)) {
                state.phase = next_question_phase(state.current, state.total());
            }
        }

        Phase::Question => {
            if let Some(key) = input.click.and_then(|p| layout.answer_at(p)) {
                check_answer(state, key, layout);
            }
        }

        Phase::Feedback {
            ticks_left,
            selected,
            correct,
        } => {
            let remaining = ticks_left.saturating_sub(1);
            if remaining == 0 {
                state.current += 1;
                state.phase = next_question_phase(state.current, state.total());
            } else {
                state.phase = Phase::Feedback {
                    ticks_left: remaining,
                    selected,
                    correct,
                };
            }
        }

        Phase::Result => {
            celebrate(state, layout);
            if clicked(input, |p| layout.restart.contains(p)) {
                state.start_session();
            }
        }
    }
}

fn clicked(input: &TickInput, hit: impl Fn(Vec2) -> bool) -> bool {
    input.click.is_some_and(hit)
}

/// Where the machine goes when a question is (next) due: `Question` while any
/// remain, `Result` once the index reaches the end. Also covers the empty
/// active set, which skips straight to the summary.
fn next_question_phase(current: usize, total: usize) -> Phase {
    if current >= total {
        Phase::Result
    } else {
        Phase::Question
    }
}

/// Score the selection, spawn the verdict burst, and enter feedback
fn check_answer(state: &mut GameState, selected: OptionKey, layout: &Layout) {
    let Some(correct) = state.current_question().map(|q| q.correct) else {
        // empty active set; nothing to score
        return;
    };

    let origin = layout.answer_center(selected);
    if selected == correct {
        state.score += 1;
        state
            .particles
            .spawn_burst(origin, palette::BURST_SUCCESS, &mut state.rng);
    } else {
        state
            .particles
            .spawn_burst(origin, palette::BURST_FAILURE, &mut state.rng);
    }

    state.phase = Phase::Feedback {
        ticks_left: FEEDBACK_TICKS,
        selected,
        correct,
    };
}

/// On the result screen, good scores earn periodic golden bursts
fn celebrate(state: &mut GameState, layout: &Layout) {
    if state.frame % CELEBRATE_EVERY != 0 || state.percent() < CELEBRATE_MIN_PCT {
        return;
    }
    let origin = Vec2::new(
        state.rng.random_range(layout.width * 0.3..layout.width * 0.7),
        state.rng.random_range(layout.height * 0.2..layout.height * 0.6),
    );
    state
        .particles
        .spawn_burst(origin, palette::BURST_CELEBRATE, &mut state.rng);
}
