//! Game state and the quiz state machine's data types.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::particles::ParticleField;
use crate::consts::*;
use crate::quiz::{self, OptionKey, Question};
use crate::settings::Settings;

/// Current screen of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Title screen, waiting for the start button
    Start,
    /// An active question awaiting an answer
    Question,
    /// Post-answer verdict, shown for a fixed countdown before advancing
    Feedback {
        ticks_left: u32,
        selected: OptionKey,
        correct: OptionKey,
    },
    /// Session summary with the restart button
    Result,
}

/// Complete game state, owned by the entry point and mutated only by `tick`
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG driving sampling and burst jitter
    pub rng: Pcg32,
    /// Full question pool, parsed once at startup
    pub pool: Vec<Question>,
    /// The questions sampled for this session
    pub active: Vec<Question>,
    /// Index into `active`; equal to `active.len()` once the session is over
    pub current: usize,
    /// Correct answers this session; resets only on session start
    pub score: u32,
    /// Tick counter driving star twinkle, grid scroll, and celebration cadence
    pub frame: u64,
    pub phase: Phase,
    /// Last known pointer position (canvas coordinates), for hover styling
    pub cursor: Option<Vec2>,
    /// Decorative layer; reset wholesale on resize
    pub particles: ParticleField,
}

impl GameState {
    /// Create a new game with the given seed and pool, sized to the canvas
    pub fn new(seed: u64, pool: Vec<Question>, settings: &Settings, width: f32, height: f32) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let particles = ParticleField::seeded(
            width,
            height,
            settings.mote_count(),
            settings.star_count(),
            &mut rng,
        );
        let mut state = Self {
            seed,
            rng,
            pool,
            active: Vec::new(),
            current: 0,
            score: 0,
            frame: 0,
            phase: Phase::Start,
            cursor: None,
            particles,
        };
        state.start_session();
        state
    }

    /// Re-sample the active questions and reset score and position.
    /// Used at creation and whenever the restart button is hit.
    pub fn start_session(&mut self) {
        self.active = quiz::sample(&self.pool, QUIZ_LENGTH, &mut self.rng);
        self.current = 0;
        self.score = 0;
        self.phase = Phase::Start;
    }

    /// The question being asked, if any remain
    pub fn current_question(&self) -> Option<&Question> {
        self.active.get(self.current)
    }

    pub fn total(&self) -> usize {
        self.active.len()
    }

    /// Score as a rounded percentage; an empty session reads as 0%
    pub fn percent(&self) -> u32 {
        let total = self.total().max(1);
        (self.score as f32 / total as f32 * 100.0).round() as u32
    }

    /// Result-screen message tier
    pub fn result_message(&self) -> &'static str {
        let total = self.total();
        if self.score as usize == total {
            "Perfect! You got every question right!"
        } else if self.score as usize >= total.div_ceil(2) {
            "Nice work! Keep it up!"
        } else {
            "Don't give up. Give it another shot!"
        }
    }

    /// Rebuild the decorative layer after a canvas resize
    pub fn reset_particles(&mut self, width: f32, height: f32, settings: &Settings) {
        self.particles.reset(
            width,
            height,
            settings.mote_count(),
            settings.star_count(),
            &mut self.rng,
        );
    }
}
