//! Deterministic game logic
//!
//! Everything that mutates game state lives here. This module must stay pure
//! and deterministic:
//! - Fixed timestep only (frame-counted, never wall-clock)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod particles;
pub mod state;
pub mod tick;

pub use particles::{Burst, Mote, ParticleField, Star};
pub use state::{GameState, Phase};
pub use tick::{TickInput, tick};
