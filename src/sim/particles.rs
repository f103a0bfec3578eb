//! Decorative particle layer: ambient motes, answer bursts, drifting stars.
//!
//! Purely visual; nothing here feeds back into scoring or transitions. All
//! motion is per-tick (60 Hz), never wall-clock.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::color::Rgba;
use crate::consts::*;
use crate::remap;

/// Long-lived background particle; wraps at the canvas edges
#[derive(Debug, Clone)]
pub struct Mote {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub alpha: f32,
}

/// Short-lived particle spawned in a burst at an answered button
#[derive(Debug, Clone)]
pub struct Burst {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Rgba,
    /// Remaining ticks; removed at zero
    pub life: u32,
    /// Initial lifetime, the denominator of the fade
    pub max_life: u32,
    pub init_alpha: f32,
}

impl Burst {
    /// Alpha fades linearly from `init_alpha` to 0 over the particle's life
    pub fn alpha(&self) -> f32 {
        self.init_alpha * self.life as f32 / self.max_life as f32
    }
}

/// Background star with sinusoidal twinkle and slow horizontal drift
#[derive(Debug, Clone)]
pub struct Star {
    pub pos: Vec2,
    pub radius: f32,
    /// Per-star twinkle rate
    pub twinkle: f32,
    /// Per-star twinkle phase offset
    pub phase: f32,
    /// Horizontal drift per tick
    pub drift: f32,
}

impl Star {
    /// Rendered alpha at the given frame
    pub fn alpha(&self, frame: u64) -> f32 {
        let s = (frame as f32 * 0.05 * self.twinkle + self.phase).sin();
        remap(s, -1.0, 1.0, STAR_ALPHA_MIN, STAR_ALPHA_MAX)
    }
}

/// The three independent particle lists, updated once per tick
#[derive(Debug, Clone, Default)]
pub struct ParticleField {
    pub motes: Vec<Mote>,
    pub bursts: Vec<Burst>,
    pub stars: Vec<Star>,
}

impl ParticleField {
    /// A field with no particles at all (useful headless)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Populate motes and stars across a canvas of the given size
    pub fn seeded(width: f32, height: f32, motes: usize, stars: usize, rng: &mut Pcg32) -> Self {
        let mut field = Self::empty();
        field.reset(width, height, motes, stars, rng);
        field
    }

    /// Rebuild the ambient layers from scratch; bursts are dropped too
    pub fn reset(&mut self, width: f32, height: f32, motes: usize, stars: usize, rng: &mut Pcg32) {
        self.bursts.clear();

        self.motes.clear();
        for _ in 0..motes {
            self.motes.push(Mote {
                pos: Vec2::new(rng.random_range(0.0..width), rng.random_range(0.0..height)),
                vel: Vec2::new(
                    rng.random_range(-MOTE_SPEED..MOTE_SPEED),
                    rng.random_range(-MOTE_SPEED..MOTE_SPEED),
                ),
                radius: rng.random_range(MOTE_RADIUS_MIN..MOTE_RADIUS_MAX),
                alpha: rng.random_range(MOTE_ALPHA_MIN..MOTE_ALPHA_MAX),
            });
        }

        self.stars.clear();
        for _ in 0..stars {
            self.stars.push(Star {
                pos: Vec2::new(
                    rng.random_range(0.0..width),
                    rng.random_range(0.0..height * STAR_BAND),
                ),
                radius: rng.random_range(STAR_RADIUS_MIN..STAR_RADIUS_MAX),
                twinkle: rng.random_range(STAR_TWINKLE_MIN..STAR_TWINKLE_MAX),
                phase: rng.random_range(0.0..TAU),
                drift: rng.random_range(-STAR_DRIFT..STAR_DRIFT),
            });
        }
    }

    /// Advance every particle by one tick
    pub fn update(&mut self, width: f32, height: f32) {
        for mote in &mut self.motes {
            mote.pos += mote.vel;
            mote.pos.x = wrap(mote.pos.x, width);
            mote.pos.y = wrap(mote.pos.y, height);
        }

        for burst in &mut self.bursts {
            burst.pos += burst.vel;
            burst.life -= 1;
        }
        self.bursts.retain(|b| b.life > 0);

        for star in &mut self.stars {
            star.pos.x = wrap(star.pos.x + star.drift, width);
        }
    }

    /// Spawn a fixed-size burst around `origin`, tinted `color`
    pub fn spawn_burst(&mut self, origin: Vec2, color: Rgba, rng: &mut Pcg32) {
        for _ in 0..BURST_COUNT {
            let angle = rng.random_range(0.0..TAU);
            let speed = rng.random_range(BURST_SPEED_MIN..BURST_SPEED_MAX);
            let life = rng.random_range(BURST_LIFE_MIN..BURST_LIFE_MAX);
            let jitter = Vec2::new(
                rng.random_range(-BURST_JITTER..BURST_JITTER),
                rng.random_range(-BURST_JITTER..BURST_JITTER),
            );
            self.bursts.push(Burst {
                pos: origin + jitter,
                vel: Vec2::new(angle.cos(), angle.sin()) * speed,
                radius: rng.random_range(BURST_RADIUS_MIN..BURST_RADIUS_MAX),
                color,
                life,
                max_life: life,
                init_alpha: rng.random_range(BURST_ALPHA_MIN..BURST_ALPHA_MAX),
            });
        }
    }
}

/// Wrap a coordinate back into `[0, extent)`
#[inline]
fn wrap(v: f32, extent: f32) -> f32 {
    if v < 0.0 {
        v + extent
    } else if v >= extent {
        v - extent
    } else {
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::palette;
    use proptest::prelude::*;
    use rand::SeedableRng;

    const W: f32 = 800.0;
    const H: f32 = 600.0;

    #[test]
    fn test_spawn_burst_count() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut field = ParticleField::empty();
        field.spawn_burst(Vec2::new(100.0, 100.0), palette::BURST_SUCCESS, &mut rng);
        assert_eq!(field.bursts.len(), BURST_COUNT);
        for b in &field.bursts {
            assert!((BURST_LIFE_MIN..BURST_LIFE_MAX).contains(&b.life));
            assert_eq!(b.life, b.max_life);
        }
    }

    #[test]
    fn test_burst_drains_to_zero_within_max_life() {
        let mut rng = Pcg32::seed_from_u64(2);
        let mut field = ParticleField::empty();
        field.spawn_burst(Vec2::new(50.0, 50.0), palette::BURST_FAILURE, &mut rng);

        let mut frames = 0;
        while !field.bursts.is_empty() {
            field.update(W, H);
            frames += 1;
            assert!(frames <= BURST_LIFE_MAX, "burst outlived its maximum life");
        }
        assert_eq!(field.bursts.len(), 0);
    }

    #[test]
    fn test_burst_alpha_fades_linearly() {
        let burst = Burst {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius: 4.0,
            color: palette::BURST_SUCCESS,
            life: 40,
            max_life: 80,
            init_alpha: 1.0,
        };
        assert!((burst.alpha() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_reset_drops_bursts_and_repopulates() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut field = ParticleField::seeded(W, H, 10, 20, &mut rng);
        field.spawn_burst(Vec2::new(10.0, 10.0), palette::BURST_SUCCESS, &mut rng);
        field.reset(400.0, 300.0, 5, 8, &mut rng);
        assert!(field.bursts.is_empty());
        assert_eq!(field.motes.len(), 5);
        assert_eq!(field.stars.len(), 8);
        for m in &field.motes {
            assert!(m.pos.x >= 0.0 && m.pos.x < 400.0);
            assert!(m.pos.y >= 0.0 && m.pos.y < 300.0);
        }
    }

    proptest! {
        #[test]
        fn prop_motes_stay_in_bounds(seed: u64, frames in 1usize..500) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut field = ParticleField::seeded(W, H, 30, 0, &mut rng);
            for _ in 0..frames {
                field.update(W, H);
            }
            for m in &field.motes {
                prop_assert!(m.pos.x >= 0.0 && m.pos.x < W);
                prop_assert!(m.pos.y >= 0.0 && m.pos.y < H);
            }
        }

        #[test]
        fn prop_stars_wrap_horizontally(seed: u64, frames in 1usize..500) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut field = ParticleField::seeded(W, H, 0, 30, &mut rng);
            for _ in 0..frames {
                field.update(W, H);
            }
            for s in &field.stars {
                prop_assert!(s.pos.x >= 0.0 && s.pos.x < W);
            }
        }
    }

    #[test]
    fn test_star_alpha_within_band() {
        let star = Star {
            pos: Vec2::ZERO,
            radius: 1.0,
            twinkle: 1.0,
            phase: 0.3,
            drift: 0.0,
        };
        for frame in 0..200 {
            let a = star.alpha(frame);
            assert!((STAR_ALPHA_MIN..=STAR_ALPHA_MAX).contains(&a));
        }
    }
}
