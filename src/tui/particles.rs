//! Floating particle backdrop for the idle panel
//!
//! A handful of glyphs drifting upward. Each one lives for a random number of
//! frames, then respawns somewhere new. Positions are kept in unit space so
//! resizing never strands a particle.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const GLYPHS: [char; 4] = ['·', '•', '∘', '✦'];
const DEFAULT_COUNT: usize = 24;
/// Frames a particle lives: MIN_LIFE plus up to LIFE_SPREAD
const MIN_LIFE: u32 = 60;
const LIFE_SPREAD: u32 = 120;

#[derive(Debug, Clone, Copy)]
pub struct Particle {
    /// Horizontal position in [0, 1)
    pub x: f32,
    /// Vertical position in [0, 1)
    pub y: f32,
    dx: f32,
    dy: f32,
    pub glyph: char,
    /// Index into the theme's particle colors
    pub color: usize,
    age: u32,
    life: u32,
}

impl Particle {
    fn spawn(rng: &mut impl Rng) -> Self {
        Self {
            x: rng.random_range(0.0..1.0),
            y: rng.random_range(0.0..1.0),
            dx: rng.random_range(-0.002..0.002),
            dy: -rng.random_range(0.004..0.014),
            glyph: GLYPHS[rng.random_range(0..GLYPHS.len())],
            color: rng.random_range(0..3),
            age: 0,
            life: rng.random_range(MIN_LIFE..MIN_LIFE + LIFE_SPREAD),
        }
    }
}

pub struct ParticleField {
    particles: Vec<Particle>,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(count: usize) -> Self {
        Self::with_rng(count, StdRng::from_rng(&mut rand::rng()))
    }

    /// Field driven by a caller-supplied generator (seeded in tests)
    pub fn with_rng(count: usize, mut rng: StdRng) -> Self {
        let particles = (0..count).map(|_| Particle::spawn(&mut rng)).collect();
        Self { particles, rng }
    }

    /// Advance one animation frame
    pub fn tick(&mut self) {
        for p in &mut self.particles {
            p.age += 1;
            if p.age >= p.life {
                *p = Particle::spawn(&mut self.rng);
                continue;
            }
            p.x = wrap(p.x + p.dx);
            p.y = wrap(p.y + p.dy);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Cell coordinates of each particle inside a `width` x `height` area
    pub fn cells(&self, width: u16, height: u16) -> impl Iterator<Item = (u16, u16, &Particle)> {
        self.particles.iter().filter_map(move |p| {
            if width == 0 || height == 0 {
                return None;
            }
            let x = ((p.x * width as f32) as u16).min(width - 1);
            let y = ((p.y * height as f32) as u16).min(height - 1);
            Some((x, y, p))
        })
    }
}

impl Default for ParticleField {
    fn default() -> Self {
        Self::new(DEFAULT_COUNT)
    }
}

fn wrap(v: f32) -> f32 {
    let w = v.rem_euclid(1.0);
    // rem_euclid can round up to exactly 1.0 for tiny negatives
    if w >= 1.0 {
        0.0
    } else {
        w
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_unit(v: f32) -> bool {
        (0.0..1.0).contains(&v)
    }

    #[test]
    fn particles_stay_in_bounds_while_drifting() {
        let mut field = ParticleField::new(50);
        for _ in 0..1000 {
            field.tick();
        }
        assert_eq!(field.particles().len(), 50);
        assert!(field.particles().iter().all(|p| in_unit(p.x) && in_unit(p.y)));
    }

    #[test]
    fn expired_particles_respawn() {
        let mut field = ParticleField::new(10);
        for _ in 0..(MIN_LIFE + LIFE_SPREAD) {
            field.tick();
        }
        assert!(field
            .particles()
            .iter()
            .all(|p| p.age < MIN_LIFE + LIFE_SPREAD));
    }

    #[test]
    fn same_seed_same_field() {
        let positions = |field: &ParticleField| -> Vec<(f32, f32, char)> {
            field.particles().iter().map(|p| (p.x, p.y, p.glyph)).collect()
        };

        let mut a = ParticleField::with_rng(8, StdRng::seed_from_u64(7));
        let mut b = ParticleField::with_rng(8, StdRng::seed_from_u64(7));
        for _ in 0..(MIN_LIFE * 2) {
            a.tick();
            b.tick();
        }
        assert_eq!(positions(&a), positions(&b));
        assert!(a.particles().iter().all(|p| p.color < 3));
    }

    #[test]
    fn cells_fit_the_area() {
        let field = ParticleField::new(30);
        for (x, y, _) in field.cells(7, 3) {
            assert!(x < 7 && y < 3);
        }
        assert_eq!(field.cells(0, 10).count(), 0);
    }

    #[test]
    fn wrap_handles_edges() {
        assert_eq!(wrap(1.0), 0.0);
        assert!((wrap(-0.25) - 0.75).abs() < 1e-6);
        assert!(in_unit(wrap(-1e-9)));
    }
}
