//! A short confetti burst played when a list is finished.
//!
//! Positions are normalized to the screen (0.0..1.0 on both axes) so the
//! animation doesn't care about terminal size. Everything is deterministic:
//! particle angles are spread evenly across each burst and speeds vary along
//! a golden-ratio sequence.

/// Total particle budget shared by the bursts
const PARTICLE_COUNT: usize = 200;
/// Launch height, as a fraction of the screen from the top
const ORIGIN_Y: f32 = 0.7;
const ORIGIN_X: f32 = 0.5;
/// Normalized distance per tick per unit of velocity
const SPEED: f32 = 0.0012;
/// Constant downward drift per tick
const GRAVITY: f32 = 0.012;
/// Particles are dropped after this many ticks regardless of position
pub const MAX_TICKS: u32 = 200;

struct Burst {
    ratio: f32,
    spread: f32,
    start_velocity: f32,
    decay: f32,
    scalar: f32,
}

const BURSTS: [Burst; 5] = [
    Burst { ratio: 0.25, spread: 26.0, start_velocity: 55.0, decay: 0.9, scalar: 1.0 },
    Burst { ratio: 0.2, spread: 60.0, start_velocity: 45.0, decay: 0.9, scalar: 1.0 },
    Burst { ratio: 0.35, spread: 100.0, start_velocity: 45.0, decay: 0.91, scalar: 0.8 },
    Burst { ratio: 0.1, spread: 120.0, start_velocity: 25.0, decay: 0.92, scalar: 1.2 },
    Burst { ratio: 0.1, spread: 120.0, start_velocity: 45.0, decay: 0.9, scalar: 1.0 },
];

#[derive(Debug, Clone)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    angle: f32,
    velocity: f32,
    decay: f32,
    pub glyph: char,
    pub color: usize,
}

#[derive(Debug, Clone)]
pub struct Confetti {
    particles: Vec<Particle>,
    ticks: u32,
}

fn glyph_for(scalar: f32, i: usize) -> char {
    if scalar < 1.0 {
        return '\u{00B7}'; // ·
    }
    if scalar > 1.0 {
        return '\u{25A0}'; // ■
    }
    ['*', '\u{2022}', '\u{25AA}', '+', '\u{25C6}'][i % 5]
}

impl Confetti {
    pub fn launch() -> Self {
        let mut particles = Vec::with_capacity(PARTICLE_COUNT);
        let mut color = 0;
        for burst in &BURSTS {
            let n = (PARTICLE_COUNT as f32 * burst.ratio).round() as usize;
            for i in 0..n {
                let t = if n > 1 { i as f32 / (n - 1) as f32 } else { 0.5 };
                let degrees = 90.0 + burst.spread * (t - 0.5);
                // 0.5..1.5 of the start velocity, low-discrepancy
                let jitter = (i as f32 * 0.618_034).fract();
                particles.push(Particle {
                    x: ORIGIN_X,
                    y: ORIGIN_Y,
                    angle: degrees.to_radians(),
                    velocity: burst.start_velocity * (0.5 + jitter),
                    decay: burst.decay,
                    glyph: glyph_for(burst.scalar, i),
                    color,
                });
                color += 1;
            }
        }
        Confetti {
            particles,
            ticks: 0,
        }
    }

    /// Advance one animation frame
    pub fn step(&mut self) {
        for p in &mut self.particles {
            p.x += p.angle.cos() * p.velocity * SPEED;
            p.y -= p.angle.sin() * p.velocity * SPEED;
            p.y += GRAVITY;
            p.velocity *= p.decay;
        }
        self.particles.retain(|p| p.y <= 1.0 && (0.0..=1.0).contains(&p.x));
        self.ticks += 1;
    }

    pub fn is_done(&self) -> bool {
        self.particles.is_empty() || self.ticks >= MAX_TICKS
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launch_uses_the_whole_budget() {
        let c = Confetti::launch();
        assert_eq!(c.particles().len(), PARTICLE_COUNT);
        assert!(!c.is_done());
    }

    #[test]
    fn particles_rise_then_fall() {
        let mut c = Confetti::launch();
        c.step();
        assert!(c.particles().iter().any(|p| p.y < ORIGIN_Y));
        while !c.is_done() {
            c.step();
        }
        assert!(c.particles().is_empty(), "confetti should clear the screen on its own");
    }

    #[test]
    fn spread_is_symmetric() {
        let c = Confetti::launch();
        let mut moved = c.clone();
        moved.step();
        let left = moved.particles().iter().filter(|p| p.x < ORIGIN_X - 1e-5).count();
        let right = moved.particles().iter().filter(|p| p.x > ORIGIN_X + 1e-5).count();
        assert!(left > 0 && right > 0);
        assert!(left.abs_diff(right) <= 5);
    }
}
