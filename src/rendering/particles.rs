use glam::Vec2;
use rand::Rng;
use tiny_skia::Color;

const PARTICLE_COUNT: usize = 30;
const SHRINK_PER_FRAME: f32 = 0.95;
const MIN_RADIUS: f32 = 0.5;
const COLORS: [[u8; 3]; 3] = [[0xff, 0x00, 0x00], [0xff, 0xaa, 0x00], [0xff, 0xff, 0x00]];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Offset from the burst origin (px).
    pub offset: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub rgb: [u8; 3],
}

impl Particle {
    pub fn color(&self) -> Color {
        Color::from_rgba8(self.rgb[0], self.rgb[1], self.rgb[2], 255)
    }
}

/// Fireball shown after a crash landing. Advances once per rendered frame.
#[derive(Debug, Clone, Default)]
pub struct ParticleBurst {
    particles: Vec<Particle>,
}

impl ParticleBurst {
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle {
                offset: Vec2::ZERO,
                velocity: Vec2::new(
                    (rng.gen::<f32>() - 0.5) * 10.0,
                    (rng.gen::<f32>() - 0.5) * 10.0,
                ),
                radius: 10.0 + rng.gen::<f32>() * 20.0,
                rgb: COLORS[rng.gen_range(0..COLORS.len())],
            })
            .collect();
        Self { particles }
    }

    pub fn update(&mut self) {
        for particle in &mut self.particles {
            particle.offset += particle.velocity;
            particle.radius *= SHRINK_PER_FRAME;
        }
        self.particles.retain(|p| p.radius > MIN_RADIUS);
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}
