use rand::{Rng, SeedableRng, rngs::SmallRng};
use serde::Serialize;

const DAMPING: f64 = 0.99;
const REPULSION: f64 = 0.1;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Particle {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
    pub base_size: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Connection {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub opacity: f64,
}

// drifting dots that bounce inside a box and shy away from the pointer
#[derive(Clone, Debug)]
pub struct ParticleField {
    rng: SmallRng,
    count: usize,
    width: f64,
    height: f64,
    pointer: Option<(f64, f64)>,
    pub pointer_radius: f64,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new(seed: u64, count: usize, width: f64, height: f64) -> Self {
        let mut field = ParticleField {
            rng: SmallRng::seed_from_u64(seed),
            count,
            width: 0.0,
            height: 0.0,
            pointer: None,
            pointer_radius: 150.0,
            particles: Vec::new(),
        };

        field.resize(width, height);
        field
    }

    pub fn with_pointer_radius(mut self, radius: f64) -> Self {
        self.pointer_radius = radius;
        self
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn pointer(&self) -> Option<(f64, f64)> {
        self.pointer
    }

    // coordinates are relative to the field's own box
    pub fn set_pointer(&mut self, pointer: Option<(f64, f64)>) {
        self.pointer = pointer;
    }

    // re-seed the particles for a new box; a degenerate box holds nothing
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        self.particles.clear();

        if self.width <= 0.0 || self.height <= 0.0 {
            return;
        }

        for id in 0..self.count {
            let size = self.rng.random_range(1.0..4.0);
            let particle = Particle {
                id,
                x: self.rng.random_range(0.0..self.width),
                y: self.rng.random_range(0.0..self.height),
                vx: self.rng.random_range(-0.25..0.25),
                vy: self.rng.random_range(-0.25..0.25),
                size,
                base_size: size,
            };
            self.particles.push(particle);
        }
    }

    pub fn step(&mut self) {
        let (width, height) = (self.width, self.height);
        let pointer = self.pointer;
        let radius = self.pointer_radius;

        for p in self.particles.iter_mut() {
            p.x += p.vx;
            p.y += p.vy;

            if p.x <= 0.0 || p.x >= width {
                p.vx = -p.vx;
            }
            if p.y <= 0.0 || p.y >= height {
                p.vy = -p.vy;
            }

            p.x = p.x.clamp(0.0, width);
            p.y = p.y.clamp(0.0, height);

            p.size = p.base_size;

            if let Some((px, py)) = pointer {
                let (dx, dy) = (px - p.x, py - p.y);
                let distance = dx.hypot(dy);

                if distance < radius && radius > 0.0 {
                    let force = (radius - distance) / radius;
                    let angle = dy.atan2(dx);

                    p.size = p.base_size * (1.0 + force * 2.0);
                    p.vx -= angle.cos() * force * REPULSION;
                    p.vy -= angle.sin() * force * REPULSION;
                }
            }

            p.vx *= DAMPING;
            p.vy *= DAMPING;
        }
    }

    // every pair closer than max_distance, fading out with distance
    pub fn connections(&self, max_distance: f64) -> Vec<Connection> {
        let mut connections = Vec::new();

        if max_distance <= 0.0 {
            return connections;
        }

        for (i, a) in self.particles.iter().enumerate() {
            for b in self.particles[i + 1..].iter() {
                let distance = (a.x - b.x).hypot(a.y - b.y);

                if distance < max_distance {
                    connections.push(Connection {
                        x1: a.x,
                        y1: a.y,
                        x2: b.x,
                        y2: b.y,
                        opacity: (1.0 - distance / max_distance) * 0.5,
                    });
                }
            }
        }

        connections
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn particle(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
        Particle {
            id: 0,
            x,
            y,
            vx,
            vy,
            size: 2.0,
            base_size: 2.0,
        }
    }

    fn field_with(particles: Vec<Particle>) -> ParticleField {
        let mut field = ParticleField::new(7, 0, 100.0, 100.0);
        field.particles = particles;
        field
    }

    #[test]
    fn test_seeded_fields_are_reproducible() {
        let a = ParticleField::new(42, 20, 300.0, 200.0);
        let b = ParticleField::new(42, 20, 300.0, 200.0);

        assert_eq!(a.particles(), b.particles());
        assert_eq!(a.particles().len(), 20);
    }

    #[test]
    fn test_particles_stay_in_bounds() {
        let mut field = ParticleField::new(1, 50, 120.0, 80.0);
        field.set_pointer(Some((60.0, 40.0)));

        for _ in 0..500 {
            field.step();
        }

        for p in field.particles() {
            assert!((0.0..=120.0).contains(&p.x), "{p:?}");
            assert!((0.0..=80.0).contains(&p.y), "{p:?}");
        }
    }

    #[test]
    fn test_wall_reflects_velocity() {
        let mut field = field_with(vec![particle(99.8, 50.0, 0.5, 0.0)]);
        field.step();

        let p = &field.particles()[0];
        assert_eq!(p.x, 100.0);
        assert!(p.vx < 0.0);
    }

    #[test]
    fn test_pointer_repels_and_grows() {
        let mut field = field_with(vec![particle(50.0, 50.0, 0.0, 0.0)]);
        field.set_pointer(Some((60.0, 50.0)));
        field.step();

        let p = &field.particles()[0];
        assert!(p.vx < 0.0);
        assert!(p.size > p.base_size);
    }

    #[test]
    fn test_damping_without_pointer() {
        let mut field = field_with(vec![particle(50.0, 50.0, 1.0, 0.0)]);
        field.step();

        assert!((field.particles()[0].vx - 0.99).abs() < 1e-12);
    }

    #[test]
    fn test_connections_fade_with_distance() {
        let field = field_with(vec![
            particle(0.0, 0.0, 0.0, 0.0),
            particle(50.0, 0.0, 0.0, 0.0),
            particle(100.0, 100.0, 0.0, 0.0),
        ]);

        let connections = field.connections(100.0);

        assert_eq!(connections.len(), 1);
        assert!((connections[0].opacity - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_box_is_empty() {
        let mut field = ParticleField::new(3, 10, 0.0, 0.0);
        assert!(field.particles().is_empty());

        field.step();
        field.resize(10.0, 10.0);
        assert_eq!(field.particles().len(), 10);
    }
}
