use rand::{Rng, SeedableRng, rngs::SmallRng};
use serde::Serialize;

const MAX_KEPT: usize = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PetalColor {
    Pink,
    White,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Petal {
    pub id: u64,
    // horizontal start, in px from the left edge
    pub start_x: f64,
    pub size: f64,
    // seconds
    pub duration: f64,
    pub delay: f64,
    pub rotation: f64,
    pub opacity: f64,
    pub color: PetalColor,
    pub wind: f64,
}

impl Petal {
    // horizontal sway keyframes, in px, for the fall animation
    pub fn sway(&self) -> [f64; 5] {
        let id = self.id as f64;
        [
            0.0,
            (id * 0.5).sin() * self.wind,
            (id * 1.2).sin() * -self.wind * 0.8,
            (id * 2.0).sin() * self.wind * 0.6,
            (id * 2.8).sin() * -self.wind * 0.4,
        ]
    }
}

// falling blossom petals
//
// each spawn() trims the field to the most recent petals and adds a handful of
// new ones, so the field never grows without bound even if no petal ever
// reports that its animation finished
#[derive(Clone, Debug)]
pub struct PetalField {
    rng: SmallRng,
    next_id: u64,
    width: f64,
    enabled: bool,
    petals: Vec<Petal>,
}

impl PetalField {
    pub fn new(seed: u64, width: f64, reduced_motion: bool) -> Self {
        PetalField {
            rng: SmallRng::seed_from_u64(seed),
            next_id: 0,
            width: width.max(0.0),
            enabled: !reduced_motion,
            petals: Vec::new(),
        }
    }

    pub fn petals(&self) -> &[Petal] {
        &self.petals
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.petals.clear();
        }
    }

    pub fn set_width(&mut self, width: f64) {
        self.width = width.max(0.0);
    }

    // returns how many petals were added
    pub fn spawn(&mut self) -> usize {
        if !self.enabled {
            return 0;
        }

        if self.petals.len() > MAX_KEPT {
            let excess = self.petals.len() - MAX_KEPT;
            self.petals.drain(..excess);
        }

        let count = self.rng.random_range(4..=6);
        for _ in 0..count {
            let petal = self.petal();
            self.petals.push(petal);
        }

        count
    }

    // a petal finished falling
    pub fn expire(&mut self, id: u64) -> bool {
        let before = self.petals.len();
        self.petals.retain(|p| p.id != id);
        self.petals.len() != before
    }

    fn petal(&mut self) -> Petal {
        let id = self.next_id;
        self.next_id += 1;

        let start_x = if self.width > 0.0 {
            self.rng.random_range(0.0..self.width)
        } else {
            0.0
        };

        Petal {
            id,
            start_x,
            size: self.rng.random_range(6.0..18.0),
            duration: self.rng.random_range(3.0..9.0),
            delay: self.rng.random_range(0.0..2.0),
            rotation: self.rng.random_range(0.0..360.0),
            opacity: self.rng.random_range(0.4..1.0),
            color: if self.rng.random_bool(0.7) {
                PetalColor::Pink
            } else {
                PetalColor::White
            },
            wind: self.rng.random_range(50.0..200.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_adds_four_to_six() {
        let mut field = PetalField::new(9, 800.0, false);

        for _ in 0..20 {
            let before = field.petals().len().min(MAX_KEPT);
            let added = field.spawn();

            assert!((4..=6).contains(&added));
            assert_eq!(field.petals().len(), before + added);
        }
    }

    #[test]
    fn test_field_is_bounded() {
        let mut field = PetalField::new(11, 800.0, false);

        for _ in 0..1000 {
            field.spawn();
        }

        assert!(field.petals().len() <= MAX_KEPT + 6);
    }

    #[test]
    fn test_petal_ranges() {
        let mut field = PetalField::new(5, 640.0, false);
        for _ in 0..10 {
            field.spawn();
        }

        for p in field.petals() {
            assert!((6.0..18.0).contains(&p.size));
            assert!((3.0..9.0).contains(&p.duration));
            assert!((0.0..2.0).contains(&p.delay));
            assert!((0.0..640.0).contains(&p.start_x));
            assert!((0.4..1.0).contains(&p.opacity));
        }
    }

    #[test]
    fn test_newest_petals_survive_trim() {
        let mut field = PetalField::new(2, 100.0, false);
        for _ in 0..30 {
            field.spawn();
        }

        let ids: Vec<u64> = field.petals().iter().map(|p| p.id).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(ids.last().copied(), Some(field.next_id - 1));
    }

    #[test]
    fn test_expire_removes_one() {
        let mut field = PetalField::new(4, 100.0, false);
        field.spawn();

        let id = field.petals()[0].id;
        assert!(field.expire(id));
        assert!(!field.expire(id));
    }

    #[test]
    fn test_reduced_motion_disables_spawning() {
        let mut field = PetalField::new(4, 100.0, true);

        assert_eq!(field.spawn(), 0);
        assert!(field.petals().is_empty());

        field.set_enabled(true);
        assert!(field.spawn() > 0);

        field.set_enabled(false);
        assert!(field.petals().is_empty());
    }
}
