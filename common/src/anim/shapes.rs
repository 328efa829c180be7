use rand::{Rng, SeedableRng, rngs::SmallRng};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Circle,
    Square,
    Triangle,
}

impl ShapeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Square => "square",
            ShapeKind::Triangle => "triangle",
        }
    }
}

// a floating outline in the geometric backdrop; positions are percentages
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Shape {
    pub id: usize,
    pub kind: ShapeKind,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub rotation: f64,
    pub opacity: f64,
    pub delay: f64,
    pub duration: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Density {
    Low,
    #[default]
    Medium,
    High,
}

impl Density {
    pub fn count(self) -> usize {
        match self {
            Density::Low => 15,
            Density::Medium => 25,
            Density::High => 40,
        }
    }
}

pub fn scatter_shapes(seed: u64, density: Density) -> Vec<Shape> {
    let mut rng = SmallRng::seed_from_u64(seed);

    (0..density.count())
        .map(|id| Shape {
            id,
            kind: match rng.random_range(0..3) {
                0 => ShapeKind::Circle,
                1 => ShapeKind::Square,
                _ => ShapeKind::Triangle,
            },
            x: rng.random_range(0.0..100.0),
            y: rng.random_range(0.0..100.0),
            size: rng.random_range(10.0..50.0),
            rotation: rng.random_range(0.0..360.0),
            opacity: rng.random_range(0.02..0.12),
            delay: rng.random_range(0.0..5.0),
            duration: rng.random_range(10.0..30.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_density_sets_count() {
        assert_eq!(scatter_shapes(1, Density::Low).len(), 15);
        assert_eq!(scatter_shapes(1, Density::High).len(), 40);
    }

    #[test]
    fn test_shapes_are_on_screen() {
        for shape in scatter_shapes(99, Density::High) {
            assert!((0.0..100.0).contains(&shape.x));
            assert!((0.0..100.0).contains(&shape.y));
        }
    }
}
