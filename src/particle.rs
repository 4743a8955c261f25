use std::fmt::{self, Display, Formatter};

use nalgebra::Vector3;

/// A single body's starting state: one record line of the output file.
///
/// Serialized as seven space-separated values in field order
/// `px py pz vx vy vz mass`.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleRecord {
    pub position: Vector3<f64>,
    pub velocity: Vector3<f64>,
    pub mass: u64,
}

impl ParticleRecord {
    #[must_use]
    pub const fn new(position: Vector3<f64>, velocity: Vector3<f64>, mass: u64) -> Self {
        Self {
            position,
            velocity,
            mass,
        }
    }
}

impl Display for ParticleRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {}",
            self.position.x,
            self.position.y,
            self.position.z,
            self.velocity.x,
            self.velocity.y,
            self.velocity.z,
            self.mass
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_format() {
        let record = ParticleRecord::new(
            Vector3::new(1., -0.5, 0.25),
            Vector3::new(-2., 0.125, 3.),
            1_000_000,
        );
        assert_eq!(record.to_string(), "1 -0.5 0.25 -2 0.125 3 1000000");
    }

    #[test]
    fn test_record_field_count() {
        let record = ParticleRecord::new(Vector3::zeros(), Vector3::zeros(), 42);
        assert_eq!(record.to_string().split_whitespace().count(), 7);
    }
}
