use nalgebra::Vector3;
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Uniform};

use crate::particle::ParticleRecord;

/// Create initial particle states.
pub trait ParticleCreator {
    fn create_particle(&mut self) -> ParticleRecord;

    fn create_particles(&mut self, n: u64) -> Vec<ParticleRecord> {
        (0..n).map(|_| self.create_particle()).collect()
    }
}

/// A [`ParticleCreator`] sampling positions, velocities, and masses from
/// arbitrary distributions.
///
/// Position and velocity components are drawn independently per axis. The
/// mass sample is floored to an integer. The random source is owned, so
/// repeated invocations never share hidden state; pass a seeded generator
/// via [`DistrParticleCreator::with_rng`] for reproducible output.
pub struct DistrParticleCreator<R, PD, VD, MD>
where
    R: Rng,
    PD: Distribution<f64>,
    VD: Distribution<f64>,
    MD: Distribution<f64>,
{
    rng: R,
    position_distr: PD,
    velocity_distr: VD,
    mass_distr: MD,
}

impl<PD, VD, MD> DistrParticleCreator<ThreadRng, PD, VD, MD>
where
    PD: Distribution<f64>,
    VD: Distribution<f64>,
    MD: Distribution<f64>,
{
    pub fn new(position_distr: PD, velocity_distr: VD, mass_distr: MD) -> Self {
        Self::with_rng(position_distr, velocity_distr, mass_distr, rand::thread_rng())
    }
}

impl<R, PD, VD, MD> DistrParticleCreator<R, PD, VD, MD>
where
    R: Rng,
    PD: Distribution<f64>,
    VD: Distribution<f64>,
    MD: Distribution<f64>,
{
    pub fn with_rng(position_distr: PD, velocity_distr: VD, mass_distr: MD, rng: R) -> Self {
        Self {
            rng,
            position_distr,
            velocity_distr,
            mass_distr,
        }
    }
}

impl<R, PD, VD, MD> ParticleCreator for DistrParticleCreator<R, PD, VD, MD>
where
    R: Rng,
    PD: Distribution<f64>,
    VD: Distribution<f64>,
    MD: Distribution<f64>,
{
    fn create_particle(&mut self) -> ParticleRecord {
        let rng = &mut self.rng;

        let position = Vector3::new(
            self.position_distr.sample(rng),
            self.position_distr.sample(rng),
            self.position_distr.sample(rng),
        );
        let velocity = Vector3::new(
            self.velocity_distr.sample(rng),
            self.velocity_distr.sample(rng),
            self.velocity_distr.sample(rng),
        );
        let mass = self.mass_distr.sample(rng).floor() as u64;

        ParticleRecord::new(position, velocity, mass)
    }
}

/// The standard sampler: uniform distributions on the fixed ranges the
/// downstream simulator expects.
pub type StandardCreator<R = ThreadRng> =
    DistrParticleCreator<R, Uniform<f64>, Uniform<f64>, Uniform<f64>>;

impl StandardCreator {
    /// Standard distributions over a thread-local random source.
    #[must_use]
    pub fn standard() -> Self {
        StandardCreator::standard_with_rng(rand::thread_rng())
    }

    /// Standard distributions over a generator seeded for reproducibility.
    #[must_use]
    pub fn standard_seeded(seed: u64) -> StandardCreator<StdRng> {
        StandardCreator::standard_with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> StandardCreator<R> {
    /// Positions uniform on [-2, 2] per axis, velocities uniform on [-3, 3]
    /// per axis, masses uniform on [1e6, 1e12) after flooring.
    pub fn standard_with_rng(rng: R) -> Self {
        DistrParticleCreator::with_rng(
            Uniform::new_inclusive(-2., 2.),
            Uniform::new_inclusive(-3., 3.),
            Uniform::new(1e6, 1e12),
            rng,
        )
    }
}
