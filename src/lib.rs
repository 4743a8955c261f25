//! Generate random initial states for N-body simulations.
//!
//! The output is a plain text file with one configuration header line
//! followed by one record line per particle:
//!
//! ```text
//! <particle_count> <step_count> <step_size> <width> <height>
//! <px> <py> <pz> <vx> <vy> <vz> <mass>
//! ...
//! ```
//!
//! Fields are space-separated and parsed positionally by the downstream
//! simulator, so field order and count are part of the contract.
//!
//! ```no_run
//! use init_state::{generate, SimulationConfig, StandardCreator};
//!
//! let config = SimulationConfig::standard();
//! let mut creator = StandardCreator::standard_seeded(42);
//! generate("init_state.txt", &config, &mut creator)?;
//! # Ok::<(), init_state::GenerateError>(())
//! ```

pub mod config;
pub mod error;
pub mod particle;
pub mod particle_creator;
pub mod writer;

pub use config::SimulationConfig;
pub use error::GenerateError;
pub use particle::ParticleRecord;
pub use particle_creator::{DistrParticleCreator, ParticleCreator, StandardCreator};
pub use writer::{generate, generate_atomic, write_initial_state};
