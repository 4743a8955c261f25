use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::GenerateError;

/// Global parameters shared by every particle in a generated file.
///
/// Serialized as the configuration header, the first line of the output:
/// the five values space-separated in field order
/// `particle_count step_count step_size width height`.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Number of particle records following the header.
    pub particle_count: u64,
    /// Number of integration steps the downstream simulator will run.
    pub step_count: u64,
    /// Integration step size, in simulation time units.
    pub step_size: f64,
    /// World width.
    pub width: f64,
    /// World height.
    pub height: f64,
}

impl SimulationConfig {
    #[must_use]
    pub const fn new(
        particle_count: u64,
        step_count: u64,
        step_size: f64,
        width: f64,
        height: f64,
    ) -> Self {
        Self {
            particle_count,
            step_count,
            step_size,
            width,
            height,
        }
    }

    /// The long-run default profile: 3 particles over 2000 steps.
    #[must_use]
    pub const fn standard() -> Self {
        Self::new(3, 2000, 0.01, 1200., 800.)
    }

    /// The short default profile: 3 particles over 100 steps.
    #[must_use]
    pub const fn short() -> Self {
        Self::new(3, 100, 0.01, 1200., 800.)
    }

    /// Check the configuration invariants.
    ///
    /// `step_size`, `width`, and `height` must be finite and strictly
    /// positive. Zero `particle_count` or `step_count` are accepted; they
    /// produce a degenerate but well-formed file.
    pub fn validate(&self) -> Result<(), GenerateError> {
        check_positive("step_size", self.step_size)?;
        check_positive("width", self.width)?;
        check_positive("height", self.height)?;
        Ok(())
    }

    /// Build a configuration from positional command-line values.
    ///
    /// All-or-nothing: exactly five values are parsed in field order,
    /// anything fewer falls back to `fallback` wholesale, never a partial
    /// mix. The parsed configuration is validated before being returned.
    pub fn from_positional_args<S: AsRef<str>>(
        args: &[S],
        fallback: Self,
    ) -> Result<Self, GenerateError> {
        if args.len() != 5 {
            return Ok(fallback);
        }

        let config = Self::parse_fields(
            args[0].as_ref(),
            args[1].as_ref(),
            args[2].as_ref(),
            args[3].as_ref(),
            args[4].as_ref(),
        )?;
        config.validate()?;

        Ok(config)
    }

    fn parse_fields(
        particle_count: &str,
        step_count: &str,
        step_size: &str,
        width: &str,
        height: &str,
    ) -> Result<Self, GenerateError> {
        Ok(Self {
            particle_count: parse_field("particle_count", particle_count)?,
            step_count: parse_field("step_count", step_count)?,
            step_size: parse_field("step_size", step_size)?,
            width: parse_field("width", width)?,
            height: parse_field("height", height)?,
        })
    }
}

impl Display for SimulationConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.particle_count, self.step_count, self.step_size, self.width, self.height
        )
    }
}

/// Parses a configuration header line back into its five fields.
impl FromStr for SimulationConfig {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split_whitespace().collect();
        let [particle_count, step_count, step_size, width, height] = fields[..] else {
            return Err(GenerateError::parameter(
                "header",
                format!("expected 5 fields, found {}", fields.len()),
            ));
        };

        Self::parse_fields(particle_count, step_count, step_size, width, height)
    }
}

fn parse_field<T>(name: &'static str, raw: &str) -> Result<T, GenerateError>
where
    T: FromStr,
    T::Err: Display,
{
    raw.parse()
        .map_err(|err| GenerateError::parameter(name, format!("cannot parse `{raw}`: {err}")))
}

fn check_positive(name: &'static str, value: f64) -> Result<(), GenerateError> {
    if !value.is_finite() || value <= 0. {
        return Err(GenerateError::parameter(
            name,
            format!("must be finite and positive, got {value}"),
        ));
    }
    Ok(())
}
