use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::config::SimulationConfig;
use crate::error::GenerateError;
use crate::particle_creator::ParticleCreator;

/// Write a full initial state into `sink`: the configuration header
/// followed by one freshly sampled record line per particle.
///
/// On success the sink holds exactly `particle_count + 1` newline-terminated
/// lines. The configuration is validated before anything is written.
pub fn write_initial_state(
    mut sink: impl Write,
    config: &SimulationConfig,
    creator: &mut impl ParticleCreator,
) -> Result<(), GenerateError> {
    config.validate()?;

    writeln!(sink, "{config}")?;
    for _ in 0..config.particle_count {
        writeln!(sink, "{}", creator.create_particle())?;
    }
    sink.flush()?;

    Ok(())
}

/// Generate an initial state file at `path`, creating or truncating it.
///
/// An invalid configuration is rejected before the file is opened, so a
/// pre-existing file at `path` stays untouched. An I/O failure mid-write
/// leaves the partial file as-is; use [`generate_atomic`] when that matters.
pub fn generate(
    path: impl AsRef<Path>,
    config: &SimulationConfig,
    creator: &mut impl ParticleCreator,
) -> Result<(), GenerateError> {
    config.validate()?;

    let file = BufWriter::new(File::create(path)?);
    write_initial_state(file, config, creator)
}

/// Like [`generate`], but writes to a temporary file in the target's
/// directory and renames it over `path` once the state is complete, so the
/// destination never holds a half-written file.
pub fn generate_atomic(
    path: impl AsRef<Path>,
    config: &SimulationConfig,
    creator: &mut impl ParticleCreator,
) -> Result<(), GenerateError> {
    config.validate()?;

    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    write_initial_state(BufWriter::new(&mut tmp), config, creator)?;
    tmp.persist(path).map_err(|err| GenerateError::Io(err.error))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::particle_creator::StandardCreator;

    fn sample_config() -> SimulationConfig {
        SimulationConfig::new(3, 100, 0.01, 1200., 800.)
    }

    #[test]
    fn test_line_count_and_header() {
        let mut out = Vec::new();
        write_initial_state(
            &mut out,
            &sample_config(),
            &mut StandardCreator::standard_seeded(3),
        )
        .unwrap();

        let out = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "3 100 0.01 1200 800");
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn test_record_lines_conform() {
        let mut out = Vec::new();
        write_initial_state(
            &mut out,
            &sample_config(),
            &mut StandardCreator::standard_seeded(11),
        )
        .unwrap();

        let out = String::from_utf8(out).unwrap();
        for line in out.lines().skip(1) {
            let fields: Vec<&str> = line.split_whitespace().collect();
            assert_eq!(fields.len(), 7);

            for p in &fields[0..3] {
                let p: f64 = p.parse().unwrap();
                assert!((-2. ..=2.).contains(&p));
            }
            for v in &fields[3..6] {
                let v: f64 = v.parse().unwrap();
                assert!((-3. ..=3.).contains(&v));
            }
            let mass: u64 = fields[6].parse().unwrap();
            assert!((1_000_000..1_000_000_000_000).contains(&mass));
        }
    }

    #[test]
    fn test_header_round_trips() {
        let config = SimulationConfig::new(7, 350, 0.005, 1024., 768.);
        let mut out = Vec::new();
        write_initial_state(&mut out, &config, &mut StandardCreator::standard_seeded(5)).unwrap();

        let out = String::from_utf8(out).unwrap();
        let parsed: SimulationConfig = out.lines().next().unwrap().parse().unwrap();
        assert_eq!(parsed.particle_count, config.particle_count);
        assert_eq!(parsed.step_count, config.step_count);
        assert_abs_diff_eq!(parsed.step_size, config.step_size);
        assert_abs_diff_eq!(parsed.width, config.width);
        assert_abs_diff_eq!(parsed.height, config.height);
    }

    #[test]
    fn test_zero_particles_header_only() {
        let config = SimulationConfig::new(0, 100, 0.01, 1200., 800.);
        let mut out = Vec::new();
        write_initial_state(&mut out, &config, &mut StandardCreator::standard_seeded(9)).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "0 100 0.01 1200 800\n");
    }

    #[test]
    fn test_invalid_config_writes_nothing() {
        let config = SimulationConfig::new(3, 100, 0., 1200., 800.);
        let mut out = Vec::new();
        let err = write_initial_state(
            &mut out,
            &config,
            &mut StandardCreator::standard_seeded(4),
        )
        .unwrap_err();

        assert!(matches!(err, GenerateError::Parameter { .. }));
        assert!(out.is_empty());
    }

    #[test]
    fn test_repeated_runs_share_header_not_particles() {
        let config = sample_config();

        let mut first = Vec::new();
        write_initial_state(&mut first, &config, &mut StandardCreator::standard_seeded(1))
            .unwrap();
        let mut second = Vec::new();
        write_initial_state(&mut second, &config, &mut StandardCreator::standard_seeded(2))
            .unwrap();

        let first = String::from_utf8(first).unwrap();
        let second = String::from_utf8(second).unwrap();
        let first_lines: Vec<&str> = first.lines().collect();
        let second_lines: Vec<&str> = second.lines().collect();

        // Same parameters: identical header and line count.
        assert_eq!(first_lines[0], second_lines[0]);
        assert_eq!(first_lines.len(), second_lines.len());

        // Fresh randomness: the particle data must differ.
        assert_ne!(first_lines[1..], second_lines[1..]);
    }

    #[test]
    fn test_generate_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        generate(
            &path,
            &sample_config(),
            &mut StandardCreator::standard_seeded(21),
        )
        .unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 4);
    }

    #[test]
    fn test_generate_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        fs::write(&path, "stale contents\nspread over\nmany lines\nmore\nmore\n").unwrap();

        let config = SimulationConfig::new(1, 100, 0.01, 1200., 800.);
        generate(&path, &config, &mut StandardCreator::standard_seeded(2)).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2);
        assert!(contents.starts_with("1 100 0.01 1200 800\n"));
    }

    #[test]
    fn test_invalid_config_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        fs::write(&path, "precious\n").unwrap();

        let config = SimulationConfig::new(3, 100, -1., 1200., 800.);
        let err = generate(&path, &config, &mut StandardCreator::standard_seeded(2)).unwrap_err();

        assert!(matches!(err, GenerateError::Parameter { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), "precious\n");
    }

    #[test]
    fn test_invalid_config_creates_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("never.txt");

        let config = SimulationConfig::new(3, 100, f64::NAN, 1200., 800.);
        assert!(generate(&path, &config, &mut StandardCreator::standard_seeded(2)).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_generate_atomic() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        generate_atomic(
            &path,
            &sample_config(),
            &mut StandardCreator::standard_seeded(13),
        )
        .unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 4);

        // No stray temp file left behind.
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
