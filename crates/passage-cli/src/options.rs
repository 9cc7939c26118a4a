//! Demo configuration: optional TOML file, overridden by command-line flags.

use std::path::Path;

use anyhow::{bail, Context};
use passage_curve::{Constraint, InterpolationMode, PointSet};
use serde::{Deserialize, Serialize};

/// Default sampling step, one sample per unit of x.
pub const DEFAULT_STEP: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct DemoOptions {
    pub point_set: PointSet,
    pub mode: InterpolationMode,
    /// `None` picks the mode's best constraint.
    pub constraint: Option<Constraint>,
    pub step: f64,
    /// `None` starts at the first passage point.
    pub min: Option<f64>,
    /// `None` ends at the last passage point.
    pub max: Option<f64>,
    pub format: OutputFormat,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            point_set: PointSet::Simple,
            mode: InterpolationMode::Linear,
            constraint: None,
            step: DEFAULT_STEP,
            min: None,
            max: None,
            format: OutputFormat::Text,
        }
    }
}

impl DemoOptions {
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading options from {}", path.display()))?;
        let options: Self = toml::from_str(&content)
            .with_context(|| format!("parsing options in {}", path.display()))?;
        log::info!("Options loaded from {}", path.display());
        Ok(options)
    }

    pub fn constraint(&self) -> Constraint {
        self.constraint.unwrap_or_else(|| self.mode.best_constraint())
    }

    /// Apply `--flag value` overrides.
    pub fn apply_flag(&mut self, flag: &str, value: &str) -> anyhow::Result<()> {
        match flag {
            "--set" => self.point_set = value.parse()?,
            "--mode" => self.mode = value.parse()?,
            "--constraint" => self.constraint = Some(value.parse()?),
            "--step" => self.step = parse_number(flag, value)?,
            "--min" => self.min = Some(parse_number(flag, value)?),
            "--max" => self.max = Some(parse_number(flag, value)?),
            _ => bail!("unknown option '{flag}'"),
        }
        Ok(())
    }
}

fn parse_number(flag: &str, value: &str) -> anyhow::Result<f64> {
    value
        .parse()
        .with_context(|| format!("{flag} expects a number, got '{value}'"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let opts = DemoOptions::default();
        assert_eq!(opts.point_set, PointSet::Simple);
        assert_eq!(opts.constraint(), Constraint::C0);
        assert_eq!(opts.step, 1.0);
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "mode = \"bezier-cubic\"\npoint-set = \"convex\"\nstep = 0.5").unwrap();
        let opts = DemoOptions::load_from_file(file.path()).unwrap();
        assert_eq!(opts.mode, InterpolationMode::BezierCubic);
        assert_eq!(opts.point_set, PointSet::Convex);
        assert_eq!(opts.step, 0.5);
        assert_eq!(opts.constraint(), Constraint::C1);
        assert_eq!(opts.format, OutputFormat::Text);
    }

    #[test]
    fn test_load_rejects_unknown_mode() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "mode = \"spline\"").unwrap();
        assert!(DemoOptions::load_from_file(file.path()).is_err());
    }

    #[test]
    fn test_flags_override() {
        let mut opts = DemoOptions::default();
        opts.apply_flag("--mode", "catmull-rom").unwrap();
        opts.apply_flag("--constraint", "c0").unwrap();
        opts.apply_flag("--min", "-2.5").unwrap();
        assert_eq!(opts.mode, InterpolationMode::CatmullRom);
        assert_eq!(opts.constraint(), Constraint::C0);
        assert_eq!(opts.min, Some(-2.5));
        assert!(opts.apply_flag("--step", "fast").is_err());
        assert!(opts.apply_flag("--colour", "red").is_err());
    }
}
