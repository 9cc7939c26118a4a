//! Passage demo CLI
//!
//! Samples one of the named point sets with a chosen interpolation mode and prints the
//! resulting polyline.
//!
//! # Usage
//!
//! ```bash
//! # Catmull-Rom through the "simple" set, one sample per unit of x
//! passage --mode catmull-rom
//!
//! # Options from a file, JSON output
//! passage --config demo.toml --json
//!
//! # Every mode with its default constraint
//! passage --set convex --all
//! ```

mod options;
mod report;

use std::path::Path;
use std::process;

use anyhow::{bail, Context};
use passage_core::{Tolerance, Validate};
use passage_curve::{sample_modes, Interpolation, InterpolationMode};
use passage_math::Aabb2;

use options::{DemoOptions, OutputFormat};
use report::{catalog_listing, summary_line, CurveReport, PLOT_MARGIN};

fn print_usage() {
    eprintln!(
        r#"Passage interpolation demo

USAGE:
    passage [OPTIONS]

OPTIONS:
    --config <file>       Read options from a TOML file (flags override it)
    --set <name>          Point set: single, simple, convex, intense, corner-case
    --mode <name>         linear, catmull-rom, bezier-linear, bezier-quadratic, bezier-cubic
    --constraint <name>   custom, c0, c1, c2-buggy (default: best for the mode)
    --step <f>            Sampling step (default 1.0)
    --min <f>             Start of the sampled range (default: first passage x)
    --max <f>             End of the sampled range (default: last passage x)
    --json                Print a JSON report
    --all                 Sample every mode with its default constraint
    --list                List modes, constraints and point sets
    --help                Show this help message
"#
    );
}

enum Command {
    Sample,
    All,
    List,
}

fn parse_args(args: &[String]) -> anyhow::Result<(DemoOptions, Command)> {
    // the config file is read first so that flags win regardless of order
    let mut options = match args.iter().position(|a| a == "--config") {
        Some(i) => {
            let path = args.get(i + 1).context("--config requires a file path")?;
            DemoOptions::load_from_file(Path::new(path))?
        }
        None => DemoOptions::default(),
    };

    let mut command = Command::Sample;
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                iter.next();
            }
            "--json" => options.format = OutputFormat::Json,
            "--all" => command = Command::All,
            "--list" => command = Command::List,
            flag if flag.starts_with("--") => {
                let value = iter
                    .next()
                    .with_context(|| format!("{flag} requires a value"))?;
                options.apply_flag(flag, value)?;
            }
            other => bail!("unexpected argument '{other}'"),
        }
    }
    Ok((options, command))
}

fn run_sample(options: &DemoOptions) -> anyhow::Result<()> {
    let points = options.point_set.points();
    let interpolation = Interpolation::new(options.mode, points)
        .and_then(|interp| interp.validate().map(|()| interp))
        .with_context(|| format!("{} cannot interpolate {}", options.mode, options.point_set))?
        .with_constraint(options.constraint())?;

    let (first, last) = interpolation.domain().context("point set is empty")?;
    let min = options.min.unwrap_or(first);
    let max = options.max.unwrap_or(last);
    let samples = interpolation.sample_range(min, max, options.step);
    log::info!(
        "{} / {} over [{min}, {max}]: {} samples",
        interpolation.mode(),
        interpolation.constraint(),
        samples.len()
    );

    let report = CurveReport {
        point_set: options.point_set,
        mode: interpolation.mode(),
        constraint: interpolation.constraint(),
        window: Aabb2::from_points(interpolation.points()).map(|b| b.expand(PLOT_MARGIN)),
        passage_points: interpolation.points(),
        control_points: interpolation.control_points(),
        samples: &samples,
    };
    match options.format {
        OutputFormat::Text => print!("{}", report.to_text(Tolerance::default())),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }
    Ok(())
}

fn run_all(options: &DemoOptions) -> anyhow::Result<()> {
    let points = options.point_set.points();
    let requests: Vec<_> = InterpolationMode::ALL
        .into_iter()
        .filter(|mode| points.len() >= mode.min_points())
        .map(|mode| (mode, mode.best_constraint()))
        .collect();

    let results = sample_modes(&points, &requests, options.step);
    for (&(mode, constraint), result) in requests.iter().zip(results) {
        let samples = result?;
        println!("{}", summary_line(mode, constraint, &samples));
    }
    Ok(())
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        process::exit(0);
    }

    let result = parse_args(&args).and_then(|(options, command)| match command {
        Command::Sample => run_sample(&options),
        Command::All => run_all(&options),
        Command::List => {
            print!("{}", catalog_listing());
            Ok(())
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
