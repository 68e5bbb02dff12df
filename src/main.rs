use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

use degree_tracker::{ProgramConfig, RecordError, StudentId, StudentRecord};

#[derive(Parser, Debug)]
#[command(name = "degree_tracker")]
#[command(about = "Advance a cohort of students through their degree and report classifications")]
struct Args {
    /// Random seed for mark generation (uses random seed if not specified)
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON file overriding the program config (modules per year, total years, mark range)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of academic years to advance
    #[arg(short, long, default_value = "1")]
    years: u32,

    /// Print JSON snapshots instead of text details
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ProgramConfig::from_json_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => ProgramConfig::default(),
    };

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    tracing::info!(seed, "generating marks");

    let mut students = vec![
        StudentRecord::new(&config, StudentId(1), "Andrew", "Jackson", "Electrical & Electronic Engineering", 1, &mut rng)?,
        StudentRecord::new(&config, StudentId(2), "Ben", "Kraken", "Software & Electronic Systems Engineering", 2, &mut rng)?,
        StudentRecord::new(&config, StudentId(3), "Chris", "Lightning", "Computer Science", 3, &mut rng)?,
    ];

    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "All student details:")?;
    print_all(&students, args.json, &mut out)?;

    for _ in 0..args.years {
        writeln!(out, "\nThe academic year has finished!")?;
        for student in &mut students {
            match student.advance_year(&mut rng, &mut out) {
                Ok(_) => {}
                Err(RecordError::AlreadyGraduated { id }) => {
                    tracing::warn!(%id, "skipping graduated student");
                }
                Err(e) => return Err(e.into()),
            }
        }

        writeln!(out, "\nAll student details:")?;
        print_all(&students, args.json, &mut out)?;
    }

    Ok(())
}

fn print_all<W: Write>(students: &[StudentRecord], json: bool, out: &mut W) -> Result<()> {
    for student in students {
        if json {
            writeln!(out, "{}", student.to_json()?)?;
        } else {
            student.write_details(out)?;
        }
    }
    Ok(())
}
