//! Specrad command-line interface.
//!
//! Run solver jobs from TOML configuration files:
//! ```sh
//! specrad run job.toml
//! specrad validate job.toml
//! specrad generate --size 64 --output matrices/matrix1.txt
//! ```

mod config;
mod runner;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ndarray::Array2;
use rand::Rng;

#[derive(Parser)]
#[command(name = "specrad")]
#[command(about = "Specrad: Dominant-Eigenvalue Power Iteration")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a solver job from a TOML configuration file.
    Run {
        /// Path to the job configuration file.
        config: PathBuf,
        /// Output directory (overrides config file setting).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate a configuration file without running the solver.
    Validate {
        /// Path to the job configuration file.
        config: PathBuf,
    },
    /// Generate a random integer-valued test matrix.
    Generate {
        /// Matrix dimension.
        #[arg(short, long)]
        size: usize,
        /// Destination file.
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { config, output } => {
            println!("Specrad Eigenvalue Solver");
            println!("=========================");
            let job = config::load_config(&config)?;
            println!("Configuration: {}", config.display());

            let report = runner::run_job(&job)?;

            println!("Dominant eigenvalue: {:.6}", report.eigenvalue);
            println!("Solve time: {:.8} seconds", report.elapsed_seconds);

            if job.output.save_json {
                let out_dir = output.unwrap_or_else(|| PathBuf::from(&job.output.directory));
                runner::write_report_json(&report, &out_dir.join("report.json"))?;
            }
            Ok(())
        }
        Commands::Validate { config } => {
            let _job = config::load_config(&config)?;
            println!("Configuration is valid: {}", config.display());
            Ok(())
        }
        Commands::Generate { size, output } => {
            anyhow::ensure!(size > 0, "Matrix dimension must be positive");

            let mut rng = rand::thread_rng();
            let matrix =
                Array2::from_shape_fn((size, size), |_| rng.gen_range(-50..=50) as f64);

            specrad_io::writer::write_matrix(&matrix, &output)?;
            println!("Matrix {}x{} written to: {}", size, size, output.display());
            Ok(())
        }
    }
}
