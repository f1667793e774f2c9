//! mathdrill CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "mathdrill", version, about = "Arithmetic exercise generator and grader")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an exercise sheet and its answer key
    Generate {
        /// Number of exercises to generate
        #[arg(short = 'n', long)]
        count: usize,

        /// Range limit for numbers in expressions (at least 2)
        #[arg(short = 'r', long)]
        range: i64,

        /// RNG seed for a reproducible sheet
        #[arg(long)]
        seed: Option<u64>,

        /// Exercise file to write
        #[arg(long, default_value = "Exercises.txt")]
        exercises: PathBuf,

        /// Answer file to write
        #[arg(long, default_value = "Answers.txt")]
        answers: PathBuf,
    },

    /// Grade an answer file against an exercise file
    Grade {
        /// Path to the exercises file
        #[arg(short = 'e', long)]
        exercises: PathBuf,

        /// Path to the answers file
        #[arg(short = 'a', long)]
        answers: PathBuf,

        /// Grade report file to write
        #[arg(long, default_value = "Grade.txt")]
        out: PathBuf,

        /// Also save the report as JSON
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Evaluate one expression and print the exact result
    Eval {
        /// Expression text, e.g. "1/2 + 3’1/2"
        expression: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mathdrill=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            count,
            range,
            seed,
            exercises,
            answers,
        } => commands::generate::execute(count, range, seed, exercises, answers),
        Commands::Grade {
            exercises,
            answers,
            out,
            json,
        } => commands::grade::execute(exercises, answers, out, json),
        Commands::Eval { expression } => commands::eval::execute(&expression),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
