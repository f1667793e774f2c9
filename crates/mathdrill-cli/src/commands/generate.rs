//! The `mathdrill generate` command.

use std::path::PathBuf;

use anyhow::Result;

use mathdrill_core::files;
use mathdrill_core::generate::{generate_exercises, GeneratorConfig};

pub fn execute(
    count: usize,
    range: i64,
    seed: Option<u64>,
    exercise_path: PathBuf,
    answer_path: PathBuf,
) -> Result<()> {
    anyhow::ensure!(count >= 1, "count must be at least 1");
    anyhow::ensure!(range >= 2, "range must be at least 2");

    let mut config = GeneratorConfig::new(count, range);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    let records = generate_exercises(&config)?;
    files::write_sheet(&records, &exercise_path, &answer_path)?;

    println!("Generated {} exercises.", records.len());
    println!("Exercises: {}", exercise_path.display());
    println!("Answers:   {}", answer_path.display());

    Ok(())
}
