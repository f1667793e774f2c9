//! The `mathdrill eval` command.

use anyhow::Result;

use mathdrill_core::eval::evaluate_str;

pub fn execute(expression: &str) -> Result<()> {
    let result = evaluate_str(expression)?;
    println!("{result}");
    Ok(())
}
