//! Demo dataset command.

use std::fs;
use std::path::Path;

use examseat_core::sample;
use tracing::info;

use super::Context;
use crate::error::CliError;

/// Writes `students.csv`, `rooms.csv` and `faculty.csv` into a directory
pub fn cmd_sample(context: &Context, output: &Path, force: bool) -> Result<(), CliError> {
    let files = [
        ("students.csv", sample::students_csv(&sample::students())),
        ("rooms.csv", sample::rooms_csv(&sample::rooms())),
        ("faculty.csv", sample::faculty_csv(&sample::faculty())),
    ];

    if !force
        && let Some((name, _)) = files.iter().find(|(name, _)| output.join(name).exists())
    {
        return Err(CliError::Output(format!(
            "{} already exists; use --force to overwrite",
            output.join(name).display()
        )));
    }

    fs::create_dir_all(output).map_err(|e| {
        CliError::Output(format!("Failed to create {}: {e}", output.display()))
    })?;

    for (name, content) in &files {
        let path = output.join(name);
        fs::write(&path, content)
            .map_err(|e| CliError::Output(format!("Failed to write {}: {e}", path.display())))?;
        info!(path = %path.display(), "Sample file written");
        if !context.quiet {
            println!("Wrote {}", path.display());
        }
    }
    Ok(())
}
