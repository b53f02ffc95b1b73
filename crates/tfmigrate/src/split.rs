use crate::console;
use crate::prelude::*;
use std::io::Read;
use std::path::{Path, PathBuf};
use tfmigrate_core::demarcate;
use tfmigrate_core::output::write_file_set;

#[derive(Debug, clap::Args)]
pub struct SplitOptions {
    /// File holding a raw model completion ("-" reads stdin)
    pub completion: PathBuf,

    /// Directory the files are written to
    #[arg(short, long)]
    pub output_directory: PathBuf,
}

/// Split a saved completion (e.g. a debug `*.completion.txt`) into files.
pub fn run(options: SplitOptions, global: crate::Global) -> Result<()> {
    let blob = read_completion(&options.completion)?;

    let files = demarcate::parse(&blob).with_context(|| {
        format!(
            "Failed to split completion {}",
            options.completion.display()
        )
    })?;

    let written = write_file_set(&files, &options.output_directory)?;

    if global.verbose {
        for path in &written {
            console::status(format!("\tWrote file: {}", path.display()));
        }
    }

    console::success(format!(
        "Wrote {} file(s) to {}",
        written.len(),
        options.output_directory.display()
    ));

    Ok(())
}

fn read_completion(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut blob = String::new();
        std::io::stdin()
            .read_to_string(&mut blob)
            .context("Failed to read completion from stdin")?;
        return Ok(blob);
    }

    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read completion {}", path.display()))
}
