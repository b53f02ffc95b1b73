use crate::prelude::*;
use std::path::PathBuf;
use tfmigrate_core::manifest::{load_example_pairs, load_manifest, ExampleSource, SETTINGS_FILE_NAME};
use tfmigrate_core::ExamplePair;

/// Few-shot example selection, shared by every command that builds prompts.
#[derive(Debug, Clone, clap::Args)]
pub struct ExampleOptions {
    /// Manifest mapping "before" example directories to "after" directories
    #[arg(long, env = "TFMIGRATE_SETTINGS", default_value = SETTINGS_FILE_NAME)]
    pub settings: PathBuf,

    /// Send example inputs and the sample without file markers
    #[arg(long)]
    pub bare_inputs: bool,
}

/// Examples loaded from the manifest.
#[derive(Debug, Clone)]
pub struct Examples {
    pub sources: Vec<ExampleSource>,
    pub pairs: Vec<ExamplePair>,
}

impl ExampleOptions {
    pub fn include_input_names(&self) -> bool {
        !self.bare_inputs
    }

    pub fn load(&self) -> Result<Examples> {
        let sources = load_manifest(&self.settings).with_context(|| {
            format!(
                "Failed to load example pairs from {}",
                self.settings.display()
            )
        })?;

        let pairs = load_example_pairs(&sources, self.include_input_names())
            .context("Failed to read example directories")?;

        log::debug!("Loaded {} example pair(s)", pairs.len());

        Ok(Examples { sources, pairs })
    }
}
