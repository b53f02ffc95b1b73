use crate::client::{Client, ClientOptions};
use crate::console;
use crate::examples::ExampleOptions;
use crate::prelude::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tfmigrate_core::batch::{resolve, Action, BatchSummary, Decision, Mode, SampleOutcome};
use tfmigrate_core::discover::discover_samples;
use tfmigrate_core::{migrate_sample, CompletionOptions, MigrationContext};

pub mod confirm;
pub mod plan;

#[derive(Debug, clap::Args)]
pub struct MigrateOptions {
    /// Sample directory to migrate
    #[arg(short = 's', long, env = "TFMIGRATE_SAMPLE_DIRECTORY")]
    pub sample_directory: PathBuf,

    /// Process every subdirectory of the sample directory
    #[arg(short, long)]
    pub recursive: bool,

    /// Only treat directories holding files with this extension as samples
    #[arg(short, long, env = "TFMIGRATE_EXTENSION")]
    pub extension: Option<String>,

    /// Directory migrated samples are written under
    #[arg(short, long, env = "TFMIGRATE_OUTPUT_DIRECTORY", default_value = "migrated")]
    pub output_directory: PathBuf,

    /// Save each prompt and raw completion to the debug directory
    #[arg(short, long)]
    pub debug: bool,

    /// Where debug artifacts are written
    #[arg(long, env = "TFMIGRATE_DEBUG_DIRECTORY", default_value = "debug")]
    pub debug_directory: PathBuf,

    /// Migrate every sample without asking first
    #[arg(short, long)]
    pub yes: bool,

    #[clap(flatten)]
    pub examples: ExampleOptions,

    #[clap(flatten)]
    pub client: ClientOptions,
}

pub async fn run(options: MigrateOptions, global: crate::Global) -> Result<()> {
    console::status("Loading directories to process...");
    let samples = discover_samples(
        &options.sample_directory,
        options.recursive,
        options.extension.as_deref(),
    )
    .context("Failed to discover samples")?;

    if samples.is_empty() {
        console::warning(format!(
            "No sample directories found under {}",
            options.sample_directory.display()
        ));
        return Ok(());
    }

    console::status("Loading example pairs...");
    let examples = options.examples.load()?;

    plan::present(&samples, &examples.sources, &options.client);

    if options.debug {
        console::warning(format!(
            "Debugging enabled. Artifacts go to {}",
            options.debug_directory.display()
        ));
    }

    let client = Client::from_options(&options.client)?;

    let context = MigrationContext {
        examples: examples.pairs,
        input_root: options.sample_directory.clone(),
        output_root: options.output_directory.clone(),
        include_input_names: options.examples.include_input_names(),
        options: CompletionOptions::default(),
        debug_dir: options.debug.then(|| options.debug_directory.clone()),
    };

    let mode = if options.yes {
        Mode::ProcessAll
    } else {
        Mode::ConfirmEach
    };

    let summary = run_batch(&context, &client, &samples, mode, global.verbose).await?;

    print_summary(&summary);

    if summary.cancelled {
        return Err(eyre!(Error::UserCancelled));
    }
    if summary.failed > 0 {
        return Err(eyre!("{} sample(s) failed to migrate", summary.failed));
    }

    Ok(())
}

/// Walk the samples one at a time, asking first unless `mode` says otherwise.
///
/// Per-sample failures are reported and the batch continues. Cancellation
/// stops it and is recorded in the summary.
async fn run_batch(
    context: &MigrationContext,
    client: &Client,
    samples: &[PathBuf],
    mut mode: Mode,
    verbose: bool,
) -> Result<BatchSummary> {
    let mut summary = BatchSummary::default();

    for sample in samples {
        let decision = match mode {
            Mode::ProcessAll => Decision::Process,
            Mode::ConfirmEach => confirm::ask(sample).await?,
        };

        let action = match resolve(mode, decision) {
            Ok((action, next_mode)) => {
                mode = next_mode;
                action
            }
            Err(err) => {
                console::error(format!("Stopping: {err}"));
                summary.cancelled = true;
                break;
            }
        };

        let outcome = match action {
            Action::Skip => {
                console::warning(format!("Skipped sample: {}", sample.display()));
                SampleOutcome::Skipped
            }
            Action::Process => match process_sample(context, client, sample, verbose).await {
                Ok(outcome) => outcome,
                Err(err) => {
                    console::error(format!("Stopping: {err}"));
                    summary.cancelled = true;
                    break;
                }
            },
        };

        summary.record(&outcome);
    }

    Ok(summary)
}

async fn process_sample(
    context: &MigrationContext,
    client: &Client,
    sample: &Path,
    verbose: bool,
) -> Result<SampleOutcome, Error> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));
    spinner.set_message(format!("Migrating {}...", sample.display()));

    let result = migrate_sample(context, client, sample).await;
    spinner.finish_and_clear();

    match result {
        Ok(report) => {
            if verbose {
                for path in &report.written {
                    console::status(format!("\tWrote file: {}", path.display()));
                }
            }
            console::success(format!(
                "Sample successfully migrated: {} -> {} ({} file(s))",
                sample.display(),
                report.output_dir.display(),
                report.written.len()
            ));
            Ok(SampleOutcome::Migrated {
                files: report.written.len(),
            })
        }
        Err(err) if err.is_fatal() => Err(err),
        Err(err) => {
            log::warn!("Sample {} failed: {err:?}", sample.display());
            console::error(format!(
                "Failed to migrate sample {}: {err}",
                sample.display()
            ));
            Ok(SampleOutcome::Failed {
                reason: err.to_string(),
            })
        }
    }
}

fn print_summary(summary: &BatchSummary) {
    let line = format!(
        "Processed {} sample(s): {} migrated, {} skipped, {} failed",
        summary.total(),
        summary.migrated,
        summary.skipped,
        summary.failed
    );

    if summary.is_clean() {
        console::success(line);
    } else {
        console::warning(line);
    }
}
