//! Sample pipeline
//!
//! Serialize → assemble → complete → demarcate → write, for one sample.

use std::fs;
use std::path::{Path, PathBuf};

use crate::completion::{Completion, CompletionOptions};
use crate::conversation::{build_conversation, Conversation, ExamplePair};
use crate::demarcate;
use crate::error::Error;
use crate::output::{output_dir_for, write_file_set};
use crate::serialize::serialize;

/// Everything a run needs, resolved once and shared read-only by every sample.
#[derive(Debug, Clone)]
pub struct MigrationContext {
    /// Serialized few-shot examples, in manifest order.
    pub examples: Vec<ExamplePair>,
    /// Directory the samples were discovered under.
    pub input_root: PathBuf,
    /// Directory migrated samples are written under.
    pub output_root: PathBuf,
    /// Whether the query (and example inputs) are wrapped in file markers.
    pub include_input_names: bool,
    pub options: CompletionOptions,
    /// When set, the prompt and raw completion of each sample are saved here.
    pub debug_dir: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct SampleReport {
    pub sample: PathBuf,
    pub output_dir: PathBuf,
    pub written: Vec<PathBuf>,
}

/// Build the conversation for `sample` without calling the model.
pub fn prepare(context: &MigrationContext, sample: &Path) -> Result<Conversation, Error> {
    let query = serialize(sample, context.include_input_names)?;
    Ok(build_conversation(&context.examples, query))
}

/// Migrate one sample.
///
/// Nothing is written to the output directory unless the completion parses
/// cleanly.
pub async fn migrate_sample<C: Completion>(
    context: &MigrationContext,
    client: &C,
    sample: &Path,
) -> Result<SampleReport, Error> {
    let conversation = prepare(context, sample)?;
    log::debug!(
        "Conversation for {} has {} turn(s), {} chars",
        sample.display(),
        conversation.len(),
        conversation.char_count()
    );

    let slug = debug_slug(sample, &context.input_root);
    if let Some(debug_dir) = &context.debug_dir {
        write_debug_prompt(debug_dir, &slug, &conversation)?;
    }

    let completion = client.complete(&conversation, &context.options).await?;

    if let Some(debug_dir) = &context.debug_dir {
        // Best effort once a completion exists.
        if let Err(err) = write_debug_file(debug_dir, &format!("{slug}.completion.txt"), &completion) {
            log::warn!("Could not save completion for {}: {err}", sample.display());
        }
    }

    let files = demarcate::parse(&completion)?;
    let output_dir = output_dir_for(sample, &context.input_root, &context.output_root);
    let written = write_file_set(&files, &output_dir)?;

    Ok(SampleReport {
        sample: sample.to_path_buf(),
        output_dir,
        written,
    })
}

/// File-name friendly identifier of a sample, e.g. `aws_vm_linux`.
pub fn debug_slug(sample: &Path, input_root: &Path) -> String {
    let relative = sample.strip_prefix(input_root).unwrap_or(sample);

    let parts: Vec<String> = relative
        .components()
        .filter_map(|component| match component {
            std::path::Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    if parts.is_empty() {
        input_root
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "sample".to_string())
    } else {
        parts.join("_")
    }
}

fn write_debug_prompt(debug_dir: &Path, slug: &str, conversation: &Conversation) -> Result<(), Error> {
    let name = format!("{slug}.prompt.json");
    let json = serde_json::to_string_pretty(&conversation.chat_messages())
        .map_err(|e| Error::io(debug_dir.join(&name), std::io::Error::other(e)))?;
    write_debug_file(debug_dir, &name, &json)
}

fn write_debug_file(debug_dir: &Path, name: &str, contents: &str) -> Result<(), Error> {
    fs::create_dir_all(debug_dir).map_err(|e| Error::io(debug_dir, e))?;
    let path = debug_dir.join(name);
    fs::write(&path, contents).map_err(|e| Error::io(&path, e))?;
    log::debug!("Wrote debug artifact {}", path.display());
    Ok(())
}
