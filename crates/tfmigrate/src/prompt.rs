use crate::examples::ExampleOptions;
use crate::prelude::{eprintln, println, *};
use std::path::PathBuf;
use tfmigrate_core::build_conversation;
use tfmigrate_core::serialize::serialize;

#[derive(Debug, clap::Args)]
pub struct PromptOptions {
    /// Sample directory to build the prompt for
    #[arg(short = 's', long, env = "TFMIGRATE_SAMPLE_DIRECTORY")]
    pub sample_directory: PathBuf,

    #[clap(flatten)]
    pub examples: ExampleOptions,
}

/// Print the chat messages that `migrate` would send for one sample.
pub fn run(options: PromptOptions, global: crate::Global) -> Result<()> {
    let examples = options.examples.load()?;

    let query = serialize(
        &options.sample_directory,
        options.examples.include_input_names(),
    )
    .with_context(|| {
        format!(
            "Failed to serialize sample {}",
            options.sample_directory.display()
        )
    })?;

    let conversation = build_conversation(&examples.pairs, query);

    if global.verbose {
        eprintln!(
            "{} turn(s), {} chars",
            conversation.len(),
            conversation.char_count()
        );
    }

    println!(
        "{}",
        serde_json::to_string_pretty(&conversation.chat_messages())?
    );

    Ok(())
}
