use crate::prelude::*;
use clap::Parser;

mod client;
mod console;
mod examples;
mod migrate;
mod prelude;
mod prompt;
mod split;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Migrate infrastructure-as-code samples using few-shot LLM prompts"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "TFMIGRATE_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Subcommand)]
pub enum SubCommands {
    /// Migrate sample directories with the configured model
    Migrate(crate::migrate::MigrateOptions),

    /// Print the conversation that would be sent for a sample
    Prompt(crate::prompt::PromptOptions),

    /// Split a saved model completion into files
    Split(crate::split::SplitOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Migrate(options) => crate::migrate::run(options, app.global).await,
        SubCommands::Prompt(options) => crate::prompt::run(options, app.global),
        SubCommands::Split(options) => crate::split::run(options, app.global),
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
