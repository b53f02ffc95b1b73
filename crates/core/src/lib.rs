//! Core library for tfmigrate
//!
//! This crate implements the **Functional Core** of tfmigrate, following the
//! Functional Core - Imperative Shell architectural pattern.
//!
//! - **`tfmigrate_core`** (this crate): the prompt protocol. Serializing
//!   sample directories, assembling few-shot conversations, splitting model
//!   responses back into files and writing them out.
//! - **`tfmigrate`**: CLI, console output, completion providers and the
//!   interactive confirmation loop (the Imperative Shell).
//!
//! The core never prints and never reads the keyboard. It returns
//! [`Error`] values for the shell to render.
//!
//! # Module Organization
//!
//! - [`serialize`]: directory → prompt text
//! - [`conversation`]: example pairs + query → ordered turns
//! - [`completion`]: the model capability the pipeline depends on
//! - [`demarcate`]: model response → named files
//! - [`output`]: named files → disk
//! - [`discover`]: which directories are samples
//! - [`manifest`]: the before/after example manifest
//! - [`batch`]: per-sample decisions and the run tally
//! - [`pipeline`]: one sample end to end
//!
//! # Example Usage
//!
//! ```rust
//! use tfmigrate_core::{build_conversation, demarcate, ExamplePair};
//!
//! let pairs = vec![ExamplePair::new("before", "###main.tf###\nafter\nmain.tf:end\n")];
//! let conversation = build_conversation(&pairs, "###main.tf###\nquery\nmain.tf:end\n");
//! assert_eq!(conversation.len(), 3);
//!
//! let files = demarcate::parse("###main.tf###\nresource \"x\" {}\nmain.tf:end\n").unwrap();
//! assert_eq!(files.get("main.tf"), Some("resource \"x\" {}"));
//! ```

pub mod batch;
pub mod completion;
pub mod conversation;
pub mod demarcate;
pub mod discover;
pub mod error;
pub mod file_set;
pub mod manifest;
pub mod marker;
pub mod output;
pub mod pipeline;
pub mod serialize;

pub use completion::{Completion, CompletionOptions};
pub use conversation::{build_conversation, Conversation, ExamplePair, Role, Turn};
pub use error::Error;
pub use file_set::{FileEntry, FileSet, RECORD_FILE_NAME};
pub use pipeline::{migrate_sample, MigrationContext, SampleReport};
