//! The completion capability the pipeline depends on.
//!
//! Providers live in the `tfmigrate` binary; the core only needs something
//! that turns a [`Conversation`] into text.

use std::future::Future;

use crate::conversation::Conversation;
use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionOptions {
    pub temperature: f32,
}

impl Default for CompletionOptions {
    /// Temperature 0 so repeated migrations of the same sample agree.
    fn default() -> Self {
        Self { temperature: 0.0 }
    }
}

/// A chat-completion backend.
///
/// Implementations must report every failure (transport, authentication,
/// empty response, missing content) as [`Error::GenerationFailure`].
pub trait Completion {
    fn complete(
        &self,
        conversation: &Conversation,
        options: &CompletionOptions,
    ) -> impl Future<Output = Result<String, Error>> + Send;
}
