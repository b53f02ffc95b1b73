//! Prompt assembler
//!
//! Interleaves the few-shot example pairs and closes the conversation with
//! the query for the sample being migrated.

use serde::{Deserialize, Serialize};

/// The "before" and "after" snapshots of one migration example.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamplePair {
    pub input: String,
    pub output: String,
}

impl ExamplePair {
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    ExampleInput,
    ExampleOutput,
    Query,
}

impl Role {
    /// Role name understood by chat-completion endpoints.
    pub fn chat_role(self) -> &'static str {
        match self {
            Role::ExampleInput | Role::Query => "user",
            Role::ExampleOutput => "assistant",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

/// Chat message shape used for debug dumps of a conversation.
#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

/// Ordered turns sent to the model for one sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    turns: Vec<Turn>,
}

impl Conversation {
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// The final query turn.
    pub fn query(&self) -> Option<&Turn> {
        self.turns.last().filter(|turn| turn.role == Role::Query)
    }

    /// Every turn before the query.
    pub fn history(&self) -> &[Turn] {
        match self.query() {
            Some(_) => &self.turns[..self.turns.len() - 1],
            None => &self.turns,
        }
    }

    pub fn chat_messages(&self) -> Vec<ChatMessage<'_>> {
        self.turns
            .iter()
            .map(|turn| ChatMessage {
                role: turn.role.chat_role(),
                content: &turn.content,
            })
            .collect()
    }

    /// Total characters across all turns.
    pub fn char_count(&self) -> usize {
        self.turns.iter().map(|turn| turn.content.chars().count()).sum()
    }
}

/// Build the conversation for one sample.
///
/// Every pair contributes an `example_input` turn followed by an
/// `example_output` turn, in the order supplied. A single `query` turn is
/// always last, so the result holds `2 * pairs.len() + 1` turns.
pub fn build_conversation(pairs: &[ExamplePair], query: impl Into<String>) -> Conversation {
    let mut turns = Vec::with_capacity(pairs.len() * 2 + 1);

    for pair in pairs {
        turns.push(Turn {
            role: Role::ExampleInput,
            content: pair.input.clone(),
        });
        turns.push(Turn {
            role: Role::ExampleOutput,
            content: pair.output.clone(),
        });
    }

    turns.push(Turn {
        role: Role::Query,
        content: query.into(),
    });

    Conversation { turns }
}
