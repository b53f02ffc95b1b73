//! The marker grammar used to multiplex several files into one text blob.
//!
//! ```text
//! ###<name>###
//! <content>
//! <name>:end
//! ```
//!
//! The grammar has no escaping: a file whose content itself contains a
//! well-formed marker pair will confuse the demarcator. This is a known
//! limitation of the format the few-shot examples teach the model.

const BEGIN_FENCE: &str = "###";
const END_SUFFIX: &str = ":end";

/// `###<name>###`
pub fn begin_marker(name: &str) -> String {
    format!("{BEGIN_FENCE}{name}{BEGIN_FENCE}")
}

/// `<name>:end`
pub fn end_marker(name: &str) -> String {
    format!("{name}{END_SUFFIX}")
}

/// Wrap one file in its begin and end markers.
pub fn wrap(name: &str, content: &str) -> String {
    format!("{}\n{}\n{}\n", begin_marker(name), content, end_marker(name))
}
