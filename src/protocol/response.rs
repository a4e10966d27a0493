//! Completion response parsing.
//!
//! The host program answers on standard output with newline-separated UTF-8
//! text: zero or more candidate lines, then exactly one directive line of
//! the form `:<decimalInteger>`. The directive is always the last line; an
//! entirely empty response is a distinct outcome meaning "treat as failure".

use std::fmt;

use super::directive::Directive;

/// One completion candidate: a display string with an optional
/// human-readable description.
///
/// Order among candidates is significant and preserved through filtering,
/// but carries no other meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Display string inserted by the shell.
    pub value: String,

    /// Description shown next to the value, when the host provided one.
    pub description: Option<String>,
}

impl Candidate {
    /// Candidate without a description.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            description: None,
        }
    }

    /// Parse one response line, splitting at the first tab character.
    pub fn parse(line: &str) -> Self {
        match line.split_once('\t') {
            Some((value, description)) => Self {
                value: value.to_string(),
                description: Some(description.to_string()),
            },
            None => Self::new(line),
        }
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(desc) => write!(f, "{}\t{}", self.value, desc),
            None => write!(f, "{}", self.value),
        }
    }
}

/// Parsed completion response: ordered candidates plus one directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionResponse {
    /// Candidates in the order the host produced them.
    pub candidates: Vec<Candidate>,

    /// Decoded behavior directive from the final output line.
    pub directive: Directive,
}

impl CompletionResponse {
    /// Parse captured host output.
    ///
    /// Returns `None` for an empty response. A response consisting of one
    /// blank line is treated the same way: the fish command-substitution
    /// path cannot distinguish it from no output at all.
    pub fn parse(stdout: &str) -> Option<Self> {
        let mut lines: Vec<&str> = stdout.lines().collect();
        if lines.is_empty() || (lines.len() == 1 && lines[0].is_empty()) {
            return None;
        }

        // The last line is always consumed as the directive, whether or not
        // it decodes; unparsable text falls open to the empty directive.
        let directive_line = lines.pop()?;
        let directive = directive_line
            .strip_prefix(':')
            .map(Directive::decode)
            .unwrap_or_default();

        let candidates = lines.into_iter().map(Candidate::parse).collect();

        Some(Self {
            candidates,
            directive,
        })
    }
}
