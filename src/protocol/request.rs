//! Completion request construction.
//!
//! A request is one invocation of the host program's hidden completion
//! sub-command with the user's current partial command line:
//!
//! ```text
//! <program> __complete <arg>... [""]
//! ```
//!
//! The request is always executed as a structured argument vector, never as
//! a string handed to a shell evaluator, so candidate text containing
//! shell-significant characters cannot be re-tokenized or injected.

use std::process::Command;

/// Sub-command token requesting candidates with descriptions.
pub const COMPLETE_REQUEST_CMD: &str = "__complete";

/// Sub-command token requesting candidates without descriptions.
pub const COMPLETE_NO_DESC_REQUEST_CMD: &str = "__completeNoDesc";

/// One completion request against a host program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    /// Host program invocation token.
    program: String,

    /// Whether candidate descriptions are requested.
    descriptions: bool,

    /// Literal argument tokens already typed, in order. Includes the
    /// partial token being completed when it is non-empty.
    args: Vec<String>,

    /// Whether the token under the cursor is empty. When set, an explicit
    /// `""` marker is appended to the argument vector so the host can tell
    /// "about to start a new argument" from "mid-argument with no characters
    /// yet" -- the two tokenize identically otherwise.
    last_token_empty: bool,
}

impl CompletionRequest {
    /// Create a request from its parts.
    pub fn new(
        program: impl Into<String>,
        descriptions: bool,
        args: Vec<String>,
        last_token_empty: bool,
    ) -> Self {
        Self {
            program: program.into(),
            descriptions,
            args,
            last_token_empty,
        }
    }

    /// Build a request from a raw command-line word list.
    ///
    /// Word 0 is the program; the remaining words are the typed arguments
    /// with the in-progress token last. A trailing empty word (the shell's
    /// representation of a cursor after a space) sets `last_token_empty`.
    ///
    /// Returns `None` when there is no program word.
    pub fn from_words(words: &[String], descriptions: bool) -> Option<Self> {
        let (program, rest) = words.split_first()?;
        if program.is_empty() {
            return None;
        }

        let last_token_empty = rest.last().is_none_or(|w| w.is_empty());
        let args = if last_token_empty && !rest.is_empty() {
            rest[..rest.len() - 1].to_vec()
        } else {
            rest.to_vec()
        };

        Some(Self::new(program.clone(), descriptions, args, last_token_empty))
    }

    /// Host program invocation token.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// The literal sub-command token selecting the response mode.
    pub fn subcommand_token(&self) -> &'static str {
        if self.descriptions {
            COMPLETE_REQUEST_CMD
        } else {
            COMPLETE_NO_DESC_REQUEST_CMD
        }
    }

    /// The partial token being completed, used for prefix filtering.
    pub fn current_token(&self) -> &str {
        if self.last_token_empty {
            ""
        } else {
            self.args.last().map(String::as_str).unwrap_or("")
        }
    }

    /// Argument vector passed to the host program, after the program token.
    pub fn argv(&self) -> Vec<String> {
        let mut argv = Vec::with_capacity(self.args.len() + 2);
        argv.push(self.subcommand_token().to_string());
        argv.extend(self.args.iter().cloned());
        if self.last_token_empty {
            argv.push(String::new());
        }
        argv
    }

    /// Structured process invocation for this request.
    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(self.argv());
        cmd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_argv_mid_token() {
        let req = CompletionRequest::new("mytool", true, words(&["sub", "ap"]), false);
        assert_eq!(req.argv(), words(&["__complete", "sub", "ap"]));
        assert_eq!(req.current_token(), "ap");
    }

    #[test]
    fn test_argv_appends_empty_marker() {
        let req = CompletionRequest::new("mytool", true, words(&["sub"]), true);
        assert_eq!(req.argv(), words(&["__complete", "sub", ""]));
        assert_eq!(req.current_token(), "");
    }

    #[test]
    fn test_no_desc_token() {
        let req = CompletionRequest::new("mytool", false, vec![], true);
        assert_eq!(req.subcommand_token(), COMPLETE_NO_DESC_REQUEST_CMD);
        assert_eq!(req.argv(), words(&["__completeNoDesc", ""]));
    }

    #[test]
    fn test_from_words_mid_token() {
        let req = CompletionRequest::from_words(&words(&["mytool", "sub", "ap"]), true).unwrap();
        assert_eq!(req.program(), "mytool");
        assert_eq!(req.current_token(), "ap");
        assert_eq!(req.argv(), words(&["__complete", "sub", "ap"]));
    }

    #[test]
    fn test_from_words_trailing_empty() {
        let req = CompletionRequest::from_words(&words(&["mytool", "sub", ""]), true).unwrap();
        assert_eq!(req.current_token(), "");
        assert_eq!(req.argv(), words(&["__complete", "sub", ""]));
    }

    #[test]
    fn test_from_words_program_only() {
        // "mytool" alone means the first argument is about to be typed.
        let req = CompletionRequest::from_words(&words(&["mytool"]), true).unwrap();
        assert_eq!(req.current_token(), "");
        assert_eq!(req.argv(), words(&["__complete", ""]));
    }

    #[test]
    fn test_from_words_rejects_empty_input() {
        assert!(CompletionRequest::from_words(&[], true).is_none());
        assert!(CompletionRequest::from_words(&words(&[""]), true).is_none());
    }

    #[test]
    fn test_to_command_uses_argv() {
        let req = CompletionRequest::new("mytool", true, words(&["-n", "a b"]), false);
        let cmd = req.to_command();
        assert_eq!(cmd.get_program(), "mytool");
        let args: Vec<_> = cmd.get_args().map(|a| a.to_string_lossy().into_owned()).collect();
        // Tokens with spaces stay single arguments; no shell re-splitting.
        assert_eq!(args, words(&["__complete", "-n", "a b"]));
    }
}
