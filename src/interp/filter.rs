//! Per-run candidate buffer: prefix filtering and the no-space workaround.

use crate::protocol::Candidate;

/// Character appended to the synthetic second candidate when suppressing the
/// shell's automatic trailing space. The placement (directly after the sole
/// match, before any description would go) must match observed behavior.
pub const NO_SPACE_SENTINEL: char = '.';

/// Working candidate list for a single interpretation run.
///
/// Owned exclusively by one run and discarded at its end; nothing here is
/// shared across invocations.
#[derive(Debug)]
pub struct FilterContext {
    prefix: String,
    candidates: Vec<Candidate>,
}

impl FilterContext {
    /// Wrap the host's candidates together with the user's partial token.
    pub fn new(prefix: impl Into<String>, candidates: Vec<Candidate>) -> Self {
        Self {
            prefix: prefix.into(),
            candidates,
        }
    }

    /// Keep only candidates whose display string starts with the prefix.
    ///
    /// Anchored at position zero and case-sensitive; relative order is
    /// preserved. The host's list may be broader than strict-prefix (hosts
    /// may match on other criteria), and the shell's own native filtering
    /// cannot be trusted to be prefix-only, so it is enforced here.
    pub fn retain_prefix_matches(&mut self) {
        let prefix = self.prefix.as_str();
        self.candidates.retain(|c| c.value.starts_with(prefix));
    }

    /// Number of candidates currently held.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// True when no candidates remain.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Replace a sole remaining candidate with a near-identical pair to stop
    /// the shell from appending a space after accepting it.
    ///
    /// The description is dropped first: the extra sentinel character must
    /// come before where a description would sit, and with a single real
    /// completion the shell expands it immediately anyway. A list of any
    /// other size is left untouched.
    pub fn apply_no_space(&mut self) {
        if self.candidates.len() != 1 {
            return;
        }
        let value = self.candidates[0].value.clone();
        let decoy = format!("{value}{NO_SPACE_SENTINEL}");
        self.candidates = vec![Candidate::new(value), Candidate::new(decoy)];
    }

    /// Consume the context, yielding the final candidate list.
    pub fn into_candidates(self) -> Vec<Candidate> {
        self.candidates
    }
}
