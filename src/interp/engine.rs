//! Response interpretation state machine.
//!
//! One synchronous run per completion trigger:
//!
//! 1. **Invoke** the host with the request; failure means file fallback.
//! 2. **CheckEmpty**: no output at all means file fallback.
//! 3. **Split** the output into candidates and the directive line.
//! 4. **DecodeDirective**; the `Error` flag means file fallback.
//! 5. **CheckUnsupportedFilters**: extension or directory filtering is not
//!    implemented here, and falling back beats silently ignoring the
//!    request.
//! 6. **MaybeFilter**: prefix-filter (and possibly apply the no-space
//!    workaround) when `NoSpace` is set or `NoFileComp` is clear.
//! 7. **Present** the surviving candidates, or **FileFallback** when
//!    nothing is left and file completion is still allowed.
//!
//! Every failure mode is local and terminal: the run degrades to the
//! fallback outcome and is never surfaced as a user-visible error.

use std::sync::Arc;

use tracing::debug;

use super::filter::FilterContext;
use super::invoker::HostInvoker;
use crate::protocol::{Candidate, CompletionRequest, CompletionResponse, Directive};

/// Terminal outcome of one interpretation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// Candidates ready for the shell's native completion presentation.
    Candidates(Vec<Candidate>),

    /// Defer to the shell's default filesystem completion.
    FileFallback,
}

/// Runs the completion negotiation against a host program.
pub struct Interpreter {
    invoker: Arc<dyn HostInvoker>,
}

impl Interpreter {
    /// Create an interpreter over the given invoker.
    pub fn new(invoker: Arc<dyn HostInvoker>) -> Self {
        Self { invoker }
    }

    /// Execute one completion request and decide what the shell should do.
    ///
    /// All protocol state lives in this call frame and is discarded when it
    /// returns; consecutive runs share nothing.
    pub fn interpret(&self, request: &CompletionRequest) -> CompletionOutcome {
        let raw = match self.invoker.invoke(request) {
            Ok(raw) => raw,
            Err(e) => {
                debug!(error = %e, "host invocation failed");
                return CompletionOutcome::FileFallback;
            }
        };

        let Some(response) = CompletionResponse::parse(&raw) else {
            debug!("no completions, probably due to a host failure");
            return CompletionOutcome::FileFallback;
        };

        let directive = response.directive;
        debug!(
            directive = directive.bits(),
            candidates = response.candidates.len(),
            "host response"
        );

        if directive.contains(Directive::ERROR) {
            debug!("received error directive: aborting");
            return CompletionOutcome::FileFallback;
        }

        if directive.contains(Directive::FILTER_FILE_EXT)
            || directive.contains(Directive::FILTER_DIRS)
        {
            debug!("file extension or directory filtering not supported");
            return CompletionOutcome::FileFallback;
        }

        let no_space = directive.contains(Directive::NO_SPACE);
        let no_file_comp = directive.contains(Directive::NO_FILE_COMP);

        let mut candidates = response.candidates;

        // Counting valid completions only matters when we may have to
        // suppress the trailing space or fall back to file completion.
        if no_space || !no_file_comp {
            let mut ctx = FilterContext::new(request.current_token(), candidates);
            ctx.retain_prefix_matches();

            let num_comps = ctx.len();
            debug!(num_comps, prefix = request.current_token(), "after prefix filter");

            if num_comps == 1 && no_space {
                ctx.apply_no_space();
            }

            if num_comps == 0 && !no_file_comp {
                debug!("requesting file completion");
                return CompletionOutcome::FileFallback;
            }

            candidates = ctx.into_candidates();
        }

        CompletionOutcome::Candidates(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{HostError, Result};

    /// Invoker returning canned host output.
    struct StaticInvoker(String);

    impl HostInvoker for StaticInvoker {
        fn invoke(&self, _request: &CompletionRequest) -> Result<String> {
            Ok(self.0.clone())
        }
    }

    /// Invoker simulating an absent host binary.
    struct FailingInvoker;

    impl HostInvoker for FailingInvoker {
        fn invoke(&self, request: &CompletionRequest) -> Result<String> {
            Err(HostError::SpawnFailed(format!("{}: not found", request.program())).into())
        }
    }

    fn interpreter(output: &str) -> Interpreter {
        Interpreter::new(Arc::new(StaticInvoker(output.to_string())))
    }

    fn request(prefix: &str) -> CompletionRequest {
        let empty = prefix.is_empty();
        let args = if empty {
            vec![]
        } else {
            vec![prefix.to_string()]
        };
        CompletionRequest::new("mytool", true, args, empty)
    }

    fn values(outcome: CompletionOutcome) -> Vec<String> {
        match outcome {
            CompletionOutcome::Candidates(list) => {
                list.into_iter().map(|c| c.value).collect()
            }
            CompletionOutcome::FileFallback => panic!("expected candidates, got fallback"),
        }
    }

    #[test]
    fn test_scenario_plain_candidates() {
        // Host returns ["apple", "apricot", ":0"], prefix "ap": list unchanged.
        let outcome = interpreter("apple\napricot\n:0\n").interpret(&request("ap"));
        assert_eq!(values(outcome), vec!["apple", "apricot"]);
    }

    #[test]
    fn test_scenario_no_space_doubling() {
        // Host returns ["apple", ":2"], prefix "ap": filtered then doubled.
        let outcome = interpreter("apple\n:2\n").interpret(&request("ap"));
        assert_eq!(values(outcome), vec!["apple", "apple."]);
    }

    #[test]
    fn test_scenario_error_directive_falls_back() {
        let outcome = interpreter(":1\n").interpret(&request("ap"));
        assert_eq!(outcome, CompletionOutcome::FileFallback);
    }

    #[test]
    fn test_scenario_empty_output_falls_back() {
        let outcome = interpreter("").interpret(&request("ap"));
        assert_eq!(outcome, CompletionOutcome::FileFallback);
    }

    #[test]
    fn test_invocation_failure_falls_back() {
        let interp = Interpreter::new(Arc::new(FailingInvoker));
        assert_eq!(interp.interpret(&request("ap")), CompletionOutcome::FileFallback);
    }

    #[test]
    fn test_unsupported_filter_directives_fall_back() {
        // FilterFileExt
        let outcome = interpreter("apple\n:8\n").interpret(&request("ap"));
        assert_eq!(outcome, CompletionOutcome::FileFallback);

        // FilterDirs
        let outcome = interpreter("apple\n:16\n").interpret(&request("ap"));
        assert_eq!(outcome, CompletionOutcome::FileFallback);

        // Combined with otherwise-presentable flags.
        let outcome = interpreter("apple\n:24\n").interpret(&request("ap"));
        assert_eq!(outcome, CompletionOutcome::FileFallback);
    }

    #[test]
    fn test_zero_matches_without_no_file_comp_falls_back() {
        let outcome = interpreter("banana\n:0\n").interpret(&request("ap"));
        assert_eq!(outcome, CompletionOutcome::FileFallback);
    }

    #[test]
    fn test_zero_matches_with_no_file_comp_presents_empty_list() {
        let outcome = interpreter("banana\n:4\n").interpret(&request("ap"));
        assert_eq!(outcome, CompletionOutcome::Candidates(vec![]));
    }

    #[test]
    fn test_no_file_comp_without_no_space_skips_filtering() {
        // NoFileComp set and NoSpace clear: candidates pass through even
        // when they do not match the prefix.
        let outcome = interpreter("banana\ncherry\n:4\n").interpret(&request("ap"));
        assert_eq!(values(outcome), vec!["banana", "cherry"]);
    }

    #[test]
    fn test_no_space_with_several_matches_does_not_double() {
        let outcome = interpreter("apple\napricot\n:2\n").interpret(&request("ap"));
        assert_eq!(values(outcome), vec!["apple", "apricot"]);
    }

    #[test]
    fn test_no_space_doubling_drops_description() {
        let outcome = interpreter("apple\tA fruit\n:6\n").interpret(&request("ap"));
        assert_eq!(values(outcome), vec!["apple", "apple."]);
    }

    #[test]
    fn test_empty_prefix_keeps_everything() {
        let outcome = interpreter("add\nremove\nstatus\n:0\n").interpret(&request(""));
        assert_eq!(values(outcome), vec!["add", "remove", "status"]);
    }

    #[test]
    fn test_descriptions_survive_presentation() {
        let outcome = interpreter("add\tAdd a thing\nado\n:0\n").interpret(&request("ad"));
        match outcome {
            CompletionOutcome::Candidates(list) => {
                assert_eq!(list[0].description.as_deref(), Some("Add a thing"));
                assert_eq!(list[1].description, None);
            }
            CompletionOutcome::FileFallback => panic!("expected candidates"),
        }
    }
}
