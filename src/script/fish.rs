//! Fish completion script renderer.
//!
//! Renders the interpreter's decision procedure in fish syntax for a named
//! host program. The emitted script is self-contained: it erases any
//! previous completion registrations for the program, registers a single
//! provider function, and speaks the request/response protocol against the
//! host's hidden completion sub-command.

use std::io::Write;

use crate::error::Result;
use crate::protocol::{COMPLETE_NO_DESC_REQUEST_CMD, COMPLETE_REQUEST_CMD, Directive};

/// Derive the function/variable namespace for a program name.
///
/// Fish identifiers must not contain `-` or `:`; both are replaced with `_`
/// so scripts for differently-named programs cannot collide.
pub(super) fn identifier_for(name: &str) -> String {
    name.replace(['-', ':'], "_")
}

/// Write the fish completion script for `name` to `w`.
///
/// `include_descriptions` selects which of the two request tokens the
/// script sends, and with it whether the host responds with candidate
/// descriptions.
pub fn generate_fish(w: &mut dyn Write, name: &str, include_descriptions: bool) -> Result<()> {
    let var = identifier_for(name);
    let cmd = if include_descriptions {
        COMPLETE_REQUEST_CMD
    } else {
        COMPLETE_NO_DESC_REQUEST_CMD
    };

    writeln!(w, "# fish completion for {name:<36} -*- shell-script -*-")?;
    write!(
        w,
        r#"
function __{var}_debug
    set file "$BASH_COMP_DEBUG_FILE"
    if test -n "$file"
        echo "$argv" >> $file
    end
end

function __{var}_perform_completion
    __{var}_debug "Starting __{var}_perform_completion"

    set args (string split -- " " (commandline -c))
    set lastArg "$args[-1]"

    __{var}_debug "args: $args"
    __{var}_debug "last arg: $lastArg"

    # An empty token under the cursor must reach the host as an explicit
    # empty argument, otherwise it vanishes in word splitting.
    set emptyArg ""
    if test -z "$lastArg"
        __{var}_debug "Setting emptyArg"
        set emptyArg \"\"
    end
    __{var}_debug "emptyArg: $emptyArg"

    if not type -q "$args[1]"
        # Happens when "complete --do-complete {name}" runs while sourcing
        # this script and the program is not on PATH.
        __{var}_debug "Cannot find $args[1]. No completions."
        return
    end

    set requestComp "$args[1] {cmd} $args[2..-1] $emptyArg"
    __{var}_debug "Calling $requestComp"

    set results (eval $requestComp 2> /dev/null)
    set comps $results[1..-2]
    set directiveLine $results[-1]

    # When completing a flag written as <program> -n=<TAB>, fish expects
    # each candidate to carry the flag part as a prefix.
    set flagPrefix (string match -r -- '-.*=' "$lastArg")

    __{var}_debug "Comps: $comps"
    __{var}_debug "DirectiveLine: $directiveLine"
    __{var}_debug "flagPrefix: $flagPrefix"

    for comp in $comps
        printf "%s%s\n" "$flagPrefix" "$comp"
    end

    printf "%s\n" "$directiveLine"
end

# Fills the global __{var}_comp_results with the program's completion
# choices, and returns false when file completion should be performed
# instead.
function __{var}_prepare_completions
    __{var}_debug ""
    __{var}_debug "========= starting completion logic =========="

    # Start fresh
    set --erase __{var}_comp_results

    set results (__{var}_perform_completion)
    __{var}_debug "Completion results: $results"

    if test -z "$results"
        __{var}_debug "No completion, probably due to a failure"
        # File completion cannot make things worse here.
        return 1
    end

    set directive (string sub --start 2 $results[-1])
    set --global __{var}_comp_results $results[1..-2]

    __{var}_debug "Completions are: $__{var}_comp_results"
    __{var}_debug "Directive is: $directive"

    set shellCompDirectiveError {err}
    set shellCompDirectiveNoSpace {nospace}
    set shellCompDirectiveNoFileComp {nofile}
    set shellCompDirectiveFilterFileExt {fileext}
    set shellCompDirectiveFilterDirs {dirs}

    if test -z "$directive"
        set directive 0
    end

    set compErr (math (math --scale 0 $directive / $shellCompDirectiveError) % 2)
    if test $compErr -eq 1
        __{var}_debug "Received error directive: aborting."
        # File completion cannot make things worse here.
        return 1
    end

    set filefilter (math (math --scale 0 $directive / $shellCompDirectiveFilterFileExt) % 2)
    set dirfilter (math (math --scale 0 $directive / $shellCompDirectiveFilterDirs) % 2)
    if test $filefilter -eq 1; or test $dirfilter -eq 1
        __{var}_debug "File extension filtering or directory filtering not supported"
        # Full file completion instead of silently ignoring the request.
        return 1
    end

    set nospace (math (math --scale 0 $directive / $shellCompDirectiveNoSpace) % 2)
    set nofiles (math (math --scale 0 $directive / $shellCompDirectiveNoFileComp) % 2)

    __{var}_debug "nospace: $nospace, nofiles: $nofiles"

    # The number of valid completions only matters when a space may have to
    # be suppressed or file completion may still apply. The host's list can
    # be broader than strict prefix matches, and fish matches on other
    # criteria too, so re-filter on prefix before counting.
    if test $nospace -ne 0; or test $nofiles -eq 0
        set prefix (commandline -t)
        __{var}_debug "prefix: $prefix"

        set completions
        for comp in $__{var}_comp_results
            if test (string match -e -r "^$prefix" "$comp")
                set -a completions $comp
            end
        end
        set --global __{var}_comp_results $completions
        __{var}_debug "Filtered completions are: $__{var}_comp_results"

        # The variable must stay unquoted for count to see the elements.
        set numComps (count $__{var}_comp_results)
        __{var}_debug "numComps: $numComps"

        if test $numComps -eq 1; and test $nospace -ne 0
            # A single match would get a trailing space appended by fish.
            # Offering a second, longer decoy keeps the completion ambiguous
            # and the space away. Descriptions are split off first since the
            # extra character must come before them, and a single real
            # completion gets expanded immediately without one anyway.
            __{var}_debug "Adding second completion to perform nospace directive"
            set split (string split --max 1 \t $__{var}_comp_results[1])
            set --global __{var}_comp_results $split[1] $split[1].
            __{var}_debug "Completions are now: $__{var}_comp_results"
        end

        if test $numComps -eq 0; and test $nofiles -eq 0
            # Matching bash and zsh: file completion only when there is
            # truly nothing else to offer.
            __{var}_debug "Requesting file completion"
            return 1
        end
    end

    return 0
end

# Completions load lazily in fish, so trigger them now to be able to wipe
# whatever another script registered for this program. The trailing space
# completes arguments of the program rather than the program name itself.
complete --do-complete "{name} " > /dev/null 2>&1
# '> /dev/null 2>&1' instead of '&>' for compatibility with older fish.

# All completions for this program are handled here; drop the rest.
complete -c {name} -e

# __{var}_prepare_completions sets up __{var}_comp_results with the
# program's completion choices.
complete -c {name} -n '__{var}_prepare_completions' -f -a '$__{var}_comp_results'

"#,
        var = var,
        name = name,
        cmd = cmd,
        err = Directive::ERROR.bits(),
        nospace = Directive::NO_SPACE.bits(),
        nofile = Directive::NO_FILE_COMP.bits(),
        fileext = Directive::FILTER_FILE_EXT.bits(),
        dirs = Directive::FILTER_DIRS.bits(),
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(name: &str, include_descriptions: bool) -> String {
        let mut buf = Vec::new();
        generate_fish(&mut buf, name, include_descriptions).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_identifier_sanitization() {
        assert_eq!(identifier_for("mytool"), "mytool");
        assert_eq!(identifier_for("my-tool"), "my_tool");
        assert_eq!(identifier_for("kubectl-ns:prod"), "kubectl_ns_prod");
    }

    #[test]
    fn test_script_registration_contract() {
        let script = render("mytool", true);
        // Pre-trigger, erase, then register exactly one provider.
        assert!(script.contains("complete --do-complete \"mytool \" > /dev/null 2>&1"));
        assert!(script.contains("complete -c mytool -e"));
        assert!(script.contains(
            "complete -c mytool -n '__mytool_prepare_completions' -f -a '$__mytool_comp_results'"
        ));
    }

    #[test]
    fn test_script_uses_sanitized_namespace() {
        let script = render("my-tool", true);
        assert!(script.contains("function __my_tool_perform_completion"));
        assert!(script.contains("function __my_tool_prepare_completions"));
        // The raw name still appears where the shell needs it.
        assert!(script.contains("complete -c my-tool -e"));
        // No identifier was derived from the unsanitized name.
        assert!(!script.contains("__my-tool_"));
    }

    #[test]
    fn test_script_request_token_selection() {
        assert!(render("mytool", true).contains(" __complete "));
        assert!(render("mytool", false).contains(" __completeNoDesc "));
    }

    #[test]
    fn test_script_embeds_directive_bits() {
        let script = render("mytool", true);
        assert!(script.contains("set shellCompDirectiveError 1"));
        assert!(script.contains("set shellCompDirectiveNoSpace 2"));
        assert!(script.contains("set shellCompDirectiveNoFileComp 4"));
        assert!(script.contains("set shellCompDirectiveFilterFileExt 8"));
        assert!(script.contains("set shellCompDirectiveFilterDirs 16"));
    }

    #[test]
    fn test_script_appends_empty_marker() {
        let script = render("mytool", true);
        assert!(script.contains("set emptyArg \\\"\\\""));
    }

    #[test]
    fn test_script_no_space_sentinel_placement() {
        let script = render("mytool", true);
        assert!(script.contains("set --global __mytool_comp_results $split[1] $split[1]."));
    }
}
