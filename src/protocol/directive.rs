//! Directive bitmask shared between host program and shell.
//!
//! The last line of every completion response carries a non-negative integer
//! describing how the shell should treat the candidate list. The bit values
//! below are the wire contract: the script emitter embeds them via
//! [`Directive::bits`], so the two sides of the protocol cannot drift apart.

use std::ops::BitOr;

/// Set of behavior flags requested by the host program.
///
/// Flags are independent bits, not mutually exclusive states; any of the
/// 2^5 combinations is valid on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Directive(u32);

impl Directive {
    /// The host failed to produce completions; abort and fall back.
    pub const ERROR: Self = Self(1);

    /// Do not append a trailing space after a single accepted completion.
    pub const NO_SPACE: Self = Self(2);

    /// Disable default file completion.
    pub const NO_FILE_COMP: Self = Self(4);

    /// Complete only files with the given extensions (not interpreted here).
    pub const FILTER_FILE_EXT: Self = Self(8);

    /// Complete only directories (not interpreted here).
    pub const FILTER_DIRS: Self = Self(16);

    /// The directive with no flags set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Raw integer value as it appears on the wire.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Decode directive text from a response.
    ///
    /// Fails open: empty or unparsable input yields the empty directive,
    /// never an error. An undecodable directive is indistinguishable from
    /// "no special behavior requested".
    pub fn decode(raw: &str) -> Self {
        raw.trim().parse::<u32>().map(Self).unwrap_or_default()
    }

    /// Exact bit test for `flag`.
    pub const fn contains(self, flag: Self) -> bool {
        (self.0 & flag.0) == flag.0
    }

    /// True when no flags are set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Directive {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}
