//! Fatal, build-time errors for the pattern -> NFA -> DFA -> scanner pipeline.
//!
//! Nothing in this crate panics on malformed *user* input; construction failures are reported
//! through `Result` so a build script or `const fn` caller can propagate them with `?`.

use thiserror::Error;

/// Errors that can occur while building a pattern, NFA, DFA, or scanner.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// `AtMost(n, _)` was constructed with `n == 0`; `p{0,n}` requires `n >= 1`.
    #[error("AtMost requires n >= 1, got n = 0")]
    AtMostZero,

    /// `Times(n, m, _)` was constructed with `n > m`.
    #[error("Times requires n <= m, got n = {n}, m = {m}")]
    InvalidTimesBounds { n: usize, m: usize },

    /// More than one NFA accept state contributed to a single DFA subset, and
    /// [`crate::generator::GeneratorConfig::strict`] asked for this to be a hard error rather than
    /// a logged warning.
    #[error("ambiguous accept at DFA state {dfa_state}: rules at NFA states {nfa_states:?} all \
             match the same lexeme; rule registered first (lowest NFA state id) wins")]
    AmbiguousAccept { dfa_state: usize, nfa_states: Vec<usize> },
}
