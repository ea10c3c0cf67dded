//! `flexcore`: a finite-automata-based lexer generator.
//!
//! A declarative catalogue of token kinds, each paired with a [`pattern::Pattern`] and an action,
//! compiles down through `pattern -> NFA -> DFA -> scanner tables`
//! ([`automata::nfa`], [`automata::dfa`], [`scanner`]), and the resulting [`scanner::Scanner`]
//! produces the longest-matching token (or a caller-supplied reject token) from a byte cursor.
//!
//! Construction (the [`generator`] facade) is meant to run once, at build time or program start;
//! the resulting scanner tables are immutable, allocation-free to run, and safe to share across
//! threads.

pub mod automata;
pub mod error;
pub mod generator;
pub mod interval;
pub mod pattern;
pub mod scanner;

pub use error::BuildError;
pub use generator::{build_scanner, GeneratorConfig, TokenRule};
pub use interval::Interval;
pub use pattern::Pattern;
pub use scanner::{Action, Scanner};
