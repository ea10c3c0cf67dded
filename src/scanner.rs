//! The longest-match scanning interpreter (spec section 4.4).

use crate::automata::dfa::Dfa;
use crate::interval::Interval;

/// A token-producing callable: the lexeme that matched, in, the token value, out.
///
/// Kept as a plain function pointer (not a boxed/capturing closure) so that [`Scanner`]'s tables
/// remain plain, freely-shareable data with no per-scanner allocation (spec section 9, "Action
/// opacity"). A token kind that the catalogue describes as "a pattern plus a constant value" is
/// simply an `Action<T>` that ignores its argument and returns that constant.
pub type Action<T> = fn(&[u8]) -> T;

/// One DFA state's transition row: the target state index for each non-overlapping interval.
type Row = Vec<(Interval, usize)>;

/// A built scanner: a jagged transition table plus a parallel action vector, one action per state.
///
/// Every state has an action -- states with no DFA accept action carry the reject action supplied
/// at generation time, so `scan` never needs a special case for "no rule matched".
pub struct Scanner<T> {
    transitions: Vec<Row>,
    actions: Vec<Action<T>>,
}

impl<T> Scanner<T> {
    /// Builds scanner tables from a DFA whose states are already tagged with `Action<T>` (or
    /// `None`, standing for the reject path).
    pub fn from_dfa(dfa: &Dfa<Action<T>>, reject_action: Action<T>) -> Self {
        let transitions = dfa
            .states()
            .iter()
            .map(|state| state.links().iter().map(|t| (t.interval, t.target.id)).collect())
            .collect();
        let actions =
            dfa.states().iter().map(|state| state.action().unwrap_or(reject_action)).collect();
        Scanner { transitions, actions }
    }

    /// Scans the longest matching prefix of `input` starting at `*cursor`, advances `*cursor` past
    /// it, and returns the token value produced by the action tagged on the state the scan ended
    /// in. If no transition at all applies from the initial state, this invokes the reject action
    /// on an empty lexeme and leaves `*cursor` unchanged.
    pub fn scan(&self, input: &[u8], cursor: &mut usize) -> T {
        let start = *cursor;
        let mut state = 0usize;
        while *cursor < input.len() {
            let byte = input[*cursor];
            match self.transitions[state].iter().find(|(interval, _)| interval.contains_byte(byte))
            {
                Some(&(_, target)) => {
                    state = target;
                    *cursor += 1;
                }
                None => break,
            }
        }
        (self.actions[state])(&input[start..*cursor])
    }
}
