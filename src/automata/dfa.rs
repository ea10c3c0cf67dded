//! Subset construction with input-alphabet interval partitioning (spec section 4.3).

use crate::automata::alphabet;
use crate::automata::nfa::{Nfa, StateSetId};
use crate::automata::state::{Identifier, State, Transition};
use crate::error::BuildError;
use crate::interval::Interval;

use std::collections::HashMap;

/// A deterministic finite automaton built by subset construction over an [`Nfa`].
///
/// Index 0 is the initial state. Every state's outgoing transition intervals are pairwise
/// disjoint by construction (determinism), and at most one `action` is carried per state.
///
/// ```text
///  ┌───┐  'D'  ┌───┐  'F'  ┌───┐  'A'  ┌───┐
///  │ 0 │ ----> │ 1 │ ----> │ 2 │ ----> │ 3 │
///  └───┘       └───┘       └───┘       └───┘
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dfa<A> {
    states: Vec<State<A>>,
}

impl<A: Copy> Dfa<A> {
    pub fn initial(&self) -> Identifier {
        Identifier::new(0)
    }

    pub fn states(&self) -> &[State<A>] {
        &self.states
    }

    /// Looks up the transition (if any) out of `state` whose interval contains `byte`.
    pub fn step(&self, state: Identifier, byte: u8) -> Option<Identifier> {
        self.states[state.id].links().iter().find(|t| t.interval.contains_byte(byte)).map(|t| t.target)
    }

    pub fn action(&self, state: Identifier) -> Option<A> {
        self.states[state.id].action()
    }
}

/// Builds a DFA from `nfa` by subset construction.
///
/// `strict` controls what happens when more than one NFA accept state contributes to a single
/// subset (an ambiguous rule set): a [`log::warn!`] diagnostic is always emitted; when `strict` is
/// `true` this additionally becomes a fatal [`BuildError::AmbiguousAccept`]. The first NFA state in
/// index order always wins the tie, which -- because [`crate::automata::nfa::merge_nfas`] places
/// earlier children at lower indices -- means the earlier-registered rule wins.
pub fn dfa_of<A: Copy>(nfa: &Nfa<A>, strict: bool) -> Result<Dfa<A>, BuildError> {
    let initial_closure = nfa.eps_closure([nfa.initial()]);
    let mut seen: Vec<StateSetId> = vec![initial_closure.clone()];
    let mut index_of: HashMap<StateSetId, usize> = HashMap::new();
    index_of.insert(initial_closure, 0);

    let mut states: Vec<State<A>> = Vec::new();
    let mut i = 0;
    while i < seen.len() {
        let set = seen[i].clone();
        let mut state = State::default();

        let mut accept_candidates: Vec<usize> = Vec::new();
        for &id in &set {
            if let Some(action) = nfa.states()[id.id].action() {
                if accept_candidates.is_empty() {
                    state.set_action(action);
                }
                accept_candidates.push(id.id);
            }
        }
        if accept_candidates.len() > 1 {
            log::warn!(
                "ambiguous accept at DFA state {i}: NFA states {accept_candidates:?} all match \
                 the same lexeme; NFA state {} (first registered) wins",
                accept_candidates[0]
            );
            if strict {
                return Err(BuildError::AmbiguousAccept { dfa_state: i, nfa_states: accept_candidates });
            }
        }

        let intervals: Vec<Interval> =
            set.iter().flat_map(|id| nfa.states()[id.id].links().iter().map(|t| t.interval)).collect();
        let refined = alphabet::refine(intervals);
        log::trace!("DFA state {i}: {} NFA states, {} refined intervals", set.len(), refined.len());

        for interval in refined {
            let mut targets: Vec<Identifier> = Vec::new();
            for &id in &set {
                for link in nfa.states()[id.id].links() {
                    if link.interval.contains(&interval) {
                        targets.push(link.target);
                    }
                }
            }
            if targets.is_empty() {
                continue;
            }
            let closure = nfa.eps_closure(targets);
            let target_index = *index_of.entry(closure.clone()).or_insert_with(|| {
                seen.push(closure);
                seen.len() - 1
            });
            state.add_link(Transition::new(interval, Identifier::new(target_index)));
        }

        states.push(state);
        i += 1;
    }

    log::debug!("built DFA with {} states from NFA with {} states", states.len(), nfa.states().len());
    Ok(Dfa { states })
}
