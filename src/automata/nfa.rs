//! Thompson-style construction of epsilon-NFAs from patterns (spec section 4.2).

use crate::automata::state::{Identifier, State, Transition};
use crate::interval::Interval;
use crate::pattern::Pattern;

use std::collections::BTreeSet;

/// A set of NFA state identifiers, used as a dictionary key during subset construction.
pub type StateSetId = BTreeSet<Identifier>;

/// A Thompson-style epsilon-NFA, generic over the action type tagged on accept states.
///
/// Until [`merge_nfas`] is called, every `Nfa<A>` satisfies the invariant that index 0 is the
/// unique initial state and the last index is the unique accept state.
///
/// ```text
///  ┌───┐  'N'  ┌───┐    ┌───┐  'F'  ┌───┐    ┌───┐  'A'  ┌───┐
///  │ 0 │ ----> │ 1 │ -> │ 2 │ ----> │ 3 │ -> │ 3 │ ----> │ 3 │
///  └───┘       └───┘ ε  └───┘       └───┘ ε  └───┘       └───┘
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Nfa<A> {
    states: Vec<State<A>>,
}

impl<A: Copy> Default for Nfa<A> {
    fn default() -> Self {
        Nfa { states: vec![State::default()] }
    }
}

impl<A: Copy> Nfa<A> {
    /// The unique initial state. Always index 0.
    pub fn initial(&self) -> Identifier {
        Identifier::new(0)
    }

    /// The unique accept state, before [`merge_nfas`] introduces multiple accepts.
    pub fn last(&self) -> Identifier {
        Identifier::new(self.states.len() - 1)
    }

    pub fn states(&self) -> &[State<A>] {
        &self.states
    }

    /// Adds a fresh, unconnected state and returns its identifier.
    pub fn new_state(&mut self) -> Identifier {
        let id = self.states.len();
        self.states.push(State::default());
        Identifier::new(id)
    }

    /// Creates an epsilon transition from `source` to `target`.
    pub fn connect(&mut self, source: Identifier, target: Identifier) {
        self.states[source.id].add_epsilon_link(target);
    }

    /// Creates a labelled transition from `source` to `target`, triggered by any byte in `interval`.
    pub fn connect_via(&mut self, source: Identifier, target: Identifier, interval: Interval) {
        self.states[source.id].add_link(Transition::new(interval, target));
    }

    /// Tags `state` with `action`. Used by the generator facade to mark a pattern's unique final
    /// state with the token value it produces, before the per-rule NFAs are merged.
    pub fn set_action(&mut self, state: Identifier, action: A) {
        self.states[state.id].set_action(action);
    }

    /// Appends `other`'s states after mine, shifting every index `other` refers to by the number
    /// of states I had before the append. Returns that shift.
    pub fn splice(&mut self, other: &Nfa<A>) -> usize {
        let shift = self.states.len();
        self.states.extend(other.states.iter().cloned().map(|s| s.shifted(shift)));
        shift
    }

    /// Concatenation: splice `other` after me, then bridge my former last state into the
    /// spliced-in initial state with an epsilon transition. The former-last state is always a pure
    /// sink at the moment of a join (nothing has connected out of it yet), so there is nothing of
    /// its own to move; the epsilon edge is the merge. Preserves "unique final = last".
    pub fn join(&mut self, other: &Nfa<A>) {
        let old_last = self.last();
        let shift = self.splice(other);
        self.connect(old_last, Identifier::new(shift));
    }

    /// Prepends a fresh initial state and appends a fresh final state, each epsilon-connected to
    /// the former initial/final. Isolates the existing machine so that back- or skip-edges added
    /// by a repetition construction can't create spurious paths into the rest of it.
    pub fn extend(&mut self) {
        let old_initial = self.initial();
        let old_final = self.last();
        let mut states = Vec::with_capacity(self.states.len() + 2);
        states.push(State::default());
        states.extend(self.states.drain(..).map(|s| s.shifted(1)));
        states.push(State::default());
        self.states = states;
        let new_initial = Identifier::new(0);
        let new_final = self.last();
        self.connect(new_initial, Identifier::new(old_initial.id + 1));
        self.connect(Identifier::new(old_final.id + 1), new_final);
    }

    /// Saturates `seeds` along epsilon edges and returns the reachable set, including the seeds.
    pub fn eps_closure(&self, seeds: impl IntoIterator<Item = Identifier>) -> StateSetId {
        let mut closure = StateSetId::new();
        let mut worklist: Vec<Identifier> = Vec::new();
        for seed in seeds {
            if closure.insert(seed) {
                worklist.push(seed);
            }
        }
        while let Some(id) = worklist.pop() {
            for &target in self.states[id.id].epsilon_links() {
                if closure.insert(target) {
                    worklist.push(target);
                }
            }
        }
        closure
    }
}

fn singleton<A: Copy>(interval: Interval) -> Nfa<A> {
    let mut nfa: Nfa<A> = Nfa::default();
    let accept = nfa.new_state();
    nfa.connect_via(nfa.initial(), accept, interval);
    nfa
}

fn alternation<A: Copy>(l: &Nfa<A>, r: &Nfa<A>) -> Nfa<A> {
    let mut nfa: Nfa<A> = Nfa::default();
    let initial = nfa.initial();
    let l_shift = nfa.splice(l);
    let r_shift = nfa.splice(r);
    let accept = nfa.new_state();
    nfa.connect(initial, Identifier::new(l_shift));
    nfa.connect(initial, Identifier::new(r_shift));
    nfa.connect(Identifier::new(l_shift + l.last().id), accept);
    nfa.connect(Identifier::new(r_shift + r.last().id), accept);
    nfa
}

/// Builds the Thompson-construction NFA for `pattern`, per the per-variant table in spec section
/// 4.2. Bounded repetitions are unrolled at build time into the equivalent `Seq`/`ZeroOrOne`/
/// `OneOrMore`/`ZeroOrMore` tree; no loop counters live in the resulting machine.
pub fn nfa_of<A: Copy>(pattern: &Pattern) -> Nfa<A> {
    match pattern {
        Pattern::Single(c) => singleton(Interval::single(*c)),
        Pattern::Range(min, max) => singleton(Interval::new(*min, *max)),
        Pattern::Seq(patterns) => {
            let mut iter = patterns.iter();
            let mut nfa = match iter.next() {
                Some(first) => nfa_of(first),
                None => Nfa::default(),
            };
            for pat in iter {
                let next = nfa_of(pat);
                nfa.join(&next);
            }
            nfa
        }
        Pattern::Or(l, r) => alternation(&nfa_of(l), &nfa_of(r)),
        Pattern::ZeroOrOne(p) => {
            let mut nfa = nfa_of(p);
            nfa.extend();
            let initial = nfa.initial();
            let accept = nfa.last();
            nfa.connect(initial, accept);
            nfa
        }
        Pattern::ZeroOrMore(p) => {
            let mut nfa = nfa_of(p);
            let pre_final = nfa.last().id;
            nfa.extend();
            let initial = nfa.initial();
            let accept = nfa.last();
            let body_initial = Identifier::new(1);
            let body_final = Identifier::new(pre_final + 1);
            nfa.connect(initial, accept);
            nfa.connect(body_final, body_initial);
            nfa
        }
        Pattern::OneOrMore(p) => {
            let mut nfa = nfa_of(p);
            let pre_final = nfa.last().id;
            nfa.extend();
            let body_initial = Identifier::new(1);
            let body_final = Identifier::new(pre_final + 1);
            nfa.connect(body_final, body_initial);
            nfa
        }
        Pattern::AtLeast(0, p) => nfa_of(&Pattern::ZeroOrMore(p.clone())),
        Pattern::AtLeast(n, p) => {
            let mut copies: Vec<Pattern> = std::iter::repeat_n((**p).clone(), n - 1).collect();
            copies.push(Pattern::OneOrMore(p.clone()));
            nfa_of(&Pattern::Seq(copies))
        }
        Pattern::AtMost(n, p) => {
            let copies: Vec<Pattern> =
                std::iter::repeat_n(Pattern::ZeroOrOne(p.clone()), *n).collect();
            nfa_of(&Pattern::Seq(copies))
        }
        Pattern::Times(n, m, p) => {
            let mut copies: Vec<Pattern> = std::iter::repeat_n((**p).clone(), *n).collect();
            copies.extend(std::iter::repeat_n(Pattern::ZeroOrOne(p.clone()), m - n));
            nfa_of(&Pattern::Seq(copies))
        }
    }
}

/// Merges independently-built NFAs into one machine with a fresh initial state and one accept per
/// child (each child's own last state, with whatever action was tagged on it preserved). Children
/// are spliced in order, so earlier children land at lower state indices -- this is what makes
/// "first NFA state in a DFA subset wins" equivalent to "earlier-registered rule wins".
pub fn merge_nfas<A: Copy>(nfas: Vec<Nfa<A>>) -> Nfa<A> {
    let mut merged: Nfa<A> = Nfa::default();
    let initial = merged.initial();
    for child in &nfas {
        let shift = merged.splice(child);
        merged.connect(initial, Identifier::new(shift));
    }
    merged
}
