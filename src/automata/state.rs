//! States, transitions, and identifiers shared by the NFA and DFA representations.

use crate::interval::Interval;

// ==================
// === Identifier ===
// ==================

/// A state identifier for an arbitrary finite automaton.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier {
    pub id: usize,
}

impl Identifier {
    /// The identifier of the invalid ("no such transition") state.
    pub const INVALID: Identifier = Identifier { id: usize::MAX };

    pub const fn new(id: usize) -> Identifier {
        Identifier { id }
    }
}

impl Default for Identifier {
    fn default() -> Self {
        Identifier::INVALID
    }
}

impl From<usize> for Identifier {
    fn from(id: usize) -> Self {
        Identifier { id }
    }
}

// ==================
// === Transition ===
// ==================

/// A labelled NFA/DFA transition: triggers on any byte in `interval`, moving to `target`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub interval: Interval,
    pub target: Identifier,
}

impl Transition {
    pub const fn new(interval: Interval, target: Identifier) -> Self {
        Transition { interval, target }
    }
}

// =============
// === State ===
// =============

/// An NFA state: zero or more epsilon transitions, zero or more labelled transitions, and an
/// optional action tag (present only on accept states).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct State<A> {
    epsilon_links: Vec<Identifier>,
    links: Vec<Transition>,
    action: Option<A>,
}

impl<A> Default for State<A> {
    fn default() -> Self {
        State { epsilon_links: Vec::new(), links: Vec::new(), action: None }
    }
}

impl<A: Copy> State<A> {
    pub fn add_epsilon_link(&mut self, target: Identifier) {
        self.epsilon_links.push(target);
    }

    pub fn add_link(&mut self, link: Transition) {
        self.links.push(link);
    }

    pub fn epsilon_links(&self) -> &[Identifier] {
        &self.epsilon_links
    }

    pub fn links(&self) -> &[Transition] {
        &self.links
    }

    pub fn action(&self) -> Option<A> {
        self.action
    }

    pub fn set_action(&mut self, action: A) {
        self.action = Some(action);
    }

    /// Shifts every state index referenced by this state (epsilon and labelled targets) by
    /// `shift`. Used by [`crate::automata::nfa::Nfa::splice`] to relocate a spliced-in sub-NFA.
    pub fn shifted(mut self, shift: usize) -> Self {
        for link in &mut self.epsilon_links {
            link.id += shift;
        }
        for link in &mut self.links {
            link.target.id += shift;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_identifier_is_invalid() {
        assert_eq!(Identifier::default(), Identifier::INVALID);
    }

    #[test]
    fn state_default_is_empty() {
        let state: State<u8> = State::default();
        assert!(state.epsilon_links().is_empty());
        assert!(state.links().is_empty());
        assert_eq!(state.action(), None);
    }

    #[test]
    fn shifted_moves_all_targets() {
        let mut state: State<u8> = State::default();
        state.add_epsilon_link(Identifier::new(2));
        state.add_link(Transition::new(Interval::single(b'a'), Identifier::new(5)));
        let shifted = state.shifted(10);
        assert_eq!(shifted.epsilon_links(), &[Identifier::new(12)]);
        assert_eq!(shifted.links()[0].target, Identifier::new(15));
    }
}

