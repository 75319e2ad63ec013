use crate::nfa::{Automaton, StateId};
use log::trace;
use std::collections::HashSet;

/// A matcher that runs an automaton against input strings by subset
/// simulation, computing epsilon closures on the fly.
pub struct Matcher<'a> {
    automaton: &'a Automaton,
}

impl<'a> Matcher<'a> {
    /// Create a new matcher for the given automaton.
    pub fn new(automaton: &'a Automaton) -> Self {
        Self { automaton }
    }

    /// Check whether the automaton accepts the entire input.
    ///
    /// Starts from the epsilon closure of the start state, replaces the
    /// state set with `move(set, symbol)` per input character, and accepts
    /// iff the automaton's designated accept state is in the final set.
    /// Acceptance is by state identity; the per-state `accepting` flag
    /// plays no part here.
    pub fn accepts(&self, input: &str) -> bool {
        let mut current = self
            .automaton
            .epsilon_closure(&HashSet::from([self.automaton.start]));

        for symbol in input.chars() {
            current = self.step(&current, symbol);
            trace!("consumed {:?}, {} states live", symbol, current.len());
            if current.is_empty() {
                return false;
            }
        }

        current.contains(&self.automaton.accept)
    }

    /// One step of the subset simulation: every state reachable from the
    /// set by one transition labeled `symbol`, closed under epsilon
    /// transitions.
    fn step(&self, states: &HashSet<StateId>, symbol: char) -> HashSet<StateId> {
        let mut moved = HashSet::new();

        for transition in &self.automaton.transitions {
            if transition.symbol == Some(symbol) && states.contains(&transition.from) {
                moved.insert(transition.to);
            }
        }

        self.automaton.epsilon_closure(&moved)
    }
}
