use std::collections::HashSet;

/// A state ID: a stable index into the automaton's state arena.
pub type StateId = usize;

/// A state in an automaton graph.
///
/// The `accepting` flag participates only in the minimizer's initial
/// classification. Whole-string acceptance is decided by membership of the
/// automaton's designated `accept` state, never by this flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State {
    pub accepting: bool,
}

/// A directed edge `from -> to`, labeled with a symbol or with epsilon
/// (`symbol == None`, consuming no input).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub from: StateId,
    pub to: StateId,
    pub symbol: Option<char>,
}

/// An automaton over a state arena, with one distinguished start state and
/// one distinguished accept state.
///
/// Transitions live in a flat list; several transitions may share the same
/// `(from, symbol)` pair, which is what makes the graph an NFA. Automata are
/// immutable once a construction stage hands them out; every stage produces
/// a fresh automaton rather than mutating its input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Automaton {
    pub states: Vec<State>,
    pub transitions: Vec<Transition>,
    pub start: StateId,
    pub accept: StateId,
}

impl Automaton {
    /// Create a new empty automaton.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            transitions: Vec::new(),
            start: 0,
            accept: 0,
        }
    }

    /// Add a new state and return its ID.
    pub fn add_state(&mut self, accepting: bool) -> StateId {
        let id = self.states.len();
        self.states.push(State { accepting });
        id
    }

    /// Add a transition; `symbol == None` is an epsilon transition.
    pub fn add_transition(&mut self, from: StateId, to: StateId, symbol: Option<char>) {
        self.transitions.push(Transition { from, to, symbol });
    }

    /// Get the epsilon closure of a set of states: every state reachable
    /// through epsilon transitions alone, including the set itself.
    ///
    /// Worklist traversal; the visited set doubles as the result, so the
    /// epsilon cycles introduced by the star construction terminate.
    pub fn epsilon_closure(&self, states: &HashSet<StateId>) -> HashSet<StateId> {
        let mut closure = states.clone();
        let mut stack: Vec<StateId> = states.iter().copied().collect();

        while let Some(state) = stack.pop() {
            for transition in &self.transitions {
                if transition.from == state
                    && transition.symbol.is_none()
                    && closure.insert(transition.to)
                {
                    stack.push(transition.to);
                }
            }
        }

        closure
    }
}

impl Default for Automaton {
    fn default() -> Self {
        Self::new()
    }
}
