use crate::nfa::{Automaton, StateId};
use crate::parser::SyntaxNode;
use log::debug;

/// A fragment of an automaton under construction: its entry state and its
/// exit state. Every fragment has exactly one of each, at every recursion
/// level, and composition only ever adds epsilon edges between fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment {
    pub start: StateId,
    pub accept: StateId,
}

/// Compiler that converts a syntax tree to an NFA by Thompson's
/// construction. All fragments share one state arena; states are never
/// renamed, merged, or deleted during composition.
pub struct Compiler {
    automaton: Automaton,
}

impl Compiler {
    /// Create a new compiler.
    pub fn new() -> Self {
        Self {
            automaton: Automaton::new(),
        }
    }

    /// Compile a syntax tree into an automaton.
    ///
    /// Total over trees produced by the parser. None of the constructed
    /// states carries the `accepting` flag; the distinguished accept state
    /// is tracked by index on the returned automaton only.
    pub fn compile(mut self, tree: &SyntaxNode) -> Automaton {
        let fragment = self.compile_node(tree);
        self.automaton.start = fragment.start;
        self.automaton.accept = fragment.accept;

        debug!(
            "compiled automaton: {} states, {} transitions",
            self.automaton.states.len(),
            self.automaton.transitions.len()
        );
        self.automaton
    }

    /// Compile one syntax node to a fragment, post-order.
    fn compile_node(&mut self, node: &SyntaxNode) -> Fragment {
        match node {
            SyntaxNode::Literal(symbol) => self.compile_literal(*symbol),
            SyntaxNode::Concat(left, right) => self.compile_concat(left, right),
            SyntaxNode::Union(left, right) => self.compile_union(left, right),
            SyntaxNode::Star(inner) => self.compile_star(inner),
            SyntaxNode::Group(inner) => self.compile_node(inner),
        }
    }

    /// A literal symbol: start, accept, and one labeled transition.
    fn compile_literal(&mut self, symbol: char) -> Fragment {
        let start = self.automaton.add_state(false);
        let accept = self.automaton.add_state(false);
        self.automaton.add_transition(start, accept, Some(symbol));
        Fragment { start, accept }
    }

    /// Concatenation: epsilon from the left fragment's accept to the right
    /// fragment's start; both fragments are kept unchanged otherwise.
    fn compile_concat(&mut self, left: &SyntaxNode, right: &SyntaxNode) -> Fragment {
        let l = self.compile_node(left);
        let r = self.compile_node(right);
        self.automaton.add_transition(l.accept, r.start, None);
        Fragment {
            start: l.start,
            accept: r.accept,
        }
    }

    /// Union: fresh start/accept pair, epsilon edges into both branches and
    /// out of both branch accepts.
    fn compile_union(&mut self, left: &SyntaxNode, right: &SyntaxNode) -> Fragment {
        let l = self.compile_node(left);
        let r = self.compile_node(right);
        let start = self.automaton.add_state(false);
        let accept = self.automaton.add_state(false);
        self.automaton.add_transition(start, l.start, None);
        self.automaton.add_transition(start, r.start, None);
        self.automaton.add_transition(l.accept, accept, None);
        self.automaton.add_transition(r.accept, accept, None);
        Fragment { start, accept }
    }

    /// Kleene star: fresh start/accept pair, a bypass edge for zero
    /// repetitions, and a loop edge back to the inner start.
    fn compile_star(&mut self, inner: &SyntaxNode) -> Fragment {
        let x = self.compile_node(inner);
        let start = self.automaton.add_state(false);
        let accept = self.automaton.add_state(false);
        self.automaton.add_transition(start, accept, None);
        self.automaton.add_transition(start, x.start, None);
        self.automaton.add_transition(x.accept, x.start, None);
        self.automaton.add_transition(x.accept, accept, None);
        Fragment { start, accept }
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    fn build(pattern: &str) -> Automaton {
        Compiler::new().compile(&parse(pattern).unwrap())
    }

    /// Every transition endpoint and both distinguished states must be
    /// inside the arena.
    fn assert_well_formed(automaton: &Automaton) {
        assert!(automaton.start < automaton.states.len());
        assert!(automaton.accept < automaton.states.len());
        for transition in &automaton.transitions {
            assert!(transition.from < automaton.states.len());
            assert!(transition.to < automaton.states.len());
        }
    }

    #[test]
    fn literal_shape() {
        let automaton = build("a");
        assert_well_formed(&automaton);
        assert_eq!(automaton.states.len(), 2);
        assert_eq!(automaton.transitions.len(), 1);
        assert_eq!(automaton.transitions[0].symbol, Some('a'));
        assert_eq!(automaton.transitions[0].from, automaton.start);
        assert_eq!(automaton.transitions[0].to, automaton.accept);
    }

    #[test]
    fn concat_adds_one_epsilon() {
        let automaton = build("ab");
        assert_well_formed(&automaton);
        assert_eq!(automaton.states.len(), 4);
        assert_eq!(automaton.transitions.len(), 3);
        let epsilons = automaton
            .transitions
            .iter()
            .filter(|t| t.symbol.is_none())
            .count();
        assert_eq!(epsilons, 1);
    }

    #[test]
    fn union_shape() {
        let automaton = build("a|b");
        assert_well_formed(&automaton);
        // two literal fragments plus a fresh start/accept pair
        assert_eq!(automaton.states.len(), 6);
        assert_eq!(automaton.transitions.len(), 6);
        let epsilons = automaton
            .transitions
            .iter()
            .filter(|t| t.symbol.is_none())
            .count();
        assert_eq!(epsilons, 4);
    }

    #[test]
    fn star_shape() {
        let automaton = build("a*");
        assert_well_formed(&automaton);
        assert_eq!(automaton.states.len(), 4);
        assert_eq!(automaton.transitions.len(), 5);
        let epsilons = automaton
            .transitions
            .iter()
            .filter(|t| t.symbol.is_none())
            .count();
        assert_eq!(epsilons, 4);
    }

    #[test]
    fn group_is_transparent() {
        assert_eq!(build("(ab)"), build("ab"));
    }

    #[test]
    fn no_state_carries_the_accepting_flag() {
        let automaton = build("(a|b)*c");
        assert_well_formed(&automaton);
        assert!(automaton.states.iter().all(|s| !s.accepting));
    }

    #[test]
    fn nested_star_stays_well_formed() {
        let automaton = build("(a*)*");
        assert_well_formed(&automaton);
    }
}
