//! A small regular-expression engine built as a three-stage pipeline:
//!
//! 1. A recursive-descent parser turns a pattern string into a [`SyntaxNode`]
//!    tree over literals, concatenation, union (`|`), Kleene star (`*`), and
//!    parenthesized grouping.
//! 2. Thompson's construction turns the tree into an NFA: one fragment per
//!    subtree, each with exactly one start and one accept state, composed
//!    only by adding epsilon transitions.
//! 3. An epsilon-closure subset simulation decides whole-string acceptance.
//!
//! An optional Moore partition-refinement pass ([`minimize()`]) merges
//! indistinguishable states of a deterministic automaton.
//!
//! The dot metacharacter is reserved and rejected at parse time; there are no
//! character classes, anchors, or capture groups.
//!
//! ```
//! use thompson_regex::{accepts, build_automaton, parse};
//!
//! let tree = parse("(a|b)c*").unwrap();
//! let automaton = build_automaton(&tree);
//! assert!(accepts(&automaton, "acc"));
//! assert!(!accepts(&automaton, "cb"));
//! ```

pub mod compiler;
pub mod matcher;
pub mod minimize;
pub mod nfa;
pub mod parser;

pub use compiler::{Compiler, Fragment};
pub use matcher::Matcher;
pub use minimize::minimize;
pub use nfa::{Automaton, State, StateId, Transition};
pub use parser::{Parser, SyntaxNode};

use thiserror::Error;

/// The result of parsing a pattern.
pub type ParseResult<T> = Result<T, ParseError>;

/// Errors raised while parsing a pattern.
///
/// All parse errors are reported synchronously and nothing is retried
/// internally; the caller decides whether to ask for a corrected pattern.
/// The later stages (construction, simulation, minimization) are total over
/// well-formed input and have no error surface of their own.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// An opening parenthesis without a matching close, or vice versa.
    #[error("unmatched parenthesis")]
    UnmatchedParenthesis,
    /// A `*` with no operand in front of it.
    #[error("star operator with no operand")]
    DanglingStar,
    /// A `|` missing its left or right operand.
    #[error("union operator missing an operand")]
    DanglingUnion,
    /// The pattern contains `.`, which is reserved and not supported.
    #[error("the dot metacharacter is reserved")]
    ReservedDot,
    /// An empty pattern or an empty group `()`.
    #[error("empty pattern or group")]
    Empty,
}

/// Parse a pattern into a syntax tree.
pub fn parse(pattern: &str) -> ParseResult<SyntaxNode> {
    let mut parser = Parser::new(pattern);
    parser.parse()
}

/// Build an NFA from a syntax tree by Thompson's construction.
pub fn build_automaton(tree: &SyntaxNode) -> Automaton {
    Compiler::new().compile(tree)
}

/// Test whether the automaton accepts the whole input string.
pub fn accepts(automaton: &Automaton, input: &str) -> bool {
    Matcher::new(automaton).accepts(input)
}
