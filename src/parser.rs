use crate::{ParseError, ParseResult};

/// A node in the regular-expression syntax tree.
///
/// `Group` is kept as an explicit wrapper so callers can render the
/// grouping structure of the pattern; the automaton constructor treats it
/// as transparent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxNode {
    /// A single literal symbol.
    Literal(char),
    /// Two subexpressions in sequence.
    Concat(Box<SyntaxNode>, Box<SyntaxNode>),
    /// Either of two subexpressions.
    Union(Box<SyntaxNode>, Box<SyntaxNode>),
    /// Zero or more repetitions of a subexpression.
    Star(Box<SyntaxNode>),
    /// A parenthesized subexpression.
    Group(Box<SyntaxNode>),
}

/// Recursive-descent parser for the supported regex syntax.
///
/// Precedence, tightest first: star, concatenation, union. Each level is one
/// parse function; `parse_union` is the loosest and serves as the entry
/// point, recursing back through `parse_atom` for parenthesized groups.
///
/// Metacharacters are `*`, `|`, `(`, `)`, and the reserved `.`. Every other
/// code point is a literal.
pub struct Parser<'a> {
    pattern: &'a str,
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given pattern.
    pub fn new(pattern: &'a str) -> Self {
        Self {
            pattern,
            pos: 0,
            depth: 0,
        }
    }

    /// Peek at the next character without advancing.
    fn peek(&self) -> Option<char> {
        self.pattern[self.pos..].chars().next()
    }

    /// Advance the parser by one character and return it.
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    /// Parse the whole pattern into a single syntax tree.
    pub fn parse(&mut self) -> ParseResult<SyntaxNode> {
        let node = self.parse_union()?;
        match self.peek() {
            // parse_union only stops early on ')'
            Some(_) => Err(ParseError::UnmatchedParenthesis),
            None => Ok(node),
        }
    }

    /// Parse a union of one or more concatenations: `a|b|c`.
    fn parse_union(&mut self) -> ParseResult<SyntaxNode> {
        let mut node = match self.parse_concat()? {
            Some(node) => node,
            None => {
                return Err(match self.peek() {
                    Some('|') => ParseError::DanglingUnion,
                    // a close paren with no group open, e.g. ")a"
                    Some(')') if self.depth == 0 => ParseError::UnmatchedParenthesis,
                    _ => ParseError::Empty,
                })
            }
        };

        while self.peek() == Some('|') {
            self.advance();
            match self.parse_concat()? {
                Some(right) => node = SyntaxNode::Union(Box::new(node), Box::new(right)),
                None => return Err(ParseError::DanglingUnion),
            }
        }

        Ok(node)
    }

    /// Parse a run of adjacent starred atoms, folding them left to right
    /// into `Concat` nodes. Returns `None` when the run is empty (the next
    /// token is `|`, `)`, or end of pattern).
    fn parse_concat(&mut self) -> ParseResult<Option<SyntaxNode>> {
        let mut node: Option<SyntaxNode> = None;

        while let Some(ch) = self.peek() {
            if ch == '|' || ch == ')' {
                break;
            }
            let atom = self.parse_star()?;
            node = Some(match node {
                Some(left) => SyntaxNode::Concat(Box::new(left), Box::new(atom)),
                None => atom,
            });
        }

        Ok(node)
    }

    /// Parse an atom followed by any number of postfix stars; `a**` is
    /// `Star(Star(a))`.
    fn parse_star(&mut self) -> ParseResult<SyntaxNode> {
        let mut node = self.parse_atom()?;
        while self.peek() == Some('*') {
            self.advance();
            node = SyntaxNode::Star(Box::new(node));
        }
        Ok(node)
    }

    /// Parse a single atom: a parenthesized group or a literal.
    ///
    /// A `*` in atom position has no operand to attach to, and `.` is
    /// reserved: the original design maps it to an operator that nothing
    /// consumes, so it is rejected here rather than silently ignored or
    /// demoted to a literal.
    fn parse_atom(&mut self) -> ParseResult<SyntaxNode> {
        match self.peek() {
            Some('(') => {
                self.advance();
                self.depth += 1;
                let inner = self.parse_union()?;
                match self.advance() {
                    Some(')') => {
                        self.depth -= 1;
                        Ok(SyntaxNode::Group(Box::new(inner)))
                    }
                    _ => Err(ParseError::UnmatchedParenthesis),
                }
            }
            Some('*') => Err(ParseError::DanglingStar),
            Some('.') => Err(ParseError::ReservedDot),
            Some(ch) => {
                self.advance();
                Ok(SyntaxNode::Literal(ch))
            }
            None => Err(ParseError::Empty),
        }
    }
}
