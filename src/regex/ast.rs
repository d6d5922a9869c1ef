use std::fmt;

use super::super::automaton::{Label, MetaKind};

/// Structural representation of a pattern, built once by the parser and
/// read-only thereafter.
///
/// Character-class alternatives reuse [`Label`], the closed union of
/// single-character predicates: the grammar only allows character atoms
/// inside a class, and embedding the transition label directly makes that
/// restriction a static guarantee instead of a runtime check.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Node {
    /// A single literal character.
    Literal(char),
    /// `.`, `\s` or `\S`.
    Meta(MetaKind),
    /// Ordered concatenation. The empty pattern is an empty sequence.
    Sequence(Vec<Node>),
    /// Zero-or-more repetition of the child.
    Star(Box<Node>),
    /// Ordered alternation over single-character atoms.
    CharList(Vec<Label>),
}

impl Node {
    pub fn lit(c: char) -> Node {
        Node::Literal(c)
    }

    pub fn meta(kind: MetaKind) -> Node {
        Node::Meta(kind)
    }

    pub fn seq(children: Vec<Node>) -> Node {
        Node::Sequence(children)
    }

    pub fn star(child: Node) -> Node {
        Node::Star(Box::new(child))
    }

    pub fn list(chars: Vec<Label>) -> Node {
        Node::CharList(chars)
    }
}

impl fmt::Display for Node {
    /// Render the node back as pattern text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Node::Literal(c) => write!(f, "{}", c),
            Node::Meta(kind) => write!(f, "{}", Label::Meta(*kind)),
            Node::Sequence(children) => {
                for child in children {
                    write!(f, "{}", child)?;
                }
                Ok(())
            }
            Node::Star(child) => write!(f, "{}*", child),
            Node::CharList(chars) => {
                write!(f, "[")?;
                for label in chars {
                    write!(f, "{}", label)?;
                }
                write!(f, "]")
            }
        }
    }
}
