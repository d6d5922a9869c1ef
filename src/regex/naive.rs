//! Reference matcher backed by the `regex` crate, used by the `--naive`
//! flag and by the equivalence tests to cross-check both engine matchers
//! against an independent implementation.

use super::super::lib_regex;
use super::super::lib_regex::Regex;

use super::super::automaton::{Label, MetaKind};
use super::ast::Node;

pub struct NaiveMatcher {
    full: Regex,
    partial: Regex,
}

impl NaiveMatcher {
    pub fn new(ast: &Node) -> NaiveMatcher {
        let body = to_lib_regex(ast);

        NaiveMatcher {
            full: Regex::new(&format!(r"\A(?s:{})\z", body)).expect("Invalid regexp syntax"),
            partial: Regex::new(&format!(r"(?s:{})", body)).expect("Invalid regexp syntax"),
        }
    }

    pub fn is_match(&self, input: &str) -> bool {
        self.full.is_match(input)
    }

    pub fn is_match_partial(&self, input: &str) -> bool {
        self.partial.is_match(input)
    }
}

/// Translate an AST into `regex`-crate syntax. The meta-characters expand
/// to the engine's exact whitespace set, so the oracle and the two engine
/// matchers share one definition of `\s`.
fn to_lib_regex(node: &Node) -> String {
    match node {
        Node::Literal(c) => lib_regex::escape(&c.to_string()),
        Node::Meta(kind) => meta_class(*kind).to_string(),
        Node::Sequence(children) => children.iter().map(to_lib_regex).collect(),
        Node::Star(child) => format!("(?:{})*", to_lib_regex(child)),
        Node::CharList(chars) => {
            let alternatives: Vec<String> = chars.iter().map(label_regex).collect();
            format!("(?:{})", alternatives.join("|"))
        }
    }
}

fn label_regex(label: &Label) -> String {
    match label {
        Label::Literal(c) => lib_regex::escape(&c.to_string()),
        Label::Meta(kind) => meta_class(*kind).to_string(),
    }
}

fn meta_class(kind: MetaKind) -> &'static str {
    match kind {
        MetaKind::AnyChar => ".",
        MetaKind::Whitespace => "[ \\t\\n\\r\\x0B\\x0C]",
        MetaKind::NonWhitespace => "[^ \\t\\n\\r\\x0B\\x0C]",
    }
}
