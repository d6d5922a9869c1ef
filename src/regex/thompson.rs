//! Thompson construction: compile an AST into an automaton, one fragment per
//! node, composed structurally.

use super::super::automaton::{Label, Nfa, State, StateId};
use super::ast::Node;

/// An automaton sub-graph under construction, with exactly one entry and one
/// exit state. The exit state carries no outgoing edges until the fragment
/// is spliced into a larger one; this is what makes concatenation, the class
/// union and the star wrapper compositional.
#[derive(Clone, Copy)]
struct Fragment {
    start: StateId,
    accept: StateId,
}

/// Arena of states grown while compiling. Fragments address states through
/// stable indices, so the splice below is an explicit rewire instead of
/// pointer aliasing.
struct NfaBuilder {
    states: Vec<State>,
}

impl NfaBuilder {
    fn new() -> NfaBuilder {
        NfaBuilder { states: Vec::new() }
    }

    fn fresh_state(&mut self) -> StateId {
        self.states.push(State::new());
        self.states.len() - 1
    }

    fn compile_node(&mut self, node: &Node) -> Fragment {
        match node {
            Node::Literal(c) => self.atom(Label::Literal(*c)),
            Node::Meta(kind) => self.atom(Label::Meta(*kind)),
            Node::Sequence(children) => self.sequence(children),
            Node::Star(child) => self.star(child),
            Node::CharList(chars) => self.char_list(chars),
        }
    }

    /// Fresh start, fresh accept, one labeled transition between them.
    fn atom(&mut self, label: Label) -> Fragment {
        let start = self.fresh_state();
        let accept = self.fresh_state();
        self.states[start].add_transition(label, accept);
        Fragment { start, accept }
    }

    /// Chain the children's fragments into one by splicing. An empty
    /// sequence compiles to a fragment accepting only the empty string.
    fn sequence(&mut self, children: &[Node]) -> Fragment {
        let mut iter = children.iter();

        let mut fragment = match iter.next() {
            Some(child) => self.compile_node(child),
            None => {
                let start = self.fresh_state();
                let accept = self.fresh_state();
                self.states[start].add_epsilon(accept);
                return Fragment { start, accept };
            }
        };

        for child in iter {
            let next = self.compile_node(child);
            fragment = self.splice(fragment, next);
        }

        fragment
    }

    /// Merge `next`'s start state into `acc`'s accept state: the accept
    /// adopts every outgoing edge of the start, and the combined fragment
    /// runs from `acc.start` to `next.accept`.
    ///
    /// A fragment's start state has in-degree zero within its own fragment
    /// (star and class gadgets only ever target their inner child states),
    /// so draining it cannot redirect an existing edge, and the vacated
    /// arena slot is unreachable afterwards; compaction drops it.
    fn splice(&mut self, acc: Fragment, next: Fragment) -> Fragment {
        let spliced = std::mem::replace(&mut self.states[next.start], State::new());
        self.states[acc.accept].absorb(spliced);

        Fragment {
            start: acc.start,
            accept: next.accept,
        }
    }

    /// The four-edge star gadget: enter the loop, skip it entirely, exit
    /// after one or more repetitions, or go around again.
    fn star(&mut self, child: &Node) -> Fragment {
        let start = self.fresh_state();
        let accept = self.fresh_state();
        let inner = self.compile_node(child);

        self.states[start].add_epsilon(inner.start);
        self.states[start].add_epsilon(accept);
        self.states[inner.accept].add_epsilon(accept);
        self.states[inner.accept].add_epsilon(inner.start);

        Fragment { start, accept }
    }

    /// Alternation restricted to single-character atoms: an epsilon fan-out
    /// to one atom fragment per alternative, fanned back into one accept.
    fn char_list(&mut self, chars: &[Label]) -> Fragment {
        let start = self.fresh_state();
        let accept = self.fresh_state();

        for &label in chars {
            let alternative = self.atom(label);
            self.states[start].add_epsilon(alternative.start);
            self.states[alternative.accept].add_epsilon(accept);
        }

        Fragment { start, accept }
    }

    fn into_nfa(self, fragment: Fragment) -> Nfa {
        Nfa::from_arena(self.states, fragment.start, fragment.accept)
    }
}

/// Compile an AST into an immutable automaton.
pub fn compile(ast: &Node) -> Nfa {
    let mut builder = NfaBuilder::new();
    let fragment = builder.compile_node(ast);
    builder.into_nfa(fragment)
}
