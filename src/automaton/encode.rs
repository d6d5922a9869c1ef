//! Canonical encoding and Graphviz export of an automaton's topology.

use std::fs::File;
use std::io;
use std::io::prelude::*;

use bit_vec::BitVec;

use super::{Nfa, StateId};

impl Nfa {
    /// Deterministic serialization of the automaton's shape.
    ///
    /// The encoding never mentions state identities: at each state, labeled
    /// transitions are emitted ordered by condition string then by child
    /// encoding, epsilon edges after them ordered by child encoding, and a
    /// state revisited during the traversal encodes as `<back>`. Two
    /// automata compiled independently from structurally identical ASTs
    /// therefore encode identically, which is how tests assert structural
    /// equivalence.
    pub fn encode(&self) -> String {
        let mut seen = BitVec::from_elem(self.nb_states(), false);
        self.encode_state(self.get_start(), &mut seen)
    }

    fn encode_state(&self, id: StateId, seen: &mut BitVec) -> String {
        if seen[id] {
            return "<back>".to_string();
        }
        seen.set(id, true);

        let state = self.get_state(id);

        let mut labeled: Vec<(String, String)> = state
            .transitions()
            .iter()
            .map(|&(label, target)| (label.condition(), self.encode_state(target, seen)))
            .collect();
        labeled.sort();

        let mut parts: Vec<String> = labeled
            .into_iter()
            .map(|(condition, child)| format!("(s-[{}]->{})", condition, child))
            .collect();

        let mut epsilon: Vec<String> = state
            .epsilon()
            .iter()
            .map(|&target| self.encode_state(target, seen))
            .collect();
        epsilon.sort();

        parts.extend(
            epsilon
                .into_iter()
                .map(|child| format!("(s-[ε]->{})", child)),
        );

        parts.concat()
    }

    /// Graphviz `dot` description of the automaton. Purely diagnostic; state
    /// names are the synthetic `q{i}` assigned at compaction.
    pub fn to_digraph(&self) -> String {
        let mut out = String::new();
        out.push_str("digraph nfa {\n");
        out.push_str("    rankdir=LR;\n");
        out.push_str("    __start [shape=point];\n");

        for id in 0..self.nb_states() {
            let shape = if id == self.get_accept() {
                "doublecircle"
            } else {
                "circle"
            };
            out.push_str(&format!("    q{} [shape={}];\n", id, shape));
        }

        out.push_str(&format!("    __start -> q{};\n", self.get_start()));

        for id in 0..self.nb_states() {
            let state = self.get_state(id);
            for &(label, target) in state.transitions() {
                out.push_str(&format!(
                    "    q{} -> q{} [label=\"{}\"];\n",
                    id,
                    target,
                    dot_escape(&label.condition())
                ));
            }
            for &target in state.epsilon() {
                out.push_str(&format!("    q{} -> q{} [label=\"ε\"];\n", id, target));
            }
        }

        out.push_str("}\n");
        out
    }

    /// Write the digraph to a dotfile.
    pub fn render(&self, filename: &str) -> io::Result<()> {
        let mut file = File::create(filename)?;
        file.write_all(self.to_digraph().as_bytes())
    }
}

fn dot_escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}
