mod encode;
mod simulate;

use std::fmt;

/// Stable handle of a state inside an automaton's arena.
///
/// Transitions and epsilon edges store handles instead of references, so the
/// epsilon back-edges introduced by star constructs need no special-cased
/// ownership handling.
pub type StateId = usize;

//  _          _          _
// | |    __ _| |__   ___| |___
// | |   / _` | '_ \ / _ \ / __|
// | |__| (_| | |_) |  __/ \__ \
// |_____\__,_|_.__/ \___|_|___/
//

/// Meta-character kinds understood by the engine.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MetaKind {
    /// `.`, matching any character, newline included.
    AnyChar,
    /// `\s`
    Whitespace,
    /// `\S`
    NonWhitespace,
}

/// The one whitespace set used everywhere: the simulation matcher, the
/// backtracking matcher and the `regex`-crate oracle all go through this
/// predicate, so they cannot disagree on a boundary character.
pub fn is_pattern_whitespace(c: char) -> bool {
    match c {
        ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C' => true,
        _ => false,
    }
}

impl MetaKind {
    pub fn is_match(self, c: char) -> bool {
        match self {
            MetaKind::AnyChar => true,
            MetaKind::Whitespace => is_pattern_whitespace(c),
            MetaKind::NonWhitespace => !is_pattern_whitespace(c),
        }
    }
}

/// Label of a transition: the closed set of predicates a transition can
/// carry. Dispatch is a plain `match`, resolved at compile time; there is no
/// runtime-built kind-to-predicate table, so distinct automata can be
/// compiled and matched concurrently without synchronization.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Label {
    Literal(char),
    Meta(MetaKind),
}

impl Label {
    pub fn is_match(&self, c: char) -> bool {
        match *self {
            Label::Literal(expected) => c == expected,
            Label::Meta(kind) => kind.is_match(c),
        }
    }

    /// The condition string of the label, as written in a pattern. Used as
    /// the sort key of the canonical encoding and as the edge label of the
    /// digraph export.
    pub fn condition(&self) -> String {
        match *self {
            Label::Literal(c) => c.to_string(),
            Label::Meta(MetaKind::AnyChar) => ".".to_string(),
            Label::Meta(MetaKind::Whitespace) => "\\s".to_string(),
            Label::Meta(MetaKind::NonWhitespace) => "\\S".to_string(),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.condition())
    }
}

//  ____  _        _
// / ___|| |_ __ _| |_ ___  ___
// \___ \| __/ _` | __/ _ \/ __|
//  ___) | || (_| | ||  __/\__ \
// |____/ \__\__,_|\__\___||___/
//

/// A state owns an ordered list of labeled transitions and an ordered list
/// of epsilon edges. Both store target handles into the owning arena.
#[derive(Clone, Debug, Default)]
pub struct State {
    transitions: Vec<(Label, StateId)>,
    epsilon: Vec<StateId>,
}

impl State {
    pub fn new() -> State {
        State {
            transitions: Vec::new(),
            epsilon: Vec::new(),
        }
    }

    pub fn add_transition(&mut self, label: Label, target: StateId) {
        self.transitions.push((label, target));
    }

    pub fn add_epsilon(&mut self, target: StateId) {
        self.epsilon.push(target);
    }

    /// Adopt every outgoing edge of `other`, preserving order. This is the
    /// splice primitive of the Thompson construction: the accept state of an
    /// accumulated fragment absorbs the start state of the next one.
    pub fn absorb(&mut self, other: State) {
        self.transitions.extend(other.transitions);
        self.epsilon.extend(other.epsilon);
    }

    pub fn transitions(&self) -> &[(Label, StateId)] {
        &self.transitions
    }

    pub fn epsilon(&self) -> &[StateId] {
        &self.epsilon
    }
}

//  _   _  __
// | \ | |/ _| __ _
// |  \| | |_ / _` |
// | |\  |  _| (_| |
// |_| \_|_|  \__,_|
//

/// An immutable automaton: the set of states reachable from `start`, with
/// exactly one accept state. Built once by the compiler, then only read.
#[derive(Clone, Debug)]
pub struct Nfa {
    states: Vec<State>,
    start: StateId,
    accept: StateId,
}

impl Nfa {
    /// Seal a construction arena into an automaton rooted at `start`.
    ///
    /// States are renumbered in depth-first discovery order from `start`, so
    /// slots vacated by fragment splices are dropped and the numbering only
    /// depends on the automaton's structure, never on arena history.
    pub fn from_arena(arena: Vec<State>, start: StateId, accept: StateId) -> Nfa {
        let mut remap = vec![std::usize::MAX; arena.len()];
        let mut order = Vec::new();
        let mut stack = vec![start];

        while let Some(id) = stack.pop() {
            if remap[id] != std::usize::MAX {
                continue;
            }
            remap[id] = order.len();
            order.push(id);

            for &(_, target) in arena[id].transitions() {
                stack.push(target);
            }
            for &target in arena[id].epsilon() {
                stack.push(target);
            }
        }

        debug_assert!(remap[accept] != std::usize::MAX, "accept state unreachable");

        let states = order
            .iter()
            .map(|&old| {
                let state = &arena[old];
                State {
                    transitions: state
                        .transitions
                        .iter()
                        .map(|&(label, target)| (label, remap[target]))
                        .collect(),
                    epsilon: state.epsilon.iter().map(|&target| remap[target]).collect(),
                }
            })
            .collect();

        Nfa {
            states,
            start: remap[start],
            accept: remap[accept],
        }
    }

    pub fn nb_states(&self) -> usize {
        self.states.len()
    }

    pub fn get_start(&self) -> StateId {
        self.start
    }

    pub fn get_accept(&self) -> StateId {
        self.accept
    }

    pub fn get_state(&self, id: StateId) -> &State {
        &self.states[id]
    }
}

#[cfg(test)]
mod tests;
