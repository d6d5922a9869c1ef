//! Subset simulation of an automaton over an input string.

use bit_set::BitSet;

use super::{Nfa, StateId};

impl Nfa {
    /// Anchored match: the whole input, from its first character to its
    /// last, must be consumed.
    pub fn is_match(&self, input: &str) -> bool {
        let mut current = self.start_set();

        for c in input.chars() {
            let next = self.step(&current, c);
            if next.is_empty() {
                // No active state left, the remaining input cannot lead to
                // acceptance.
                return false;
            }
            current = next;
        }

        current.contains(self.get_accept())
    }

    /// Substring match: the pattern must match some contiguous substring of
    /// the input. The anchored simulation is re-run from every character
    /// boundary and succeeds as soon as the accept state becomes active,
    /// whatever input remains.
    pub fn is_match_partial(&self, input: &str) -> bool {
        let offsets = input
            .char_indices()
            .map(|(offset, _)| offset)
            .chain(std::iter::once(input.len()));

        for offset in offsets {
            if self.search_at(&input[offset..]) {
                return true;
            }
        }

        false
    }

    /// Anchored-at-start simulation accepting at any end position.
    fn search_at(&self, input: &str) -> bool {
        let mut current = self.start_set();
        if current.contains(self.get_accept()) {
            return true;
        }

        for c in input.chars() {
            let next = self.step(&current, c);
            if next.contains(self.get_accept()) {
                return true;
            }
            if next.is_empty() {
                return false;
            }
            current = next;
        }

        false
    }

    /// The initial active set: the epsilon-closure of the start state.
    fn start_set(&self) -> BitSet {
        let mut set = BitSet::with_capacity(self.nb_states());
        set.insert(self.get_start());
        self.epsilon_closure(&mut set);
        set
    }

    /// One simulation step: follow every transition whose predicate accepts
    /// `c` from every active state, then close the result under epsilon
    /// edges.
    fn step(&self, current: &BitSet, c: char) -> BitSet {
        let mut next = BitSet::with_capacity(self.nb_states());

        for state in current.iter() {
            for &(label, target) in self.get_state(state).transitions() {
                if label.is_match(c) {
                    next.insert(target);
                }
            }
        }

        self.epsilon_closure(&mut next);
        next
    }

    /// Extend `set` to its epsilon-closure in place. Membership in `set`
    /// doubles as the visited marking, which keeps the traversal finite on
    /// the epsilon cycles of star gadgets.
    fn epsilon_closure(&self, set: &mut BitSet) {
        let mut stack: Vec<StateId> = set.iter().collect();

        while let Some(id) = stack.pop() {
            for &target in self.get_state(id).epsilon() {
                if set.insert(target) {
                    stack.push(target);
                }
            }
        }
    }
}
