//! AST-level matcher: recursive descent over the pattern tree with greedy
//! star repetition and backoff at star boundaries, no automaton involved.
//!
//! Patterns hand-built with nested unbounded stars over ambiguous
//! alternatives can take exponential time here (there is no memoization).
//! That is a documented complexity hazard of the strategy, not a bug.

use super::ast::Node;

/// Anchored match: the AST must consume the entire input.
pub fn is_match(ast: &Node, input: &str) -> bool {
    let chars: Vec<char> = input.chars().collect();

    match match_node(ast, &chars, 0) {
        Some(end) => end == chars.len(),
        None => false,
    }
}

/// Substring match: anchored descent attempted from every character offset,
/// succeeding on any accepting end position; full consumption is not
/// required. Kept semantically identical to the simulation matcher's
/// partial match.
pub fn is_match_partial(ast: &Node, input: &str) -> bool {
    let chars: Vec<char> = input.chars().collect();

    (0..=chars.len()).any(|offset| match_node(ast, &chars, offset).is_some())
}

/// Match `node` at `pos`, returning the position after the match. Positions
/// index code points, so multi-byte characters are single matcher steps.
fn match_node(node: &Node, input: &[char], pos: usize) -> Option<usize> {
    match node {
        Node::Literal(c) => match input.get(pos) {
            Some(found) if found == c => Some(pos + 1),
            _ => None,
        },

        Node::Meta(kind) => match input.get(pos) {
            Some(&found) if kind.is_match(found) => Some(pos + 1),
            _ => None,
        },

        // Ordered choice; every alternative consumes exactly one character.
        Node::CharList(chars) => match input.get(pos) {
            Some(&found) if chars.iter().any(|label| label.is_match(found)) => Some(pos + 1),
            _ => None,
        },

        Node::Sequence(children) => match_sequence(children, input, pos),

        // A star outside a sequence matches the maximal greedy run and
        // returns that endpoint only; only sequences perform backoff.
        Node::Star(child) => star_positions(child, input, pos).pop(),
    }
}

/// Children left to right. A star child first records every intermediate
/// position of its greedy run (0, 1, 2, … repetitions), then the rest of
/// the sequence is retried from the longest recorded position backward
/// until it matches or the positions are exhausted.
fn match_sequence(children: &[Node], input: &[char], pos: usize) -> Option<usize> {
    let (head, rest) = match children.split_first() {
        None => return Some(pos),
        Some(split) => split,
    };

    if let Node::Star(child) = head {
        for &backoff in star_positions(child, input, pos).iter().rev() {
            if let Some(end) = match_sequence(rest, input, backoff) {
                return Some(end);
            }
        }
        return None;
    }

    let next = match_node(head, input, pos)?;
    match_sequence(rest, input, next)
}

/// Every position reachable by repeating `node` greedily from `pos`,
/// starting with zero repetitions. A repetition that does not advance ends
/// the run, so zero-width children cannot loop forever.
fn star_positions(node: &Node, input: &[char], pos: usize) -> Vec<usize> {
    let mut positions = vec![pos];
    let mut current = pos;

    while let Some(next) = match_node(node, input, current) {
        if next == current {
            break;
        }
        positions.push(next);
        current = next;
    }

    positions
}
