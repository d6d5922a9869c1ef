use super::super::regex::ast::Node;
use super::super::regex::thompson;
use super::{Label, MetaKind, StateId};

#[test]
fn literal_nfa_structure() {
    let nfa = thompson::compile(&Node::lit('p'));

    assert_eq!(nfa.nb_states(), 2);

    let start = nfa.get_state(nfa.get_start());
    assert_eq!(start.transitions(), &[(Label::Literal('p'), nfa.get_accept())]);
    assert!(start.epsilon().is_empty());

    let accept = nfa.get_state(nfa.get_accept());
    assert!(accept.transitions().is_empty());
    assert!(accept.epsilon().is_empty());
}

#[test]
fn sequence_splices_into_a_chain() {
    let ast = Node::seq(vec![Node::lit('p'), Node::lit('a')]);
    let nfa = thompson::compile(&ast);

    assert_eq!(nfa.nb_states(), 3);

    let start = nfa.get_state(nfa.get_start());
    assert_eq!(start.transitions().len(), 1);
    assert!(start.epsilon().is_empty());
    let (label, intermediate) = start.transitions()[0];
    assert_eq!(label, Label::Literal('p'));

    let intermediate = nfa.get_state(intermediate);
    assert_eq!(intermediate.transitions(), &[(Label::Literal('a'), nfa.get_accept())]);
    assert!(intermediate.epsilon().is_empty());

    let accept = nfa.get_state(nfa.get_accept());
    assert!(accept.transitions().is_empty());
    assert!(accept.epsilon().is_empty());
}

#[test]
fn star_builds_the_four_edge_gadget() {
    let nfa = thompson::compile(&Node::star(Node::lit('a')));

    assert_eq!(nfa.nb_states(), 4);

    // The start state skips the loop or enters the child's fragment.
    let start = nfa.get_state(nfa.get_start());
    assert!(start.transitions().is_empty());
    assert_eq!(start.epsilon().len(), 2);
    let child_start = start.epsilon()[0];
    assert_eq!(start.epsilon()[1], nfa.get_accept());

    // The child consumes one 'a'.
    let child = nfa.get_state(child_start);
    assert_eq!(child.transitions().len(), 1);
    let (label, child_accept) = child.transitions()[0];
    assert_eq!(label, Label::Literal('a'));

    // The child's accept exits the loop or repeats it.
    let child_accept = nfa.get_state(child_accept);
    assert_eq!(child_accept.epsilon(), &[nfa.get_accept(), child_start]);

    let accept = nfa.get_state(nfa.get_accept());
    assert!(accept.transitions().is_empty());
    assert!(accept.epsilon().is_empty());
}

#[test]
fn char_list_fans_out_one_atom_per_alternative() {
    let ast = Node::list(vec![Label::Literal('a'), Label::Meta(MetaKind::Whitespace)]);
    let nfa = thompson::compile(&ast);

    assert_eq!(nfa.nb_states(), 6);

    let start = nfa.get_state(nfa.get_start());
    assert!(start.transitions().is_empty());
    assert_eq!(start.epsilon().len(), 2);

    let mut labels = Vec::new();
    for &alternative in start.epsilon() {
        let alternative = nfa.get_state(alternative);
        assert_eq!(alternative.transitions().len(), 1);
        let (label, exit) = alternative.transitions()[0];
        labels.push(label);
        assert_eq!(nfa.get_state(exit).epsilon(), &[nfa.get_accept()]);
    }
    assert_eq!(
        labels,
        vec![Label::Literal('a'), Label::Meta(MetaKind::Whitespace)]
    );
}

#[test]
fn empty_sequence_accepts_only_the_empty_string() {
    let nfa = thompson::compile(&Node::seq(Vec::new()));

    assert_eq!(nfa.nb_states(), 2);
    assert!(nfa.is_match(""));
    assert!(!nfa.is_match("a"));
    assert!(nfa.is_match_partial("xyz"));
}

#[test]
fn splice_preserves_the_epsilon_edges_of_the_next_fragment() {
    // "ab*": the star gadget's start is merged into the 'a' fragment's
    // accept, epsilon edges included, so "a" alone must already accept.
    let ast = Node::seq(vec![Node::lit('a'), Node::star(Node::lit('b'))]);
    let nfa = thompson::compile(&ast);

    assert!(nfa.is_match("a"));
    assert!(nfa.is_match("abbb"));
    assert!(!nfa.is_match("b"));

    // And the mirrored case: "a*b" must accept plain "b".
    let ast = Node::seq(vec![Node::star(Node::lit('a')), Node::lit('b')]);
    let nfa = thompson::compile(&ast);

    assert!(nfa.is_match("b"));
    assert!(nfa.is_match("aaab"));
    assert!(!nfa.is_match("a"));
}

#[test]
fn compaction_keeps_only_reachable_states() {
    // Each splice vacates the merged start slot; after compaction the
    // state count reflects the automaton, not the construction history.
    let ast = Node::seq(vec![Node::lit('a'), Node::lit('b'), Node::lit('c')]);
    let nfa = thompson::compile(&ast);

    assert_eq!(nfa.nb_states(), 4);
    for id in 0..nfa.nb_states() {
        assert!(id == nfa.get_start() || is_target(&nfa, id));
    }
}

fn is_target(nfa: &super::Nfa, id: StateId) -> bool {
    (0..nfa.nb_states()).any(|other| {
        let state = nfa.get_state(other);
        state.transitions().iter().any(|&(_, target)| target == id)
            || state.epsilon().contains(&id)
    })
}

#[test]
fn encode_of_a_single_literal() {
    let nfa = thompson::compile(&Node::lit('a'));
    assert_eq!(nfa.encode(), "(s-[a]->)");
}

#[test]
fn encode_marks_cycles_with_a_back_reference() {
    let nfa = thompson::compile(&Node::star(Node::lit('a')));
    let encoded = nfa.encode();

    assert!(encoded.contains("<back>"));
    assert!(encoded.contains("(s-[a]->"));
}

#[test]
fn digraph_lists_every_state_and_edge() {
    let nfa = thompson::compile(&Node::star(Node::lit('a')));
    let dot = nfa.to_digraph();

    assert!(dot.starts_with("digraph nfa {"));
    assert!(dot.contains("rankdir=LR;"));
    assert!(dot.contains(&format!("q{} [shape=doublecircle];", nfa.get_accept())));
    assert!(dot.contains("[label=\"a\"]"));
    assert!(dot.contains("[label=\"ε\"]"));
    assert!(dot.ends_with("}\n"));
}

#[test]
fn digraph_escapes_meta_labels() {
    let nfa = thompson::compile(&Node::meta(MetaKind::Whitespace));
    assert!(nfa.to_digraph().contains("[label=\"\\\\s\"]"));
}

#[test]
fn match_follows_a_literal_sequence() {
    let ast = Node::seq(vec![Node::lit('a'), Node::lit('b')]);
    let nfa = thompson::compile(&ast);

    let cases = [
        ("ab", true),
        ("a", false),
        ("b", false),
        ("", false),
        ("abc", false),
        ("xab", false),
        ("abx", false),
    ];

    for &(input, expected) in &cases {
        assert_eq!(nfa.is_match(input), expected, "Match({:?})", input);
    }
}

#[test]
fn whitespace_label_matches_the_fixed_set_only() {
    let nfa = thompson::compile(&Node::meta(MetaKind::Whitespace));

    for c in &[' ', '\t', '\n', '\r', '\u{B}', '\u{C}'] {
        assert!(nfa.is_match(&c.to_string()), "\\s should match {:?}", c);
    }
    for c in &['a', '0', '_', '\u{A0}'] {
        assert!(!nfa.is_match(&c.to_string()), "\\s should not match {:?}", c);
    }
}
