pub mod ast;
pub mod backtrack;
pub mod lexer;
pub mod naive;
pub mod parse;
pub mod thompson;

use super::automaton::Nfa;

pub use self::ast::Node;
pub use self::parse::{parse, ParseError};

/// Parse a pattern and compile it into an automaton. Parse errors stop
/// compilation before any state is built.
pub fn compile(pattern: &str) -> Result<Nfa, ParseError> {
    let ast = parse::parse(pattern)?;
    Ok(thompson::compile(&ast))
}

#[cfg(test)]
pub fn is_match(pattern: &str, text: &str) -> bool {
    let nfa = compile(&pattern).unwrap();
    nfa.is_match(text)
}

#[cfg(test)]
mod tests;
