//! Recursive-descent parser for the pattern grammar:
//!
//! ```text
//! expr   := term*
//! term   := factor STAR?
//! factor := LITERAL | DOT | ESCAPE ('s' | 'S') | '[' factor+ ']'
//! ```
//!
//! `*` binds to the immediately preceding atom only; inside `[...]` only
//! character atoms are legal. A malformed pattern surfaces as a typed
//! [`ParseError`], never as a silent empty AST.

use std::error::Error;
use std::fmt;

use super::super::automaton::{Label, MetaKind};
use super::ast::Node;
use super::lexer::{Lexer, Token};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// The input ended inside a `[...]` class.
    UnterminatedCharacterClass,
    /// `\` followed by anything but `s` or `S`.
    UnknownEscape(char),
    /// A token in a position the grammar does not allow.
    UnexpectedToken {
        found: Token,
        expected: &'static str,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseError::UnterminatedCharacterClass => {
                write!(f, "unterminated character class")
            }
            ParseError::UnknownEscape(c) => write!(f, "unknown escape: \\{}", c),
            ParseError::UnexpectedToken { found, expected } => {
                write!(f, "unexpected token {:?}, expected {}", found, expected)
            }
        }
    }
}

impl Error for ParseError {}

pub struct Parser {
    lexer: Lexer,
    current: Token,
}

impl Parser {
    pub fn new(lexer: Lexer) -> Parser {
        let mut parser = Parser {
            lexer,
            current: Token::Eof,
        };
        parser.advance();
        parser
    }

    fn advance(&mut self) {
        self.current = self.lexer.next_token();
    }

    /// Parse the whole pattern into its AST.
    pub fn ast(&mut self) -> Result<Node, ParseError> {
        self.parse_expression()
    }

    fn parse_expression(&mut self) -> Result<Node, ParseError> {
        let mut children = Vec::new();

        while self.current != Token::Eof {
            children.push(self.parse_term()?);
        }

        Ok(Node::Sequence(children))
    }

    fn parse_term(&mut self) -> Result<Node, ParseError> {
        let factor = self.parse_factor()?;

        if self.current == Token::Star {
            self.advance();
            return Ok(Node::star(factor));
        }

        Ok(factor)
    }

    fn parse_factor(&mut self) -> Result<Node, ParseError> {
        match self.current {
            Token::Literal(c) => {
                self.advance();
                Ok(Node::Literal(c))
            }
            Token::Dot => {
                self.advance();
                Ok(Node::Meta(MetaKind::AnyChar))
            }
            Token::Escape => {
                self.advance();
                Ok(Node::Meta(self.parse_escape()?))
            }
            Token::LBracket => {
                self.advance();
                self.parse_class()
            }
            found => Err(ParseError::UnexpectedToken {
                found,
                expected: "a literal, '.', an escape or '['",
            }),
        }
    }

    /// The character following the `\` that introduced an escape.
    fn parse_escape(&mut self) -> Result<MetaKind, ParseError> {
        let kind = match self.current {
            Token::Literal('s') => MetaKind::Whitespace,
            Token::Literal('S') => MetaKind::NonWhitespace,
            Token::Literal(c) => return Err(ParseError::UnknownEscape(c)),
            Token::Dot => return Err(ParseError::UnknownEscape('.')),
            Token::Star => return Err(ParseError::UnknownEscape('*')),
            Token::LBracket => return Err(ParseError::UnknownEscape('[')),
            Token::RBracket => return Err(ParseError::UnknownEscape(']')),
            Token::Escape => return Err(ParseError::UnknownEscape('\\')),
            Token::Eof => {
                return Err(ParseError::UnexpectedToken {
                    found: Token::Eof,
                    expected: "an escape character",
                })
            }
        };

        self.advance();
        Ok(kind)
    }

    /// The body of a `[...]` class, the opening bracket already consumed.
    fn parse_class(&mut self) -> Result<Node, ParseError> {
        let mut chars = Vec::new();

        loop {
            match self.current {
                Token::RBracket => {
                    if chars.is_empty() {
                        return Err(ParseError::UnexpectedToken {
                            found: Token::RBracket,
                            expected: "at least one class atom",
                        });
                    }
                    self.advance();
                    return Ok(Node::CharList(chars));
                }
                Token::Eof => return Err(ParseError::UnterminatedCharacterClass),
                _ => chars.push(self.parse_class_atom()?),
            }
        }
    }

    fn parse_class_atom(&mut self) -> Result<Label, ParseError> {
        match self.current {
            Token::Literal(c) => {
                self.advance();
                Ok(Label::Literal(c))
            }
            Token::Dot => {
                self.advance();
                Ok(Label::Meta(MetaKind::AnyChar))
            }
            Token::Escape => {
                self.advance();
                Ok(Label::Meta(self.parse_escape()?))
            }
            found => Err(ParseError::UnexpectedToken {
                found,
                expected: "a class atom",
            }),
        }
    }
}

/// Parse a pattern string into its AST.
pub fn parse(pattern: &str) -> Result<Node, ParseError> {
    Parser::new(Lexer::new(pattern)).ast()
}
