//! Expression AST nodes for Jack.
//!
//! Source-level expressions are a flat `term (op term)*` chain. Here the
//! chain is an explicit right-nested structure: an [`Expr`] is a leading
//! [`Term`] plus an optional operator and the expression for the remainder.
//! `a - b - c` is therefore `a - (b - c)` structurally, and code generation
//! follows that shape.

use std::fmt;

use bumpalo::Bump;
use jack_core::AstError;

use crate::ast::{BinaryOp, UnaryOp};

/// An expression: a term, optionally followed by an operator and the rest of
/// the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expr<'ast> {
    /// Leading term
    pub term: Term<'ast>,
    /// Operator and remaining chain, if any
    pub rest: Option<(BinaryOp, &'ast Expr<'ast>)>,
}

/// A term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Term<'ast> {
    /// Integer constant `0..=32767`
    IntConst(u16),
    /// String constant
    StringConst(&'ast str),
    /// `true`, `false`, `null`, `this`
    Keyword(KeywordConst),
    /// Variable reference
    Var(&'ast str),
    /// Parenthesized expression
    Paren(&'ast Expr<'ast>),
    /// Unary prefix operation
    Unary(UnaryOp, &'ast Term<'ast>),
}

/// Keyword constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordConst {
    True,
    False,
    Null,
    This,
}

impl KeywordConst {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeywordConst::True => "true",
            KeywordConst::False => "false",
            KeywordConst::Null => "null",
            KeywordConst::This => "this",
        }
    }
}

/// One element of a flattened expression chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExprElement<'ast> {
    Term(Term<'ast>),
    Op(BinaryOp),
}

impl<'ast> Expr<'ast> {
    /// An expression made of a single term.
    pub fn term(term: Term<'ast>) -> Self {
        Self { term, rest: None }
    }

    /// Build an expression from a flattened `term (op term)*` sequence.
    ///
    /// The sequence must be non-empty, of odd length, with terms at even
    /// positions and operators at odd ones.
    pub fn from_elements(arena: &'ast Bump, elements: &[ExprElement<'ast>]) -> Result<Self, AstError> {
        if elements.is_empty() {
            return Err(AstError::EmptyExpression);
        }
        if elements.len() % 2 == 0 {
            return Err(AstError::EvenLength {
                len: elements.len(),
            });
        }
        Self::chain(arena, elements, 0)
    }

    /// Build the chain starting at `elements[0]`, which sits at `position`
    /// in the original sequence. `elements` has odd length.
    fn chain(arena: &'ast Bump, elements: &[ExprElement<'ast>], position: usize) -> Result<Self, AstError> {
        let term = match elements[0] {
            ExprElement::Term(term) => term,
            ExprElement::Op(_) => return Err(AstError::ExpectedTerm { position }),
        };

        let rest = match elements.get(1) {
            None => None,
            Some(ExprElement::Op(op)) => {
                let tail = Self::chain(arena, &elements[2..], position + 2)?;
                Some((*op, &*arena.alloc(tail)))
            }
            Some(ExprElement::Term(_)) => {
                return Err(AstError::ExpectedOperator {
                    position: position + 1,
                });
            }
        };

        Ok(Self { term, rest })
    }

    /// The term, if this expression is nothing but one term.
    pub fn single_term(&self) -> Option<&Term<'ast>> {
        match self.rest {
            None => Some(&self.term),
            Some(_) => None,
        }
    }
}

impl fmt::Display for Expr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.term)?;
        if let Some((op, rest)) = self.rest {
            write!(f, " {op} {rest}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Term<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::IntConst(n) => write!(f, "{n}"),
            Term::StringConst(s) => write!(f, "\"{s}\""),
            Term::Keyword(k) => f.write_str(k.as_str()),
            Term::Var(name) => f.write_str(name),
            Term::Paren(inner) => write!(f, "({inner})"),
            Term::Unary(op, term) => write!(f, "{op}{term}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn var(name: &str) -> ExprElement<'_> {
        ExprElement::Term(Term::Var(name))
    }

    #[test]
    fn single_term() {
        let arena = Bump::new();
        let expr = Expr::from_elements(&arena, &[var("a")]).unwrap();
        assert_eq!(expr, Expr::term(Term::Var("a")));
        assert_eq!(expr.single_term(), Some(&Term::Var("a")));
    }

    #[test]
    fn chain_nests_to_the_right() {
        let arena = Bump::new();
        let expr = Expr::from_elements(
            &arena,
            &[
                var("a"),
                ExprElement::Op(BinaryOp::Sub),
                var("b"),
                ExprElement::Op(BinaryOp::Sub),
                var("c"),
            ],
        )
        .unwrap();

        assert_eq!(expr.term, Term::Var("a"));
        let (op, rest) = expr.rest.unwrap();
        assert_eq!(op, BinaryOp::Sub);
        assert_eq!(rest.term, Term::Var("b"));
        let (op, last) = rest.rest.unwrap();
        assert_eq!(op, BinaryOp::Sub);
        assert_eq!(*last, Expr::term(Term::Var("c")));
        assert_eq!(expr.single_term(), None);
    }

    #[test]
    fn malformed_sequences() {
        let arena = Bump::new();
        assert_eq!(
            Expr::from_elements(&arena, &[]),
            Err(AstError::EmptyExpression)
        );
        assert_eq!(
            Expr::from_elements(&arena, &[var("a"), ExprElement::Op(BinaryOp::Add)]),
            Err(AstError::EvenLength { len: 2 })
        );
        assert_eq!(
            Expr::from_elements(
                &arena,
                &[
                    var("a"),
                    ExprElement::Op(BinaryOp::Add),
                    ExprElement::Op(BinaryOp::Add)
                ]
            ),
            Err(AstError::ExpectedTerm { position: 2 })
        );
        assert_eq!(
            Expr::from_elements(
                &arena,
                &[var("a"), ExprElement::Op(BinaryOp::Add), var("b"), var("c"), var("d")]
            ),
            Err(AstError::ExpectedOperator { position: 3 })
        );
    }

    #[test]
    fn display() {
        let arena = Bump::new();
        let inner = arena.alloc(Expr::from_elements(
            &arena,
            &[var("x"), ExprElement::Op(BinaryOp::Mul), ExprElement::Term(Term::IntConst(2))],
        )
        .unwrap());
        let neg = arena.alloc(Term::Var("y"));
        let expr = Expr::from_elements(
            &arena,
            &[
                ExprElement::Term(Term::Paren(inner)),
                ExprElement::Op(BinaryOp::Less),
                ExprElement::Term(Term::Unary(UnaryOp::Neg, neg)),
                ExprElement::Op(BinaryOp::Equal),
                ExprElement::Term(Term::Keyword(KeywordConst::True)),
            ],
        )
        .unwrap();
        assert_eq!(expr.to_string(), "(x * 2) < -y = true");
        assert_eq!(Term::StringConst("hi").to_string(), "\"hi\"");
    }
}
