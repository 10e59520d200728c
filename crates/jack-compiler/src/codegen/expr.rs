//! Expression translation.
//!
//! An expression is a leading term plus an optional `(op, rest)` pair. The
//! term is emitted, then the whole remaining chain, then the operator, so
//! chains associate to the right: `a - b - c` computes `a - (b - c)`.

use jack_core::UnsupportedConstruct;
use jack_syntax::ast::{BinaryOp, Expr, Term};

use super::{ClassCompiler, MATH_DIVIDE, MATH_MULTIPLY, Result};
use crate::symbol_table::{StorageClass, SymbolTable};
use crate::writer::{Command, InstructionWriter, Segment};

impl<S: SymbolTable + ?Sized, W: InstructionWriter + ?Sized> ClassCompiler<'_, S, W> {
    pub(super) fn compile_expression(&mut self, expr: &Expr<'_>) -> Result<()> {
        self.compile_term(&expr.term)?;
        if let Some((op, rest)) = expr.rest {
            self.compile_expression(rest)?;
            self.compile_operator(op)?;
        }
        Ok(())
    }

    fn compile_term(&mut self, term: &Term<'_>) -> Result<()> {
        match term {
            Term::IntConst(value) => {
                self.writer.write_push(Segment::Constant, usize::from(*value));
                Ok(())
            }
            Term::Var(name) => {
                let symbol = self.resolve(name)?;
                match symbol.storage {
                    StorageClass::Static => self.unsupported(UnsupportedConstruct::StaticReference),
                    storage => {
                        self.writer.write_push(storage.segment(), symbol.index);
                        Ok(())
                    }
                }
            }
            Term::Paren(inner) => self.compile_expression(inner),
            Term::StringConst(_) => self.unsupported(UnsupportedConstruct::StringConstant),
            Term::Keyword(_) => self.unsupported(UnsupportedConstruct::KeywordConstant),
            Term::Unary(..) => self.unsupported(UnsupportedConstruct::UnaryTerm),
        }
    }

    fn compile_operator(&mut self, op: BinaryOp) -> Result<()> {
        match op {
            BinaryOp::Add => self.writer.write_arithmetic(Command::Add),
            BinaryOp::Sub => self.writer.write_arithmetic(Command::Sub),
            BinaryOp::Mul => self.writer.write_call(MATH_MULTIPLY, 2),
            BinaryOp::Div => self.writer.write_call(MATH_DIVIDE, 2),
            BinaryOp::And | BinaryOp::Or | BinaryOp::Less | BinaryOp::Greater | BinaryOp::Equal => {
                return self.unsupported(UnsupportedConstruct::Operator);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::tests::{call, push};
    use crate::config::CompilerConfig;
    use crate::symbol_table::Symbol;
    use crate::writer::{Instruction, RecordingWriter};
    use bumpalo::Bump;
    use jack_core::{CompilationError, QualifiedName};
    use jack_syntax::ast::{ExprElement, KeywordConst, SubroutineDecl, UnaryOp};
    use rustc_hash::FxHashMap;

    /// Fixed lookups, no subroutine bookkeeping.
    #[derive(Default)]
    struct FixedSymbols(FxHashMap<&'static str, Symbol>);

    impl FixedSymbols {
        fn with(mut self, name: &'static str, storage: StorageClass, index: usize) -> Self {
            self.0.insert(name, Symbol { storage, index });
            self
        }
    }

    impl SymbolTable for FixedSymbols {
        fn enter_subroutine(&mut self, _: &SubroutineDecl<'_>) -> std::result::Result<(), CompilationError> {
            Ok(())
        }

        fn lookup(&self, name: &str) -> Option<Symbol> {
            self.0.get(name).copied()
        }

        fn local_count(&self) -> usize {
            0
        }

        fn field_count(&self) -> usize {
            0
        }
    }

    fn locals_abc() -> FixedSymbols {
        FixedSymbols::default()
            .with("a", StorageClass::Local, 0)
            .with("b", StorageClass::Local, 1)
            .with("c", StorageClass::Local, 2)
    }

    fn emit(symbols: &mut FixedSymbols, expr: &Expr<'_>, config: CompilerConfig) -> (Result<()>, Vec<Instruction>) {
        let mut writer = RecordingWriter::new();
        let mut compiler = ClassCompiler::new(symbols, &mut writer, config);
        compiler.current = QualifiedName::new("Test", "expr");
        let result = compiler.compile_expression(expr);
        (result, writer.into_instructions())
    }

    fn chain<'a>(arena: &'a Bump, elements: &[ExprElement<'a>]) -> Expr<'a> {
        Expr::from_elements(arena, elements).unwrap()
    }

    #[test]
    fn subtraction_chain_associates_right() {
        let arena = Bump::new();
        let expr = chain(
            &arena,
            &[
                ExprElement::Term(Term::Var("a")),
                ExprElement::Op(BinaryOp::Sub),
                ExprElement::Term(Term::Var("b")),
                ExprElement::Op(BinaryOp::Sub),
                ExprElement::Term(Term::Var("c")),
            ],
        );

        let (result, code) = emit(&mut locals_abc(), &expr, CompilerConfig::default());
        result.unwrap();
        assert_eq!(
            code,
            vec![
                push(Segment::Local, 0),
                push(Segment::Local, 1),
                push(Segment::Local, 2),
                Instruction::Arithmetic(Command::Sub),
                Instruction::Arithmetic(Command::Sub),
            ]
        );
    }

    #[test]
    fn multiply_and_divide_call_math() {
        let arena = Bump::new();
        let expr = chain(
            &arena,
            &[
                ExprElement::Term(Term::IntConst(6)),
                ExprElement::Op(BinaryOp::Mul),
                ExprElement::Term(Term::IntConst(4)),
                ExprElement::Op(BinaryOp::Div),
                ExprElement::Term(Term::IntConst(2)),
            ],
        );

        let (result, code) = emit(&mut FixedSymbols::default(), &expr, CompilerConfig::default());
        result.unwrap();
        assert_eq!(
            code,
            vec![
                push(Segment::Constant, 6),
                push(Segment::Constant, 4),
                push(Segment::Constant, 2),
                call("Math.divide", 2),
                call("Math.multiply", 2),
            ]
        );
    }

    #[test]
    fn parentheses_group_left_operand() {
        let arena = Bump::new();
        let inner = arena.alloc(chain(
            &arena,
            &[
                ExprElement::Term(Term::Var("a")),
                ExprElement::Op(BinaryOp::Sub),
                ExprElement::Term(Term::Var("b")),
            ],
        ));
        let expr = chain(
            &arena,
            &[
                ExprElement::Term(Term::Paren(inner)),
                ExprElement::Op(BinaryOp::Sub),
                ExprElement::Term(Term::Var("c")),
            ],
        );

        let (result, code) = emit(&mut locals_abc(), &expr, CompilerConfig::default());
        result.unwrap();
        assert_eq!(
            code,
            vec![
                push(Segment::Local, 0),
                push(Segment::Local, 1),
                Instruction::Arithmetic(Command::Sub),
                push(Segment::Local, 2),
                Instruction::Arithmetic(Command::Sub),
            ]
        );
    }

    #[test]
    fn variables_push_from_their_segment() {
        let mut symbols = FixedSymbols::default()
            .with("f", StorageClass::Field, 3)
            .with("arg", StorageClass::Argument, 1);

        let (_, code) = emit(&mut symbols, &Expr::term(Term::Var("f")), CompilerConfig::default());
        assert_eq!(code, vec![push(Segment::This, 3)]);

        let (_, code) = emit(&mut symbols, &Expr::term(Term::Var("arg")), CompilerConfig::default());
        assert_eq!(code, vec![push(Segment::Argument, 1)]);
    }

    #[test]
    fn unresolved_identifier_aborts_without_emitting_it() {
        let arena = Bump::new();
        let expr = chain(
            &arena,
            &[
                ExprElement::Term(Term::Var("a")),
                ExprElement::Op(BinaryOp::Add),
                ExprElement::Term(Term::Var("ghost")),
            ],
        );

        let (result, code) = emit(&mut locals_abc(), &expr, CompilerConfig::default());
        assert_eq!(
            result,
            Err(CompilationError::UnresolvedSymbol {
                name: "ghost".into(),
                subroutine: QualifiedName::new("Test", "expr"),
            })
        );
        assert_eq!(code, vec![push(Segment::Local, 0)]);
    }

    #[test]
    fn unsupported_terms_emit_nothing_by_default() {
        let arena = Bump::new();
        let operand = arena.alloc(Term::Var("a"));
        let mut symbols = locals_abc().with("s", StorageClass::Static, 0);

        for term in [
            Term::StringConst("hi"),
            Term::Keyword(KeywordConst::True),
            Term::Keyword(KeywordConst::This),
            Term::Unary(UnaryOp::Neg, operand),
            Term::Var("s"),
        ] {
            let (result, code) = emit(&mut symbols, &Expr::term(term), CompilerConfig::default());
            result.unwrap();
            assert!(code.is_empty(), "{term} should emit nothing");
        }
    }

    #[test]
    fn comparison_operator_leaves_only_operands() {
        let arena = Bump::new();
        let expr = chain(
            &arena,
            &[
                ExprElement::Term(Term::Var("a")),
                ExprElement::Op(BinaryOp::Less),
                ExprElement::Term(Term::IntConst(10)),
            ],
        );

        let (result, code) = emit(&mut locals_abc(), &expr, CompilerConfig::default());
        result.unwrap();
        assert_eq!(code, vec![push(Segment::Local, 0), push(Segment::Constant, 10)]);

        let (result, _) = emit(&mut locals_abc(), &expr, CompilerConfig::strict());
        assert_eq!(
            result,
            Err(CompilationError::Unsupported {
                construct: UnsupportedConstruct::Operator,
                subroutine: QualifiedName::new("Test", "expr"),
            })
        );
    }

    #[test]
    fn strict_rejects_string_constants() {
        let (result, code) = emit(
            &mut FixedSymbols::default(),
            &Expr::term(Term::StringConst("hi")),
            CompilerConfig::strict(),
        );
        assert!(matches!(
            result,
            Err(CompilationError::Unsupported {
                construct: UnsupportedConstruct::StringConstant,
                ..
            })
        ));
        assert!(code.is_empty());
    }
}
