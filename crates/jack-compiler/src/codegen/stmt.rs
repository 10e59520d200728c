//! Statement translation.

use jack_core::{QualifiedName, UnsupportedConstruct};
use jack_syntax::ast::{DoStmt, KeywordConst, LetStmt, ReturnStmt, Stmt, Term};

use super::{ClassCompiler, Result};
use crate::symbol_table::{StorageClass, SymbolTable};
use crate::writer::{InstructionWriter, Segment};

impl<S: SymbolTable + ?Sized, W: InstructionWriter + ?Sized> ClassCompiler<'_, S, W> {
    pub(super) fn compile_statement(&mut self, stmt: &Stmt<'_>) -> Result<()> {
        match stmt {
            Stmt::Do(do_stmt) => self.compile_do(do_stmt),
            Stmt::Let(let_stmt) => self.compile_let(let_stmt),
            Stmt::Return(ret) => self.compile_return(ret),
        }
    }

    /// `do f(a, b)`: arguments left to right, the call, then discard the
    /// result. Every callee is assumed to leave a value, void ones included.
    ///
    /// The callee is always named after the enclosing class; a receiver
    /// before the dot is not consulted.
    fn compile_do(&mut self, stmt: &DoStmt<'_>) -> Result<()> {
        let call = &stmt.call;
        for arg in call.args {
            self.compile_expression(arg)?;
        }

        let callee = QualifiedName::new(self.current.class.as_str(), call.name);
        self.writer.write_call(&callee.to_string(), call.args.len());
        self.writer.write_pop(Segment::Temp, 0);
        Ok(())
    }

    /// `let x = e`: the value, then a store into the target's storage.
    ///
    /// Indexed and static targets get the value computed but no store.
    fn compile_let(&mut self, stmt: &LetStmt<'_>) -> Result<()> {
        let symbol = self.resolve(stmt.target)?;

        let store = match (stmt.index, symbol.storage) {
            (Some(_), _) => Err(UnsupportedConstruct::IndexedAssignment),
            (None, StorageClass::Static) => Err(UnsupportedConstruct::StaticAssignment),
            (None, storage) => Ok(storage.segment()),
        };

        match store {
            Ok(segment) => {
                self.compile_expression(&stmt.value)?;
                self.writer.write_pop(segment, symbol.index);
            }
            Err(construct) => {
                self.unsupported(construct)?;
                self.compile_expression(&stmt.value)?;
            }
        }
        Ok(())
    }

    /// `return;` pushes 0 so every call leaves exactly one value.
    /// `return this;` pushes the receiver. Other values are not evaluated.
    fn compile_return(&mut self, stmt: &ReturnStmt<'_>) -> Result<()> {
        match &stmt.value {
            None => self.writer.write_push(Segment::Constant, 0),
            Some(expr) => match expr.single_term() {
                Some(Term::Keyword(KeywordConst::This)) => self.writer.write_push(Segment::Pointer, 0),
                _ => self.unsupported(UnsupportedConstruct::ReturnExpression)?,
            },
        }
        self.writer.write_return();
        Ok(())
    }
}
