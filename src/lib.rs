//! Jack front-end: a lexer and a stack-VM code generator for the Jack
//! language.
//!
//! The two halves are independent:
//! - [`tokenize`] turns source text into [`Token`]s
//! - [`compile_class`] walks an [`ast::ClassDecl`] and emits VM
//!   [`Instruction`]s through an [`InstructionWriter`]
//!
//! Building the class tree from tokens is the job of an external parser.
//!
//! # Example
//!
//! ```
//! use jack::ast::{ClassDecl, ClassVarDecl, ClassVarKind, Expr, KeywordConst, ReturnStmt,
//!     ReturnType, Stmt, SubroutineDecl, SubroutineKind, Term, TypeName};
//!
//! let vars = [ClassVarDecl { kind: ClassVarKind::Field, ty: TypeName::Int, names: &["x", "y"] }];
//! let body = [Stmt::Return(ReturnStmt { value: Some(Expr::term(Term::Keyword(KeywordConst::This))) })];
//! let subroutines = [SubroutineDecl {
//!     kind: SubroutineKind::Constructor,
//!     return_type: ReturnType::Type(TypeName::Class("Point")),
//!     name: "new",
//!     params: &[],
//!     locals: &[],
//!     body: &body,
//! }];
//! let class = ClassDecl { name: "Point", vars: &vars, subroutines: &subroutines };
//!
//! let vm = jack::compile_class_to_vm(&class).unwrap();
//! assert!(vm.starts_with("function Point.new 0\npush constant 2\ncall Memory.alloc 1\n"));
//! ```

pub use jack_core::{
    AstError, CompilationError, JackError, KeywordSet, QualifiedName, UnsupportedConstruct,
};
pub use jack_syntax::{Lexeme, Lexer, Token, ast, classify, strip_comments, tokenize, tokenize_with};
pub use jack_compiler::{
    ClassCompiler, ClassSymbols, Command, CompilerConfig, Instruction, InstructionWriter,
    RecordingWriter, Segment, StorageClass, Symbol, SymbolTable, UnsupportedPolicy, VmTextWriter,
    compile_class,
};

use ast::ClassDecl;

/// Compile `class` to VM text with the default configuration.
pub fn compile_class_to_vm(class: &ClassDecl<'_>) -> Result<String, JackError> {
    compile_class_to_vm_with(class, CompilerConfig::default())
}

/// Compile `class` to VM text, one instruction per line.
///
/// Symbols come from a [`ClassSymbols`] built from the class itself.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn compile_class_to_vm_with(class: &ClassDecl<'_>, config: CompilerConfig) -> Result<String, JackError> {
    let mut symbols = ClassSymbols::new(class)?;
    let mut writer = VmTextWriter::new();
    compile_class(class, &mut symbols, &mut writer, config)?;

    let vm = writer.finish();
    log::debug!(
        "{}: {} statics, {} VM instructions",
        class.name,
        symbols.static_count(),
        vm.lines().count()
    );
    Ok(vm)
}
