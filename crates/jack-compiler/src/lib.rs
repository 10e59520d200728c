//! Jack Compiler
//!
//! Single-pass code generation from a Jack class tree to stack-VM
//! instructions.
//!
//! ## Modules
//!
//! - [`codegen`]: the [`ClassCompiler`] and its statement/expression translation
//! - [`config`]: [`CompilerConfig`] and the policy for untranslated constructs
//! - [`symbol_table`]: the [`SymbolTable`] capability and [`ClassSymbols`]
//! - [`writer`]: the [`Instruction`] model and [`InstructionWriter`] sinks
//!
//! # Example
//!
//! ```
//! use jack_compiler::{compile_class, ClassSymbols, CompilerConfig, VmTextWriter};
//! use jack_syntax::ast::{ClassDecl, ReturnStmt, ReturnType, Stmt, SubroutineDecl, SubroutineKind};
//!
//! let body = [Stmt::Return(ReturnStmt { value: None })];
//! let subroutines = [SubroutineDecl {
//!     kind: SubroutineKind::Function,
//!     return_type: ReturnType::Void,
//!     name: "main",
//!     params: &[],
//!     locals: &[],
//!     body: &body,
//! }];
//! let class = ClassDecl { name: "Main", vars: &[], subroutines: &subroutines };
//!
//! let mut symbols = ClassSymbols::new(&class).unwrap();
//! let mut writer = VmTextWriter::new();
//! compile_class(&class, &mut symbols, &mut writer, CompilerConfig::default()).unwrap();
//! assert_eq!(writer.finish(), "function Main.main 0\npush constant 0\nreturn\n");
//! ```

pub mod codegen;
pub mod config;
pub mod symbol_table;
pub mod writer;

pub use codegen::ClassCompiler;
pub use config::{CompilerConfig, UnsupportedPolicy};
pub use symbol_table::{ClassSymbols, StorageClass, Symbol, SymbolTable};
pub use writer::{Command, Instruction, InstructionWriter, RecordingWriter, Segment, VmTextWriter};

// Re-export CompilationError from core for convenience
pub use jack_core::CompilationError;

use jack_syntax::ast::ClassDecl;

/// Compile `class` into `writer`, resolving names through `symbols`.
pub fn compile_class<S, W>(
    class: &ClassDecl<'_>,
    symbols: &mut S,
    writer: &mut W,
    config: CompilerConfig,
) -> Result<(), CompilationError>
where
    S: SymbolTable + ?Sized,
    W: InstructionWriter + ?Sized,
{
    ClassCompiler::new(symbols, writer, config).compile_class(class)
}
