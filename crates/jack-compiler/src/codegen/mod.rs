//! Class compiler: walks a [`ClassDecl`] and emits VM instructions.
//!
//! Single pass, subroutines in declaration order. Each subroutine gets a
//! fresh symbol scope, a `function` entry, the constructor allocation
//! prologue when applicable, then its statements in source order.
//!
//! Statement and expression translation live in [`stmt`] and [`expr`].

mod expr;
mod stmt;

use jack_core::{CompilationError, QualifiedName, UnsupportedConstruct};
use jack_syntax::ast::{ClassDecl, SubroutineDecl, SubroutineKind};

use crate::config::{CompilerConfig, UnsupportedPolicy};
use crate::symbol_table::{Symbol, SymbolTable};
use crate::writer::{InstructionWriter, Segment};

type Result<T> = std::result::Result<T, CompilationError>;

/// OS routine that allocates an object of `n` words.
pub const MEMORY_ALLOC: &str = "Memory.alloc";
/// OS routine standing in for `*`.
pub const MATH_MULTIPLY: &str = "Math.multiply";
/// OS routine standing in for `/`.
pub const MATH_DIVIDE: &str = "Math.divide";

/// Compiles one class at a time into an [`InstructionWriter`].
///
/// The compiler holds its symbol table and writer by reference and only
/// through their traits, so tests can plug in a [`RecordingWriter`] and
/// alternate backends can be substituted freely.
///
/// [`RecordingWriter`]: crate::writer::RecordingWriter
pub struct ClassCompiler<'a, S: SymbolTable + ?Sized, W: InstructionWriter + ?Sized> {
    /// Symbol lookups for the class being compiled
    symbols: &'a mut S,
    /// Instruction output
    writer: &'a mut W,
    config: CompilerConfig,
    /// Subroutine being compiled, for call names and diagnostics
    current: QualifiedName,
}

impl<'a, S: SymbolTable + ?Sized, W: InstructionWriter + ?Sized> ClassCompiler<'a, S, W> {
    pub fn new(symbols: &'a mut S, writer: &'a mut W, config: CompilerConfig) -> Self {
        Self {
            symbols,
            writer,
            config,
            current: QualifiedName::new("", ""),
        }
    }

    /// Compile every subroutine of `class`, in declaration order.
    ///
    /// Stops at the first error; instructions already written stay written.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn compile_class(&mut self, class: &ClassDecl<'_>) -> Result<()> {
        self.current = QualifiedName::new(class.name, "");
        for subroutine in class.subroutines {
            self.compile_subroutine(subroutine)?;
        }
        Ok(())
    }

    fn compile_subroutine(&mut self, subroutine: &SubroutineDecl<'_>) -> Result<()> {
        self.current.subroutine = subroutine.name.to_string();
        log::trace!("compiling {}", self.current);

        self.symbols.enter_subroutine(subroutine)?;
        self.writer
            .write_function(&self.current.to_string(), self.symbols.local_count());

        if subroutine.kind == SubroutineKind::Constructor {
            let fields = self.symbols.field_count();
            if fields > 0 {
                self.writer.write_push(Segment::Constant, fields);
                self.writer.write_call(MEMORY_ALLOC, 1);
                self.writer.write_pop(Segment::Pointer, 0);
            }
        }

        for stmt in subroutine.body {
            self.compile_statement(stmt)?;
        }
        Ok(())
    }

    // =========================================
    // Shared helpers
    // =========================================

    /// Resolve `name` or fail with an unresolved-symbol error.
    fn resolve(&self, name: &str) -> Result<Symbol> {
        self.symbols
            .lookup(name)
            .ok_or_else(|| CompilationError::UnresolvedSymbol {
                name: name.to_string(),
                subroutine: self.current.clone(),
            })
    }

    /// Apply the configured policy to a construct with no translation.
    fn unsupported(&self, construct: UnsupportedConstruct) -> Result<()> {
        match self.config.unsupported_policy() {
            UnsupportedPolicy::Skip => {
                log::debug!("{}: no code for {construct}", self.current);
                Ok(())
            }
            UnsupportedPolicy::Reject => Err(CompilationError::Unsupported {
                construct,
                subroutine: self.current.clone(),
            }),
        }
    }
}
