//! Symbol resolution for class compilation.
//!
//! The generator sees symbols only through the [`SymbolTable`] trait. Lookups
//! go to the active subroutine scope first and fall back to the class scope.
//! [`ClassSymbols`] is the table used by default:
//! - `static` and `field` names live in the class scope
//! - arguments and `var` locals live in the subroutine scope, which is
//!   replaced wholesale on every [`enter_subroutine`](SymbolTable::enter_subroutine)
//! - each storage class numbers its entries from 0 in declaration order

use jack_core::CompilationError;
use jack_syntax::ast::{ClassDecl, ClassVarKind, SubroutineDecl, SubroutineKind};
use rustc_hash::FxHashMap;

use crate::writer::Segment;

// ============================================================================
// Types
// ============================================================================

/// Where a variable lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageClass {
    /// Class-scope `static`
    Static,
    /// Class-scope `field`
    Field,
    /// Subroutine parameter
    Argument,
    /// Subroutine `var`
    Local,
}

impl StorageClass {
    /// The VM segment backing this storage class.
    pub fn segment(&self) -> Segment {
        match self {
            StorageClass::Static => Segment::Static,
            StorageClass::Field => Segment::This,
            StorageClass::Argument => Segment::Argument,
            StorageClass::Local => Segment::Local,
        }
    }

    fn is_class_scope(&self) -> bool {
        matches!(self, StorageClass::Static | StorageClass::Field)
    }
}

/// A resolved variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol {
    pub storage: StorageClass,
    /// Index within the storage class
    pub index: usize,
}

/// Symbol lookups the code generator depends on.
pub trait SymbolTable {
    /// Replace the subroutine scope with one seeded from `subroutine`'s
    /// parameters and locals.
    fn enter_subroutine(&mut self, subroutine: &SubroutineDecl<'_>) -> Result<(), CompilationError>;

    /// Resolve `name`, subroutine scope first, class scope second.
    fn lookup(&self, name: &str) -> Option<Symbol>;

    /// Number of locals in the active subroutine.
    fn local_count(&self) -> usize;

    /// Number of fields in the enclosing class.
    fn field_count(&self) -> usize;
}

// ============================================================================
// ClassSymbols
// ============================================================================

/// Symbol table for one class and its active subroutine.
#[derive(Debug, Clone)]
pub struct ClassSymbols {
    /// Class name, for error messages
    class_name: String,
    /// Active subroutine name, for error messages
    subroutine_name: String,

    /// `static` and `field` entries
    class_scope: FxHashMap<String, Symbol>,
    /// Argument and local entries of the active subroutine
    subroutine_scope: FxHashMap<String, Symbol>,

    statics: usize,
    fields: usize,
    arguments: usize,
    locals: usize,
}

impl ClassSymbols {
    /// Create a table with the class scope filled from `class`.
    pub fn new(class: &ClassDecl<'_>) -> Result<Self, CompilationError> {
        let mut table = Self {
            class_name: class.name.to_string(),
            subroutine_name: String::new(),
            class_scope: FxHashMap::default(),
            subroutine_scope: FxHashMap::default(),
            statics: 0,
            fields: 0,
            arguments: 0,
            locals: 0,
        };

        for decl in class.vars {
            let storage = match decl.kind {
                ClassVarKind::Static => StorageClass::Static,
                ClassVarKind::Field => StorageClass::Field,
            };
            for name in decl.names {
                table.define(name, storage)?;
            }
        }

        Ok(table)
    }

    /// Declare `name` in the scope its storage class belongs to.
    ///
    /// Returns the new symbol, or an error if the name already exists in that
    /// scope. Shadowing a class-scope name from a subroutine is allowed.
    pub fn define(&mut self, name: &str, storage: StorageClass) -> Result<Symbol, CompilationError> {
        let (scope, scope_name) = if storage.is_class_scope() {
            (&mut self.class_scope, self.class_name.clone())
        } else {
            (
                &mut self.subroutine_scope,
                format!("{}.{}", self.class_name, self.subroutine_name),
            )
        };

        if scope.contains_key(name) {
            return Err(CompilationError::Redeclaration {
                name: name.to_string(),
                scope: scope_name,
            });
        }

        let counter = match storage {
            StorageClass::Static => &mut self.statics,
            StorageClass::Field => &mut self.fields,
            StorageClass::Argument => &mut self.arguments,
            StorageClass::Local => &mut self.locals,
        };
        let symbol = Symbol {
            storage,
            index: *counter,
        };
        *counter += 1;

        scope.insert(name.to_string(), symbol);
        Ok(symbol)
    }

    /// Number of `static` variables in the class.
    pub fn static_count(&self) -> usize {
        self.statics
    }
}

impl SymbolTable for ClassSymbols {
    fn enter_subroutine(&mut self, subroutine: &SubroutineDecl<'_>) -> Result<(), CompilationError> {
        self.subroutine_name = subroutine.name.to_string();
        self.subroutine_scope = FxHashMap::with_capacity_and_hasher(
            subroutine.params.len() + subroutine.local_count(),
            Default::default(),
        );
        self.locals = 0;
        // Methods receive the object as argument 0.
        self.arguments = usize::from(subroutine.kind == SubroutineKind::Method);

        for param in subroutine.params {
            self.define(param.name, StorageClass::Argument)?;
        }
        for decl in subroutine.locals {
            for name in decl.names {
                self.define(name, StorageClass::Local)?;
            }
        }
        Ok(())
    }

    fn lookup(&self, name: &str) -> Option<Symbol> {
        self.subroutine_scope
            .get(name)
            .or_else(|| self.class_scope.get(name))
            .copied()
    }

    fn local_count(&self) -> usize {
        self.locals
    }

    fn field_count(&self) -> usize {
        self.fields
    }
}
