//! Shared vocabulary for the Jack front-end crates.
//!
//! - [`error`]: error types for tree construction and code generation
//! - [`keywords`]: the reserved-word set handed to the lexer
//! - [`qualified_name`]: `Class.subroutine` names used by the VM

pub mod error;
pub mod keywords;
pub mod qualified_name;

pub use error::{AstError, CompilationError, JackError, UnsupportedConstruct};
pub use keywords::KeywordSet;
pub use qualified_name::QualifiedName;
