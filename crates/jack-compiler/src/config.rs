//! Code generator configuration.

/// What to do with input shapes the generator does not translate
/// (indexed assignment, general return values, string and keyword
/// constants, unary terms, comparison and logical operators).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnsupportedPolicy {
    /// Emit nothing for the construct and carry on.
    #[default]
    Skip,
    /// Abort with [`CompilationError::Unsupported`](jack_core::CompilationError::Unsupported).
    Reject,
}

/// Builder-style configuration for [`ClassCompiler`](crate::ClassCompiler).
///
/// # Examples
///
/// ```
/// use jack_compiler::{CompilerConfig, UnsupportedPolicy};
///
/// let config = CompilerConfig::new().with_unsupported_policy(UnsupportedPolicy::Reject);
/// assert_eq!(config.unsupported_policy(), UnsupportedPolicy::Reject);
/// assert_eq!(CompilerConfig::default().unsupported_policy(), UnsupportedPolicy::Skip);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompilerConfig {
    unsupported: UnsupportedPolicy,
}

impl CompilerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for a configuration that rejects every unsupported construct.
    pub fn strict() -> Self {
        Self::new().with_unsupported_policy(UnsupportedPolicy::Reject)
    }

    pub fn with_unsupported_policy(mut self, policy: UnsupportedPolicy) -> Self {
        self.unsupported = policy;
        self
    }

    pub fn unsupported_policy(&self) -> UnsupportedPolicy {
        self.unsupported
    }
}
