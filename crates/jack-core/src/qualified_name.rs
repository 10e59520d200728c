use std::fmt;

/// Fully-qualified subroutine name as the VM sees it.
///
/// # Examples
///
/// ```
/// use jack_core::QualifiedName;
///
/// let name = QualifiedName::new("Point", "new");
/// assert_eq!(name.to_string(), "Point.new");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    /// Enclosing class (e.g., "Point")
    pub class: String,
    /// Subroutine name (e.g., "new")
    pub subroutine: String,
}

impl QualifiedName {
    pub fn new(class: impl Into<String>, subroutine: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            subroutine: subroutine.into(),
        }
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.class.is_empty() {
            write!(f, "{}", self.subroutine)
        } else {
            write!(f, "{}.{}", self.class, self.subroutine)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_with_dot() {
        assert_eq!(QualifiedName::new("Math", "multiply").to_string(), "Math.multiply");
    }
}
