//! Conditional class composition
//!
//! Maps a set of `(fragment, condition)` pairs onto a single `class`
//! attribute value. Fragments whose condition is false are dropped, each
//! fragment may hold several whitespace separated classes, and a class that
//! appears twice is only emitted once (first occurrence wins).

/// Builder for a composed class string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    classes: Vec<String>,
}

impl ClassList {
    /// Start a list from an unconditional base fragment
    #[must_use]
    pub fn new(base: &str) -> Self {
        Self::default().with(base)
    }

    /// Append a fragment unconditionally
    #[must_use]
    pub fn with(self, fragment: &str) -> Self {
        self.with_if(true, fragment)
    }

    /// Append a fragment only when `condition` holds
    #[must_use]
    pub fn with_if(mut self, condition: bool, fragment: &str) -> Self {
        if condition {
            for class in fragment.split_whitespace() {
                if !self.classes.iter().any(|c| c == class) {
                    self.classes.push(class.to_string());
                }
            }
        }
        self
    }

    /// Final `class` attribute value
    #[must_use]
    pub fn build(&self) -> String {
        self.classes.join(" ")
    }
}

/// Compose a class string from `(fragment, condition)` pairs
#[must_use]
pub fn cn(parts: &[(&str, bool)]) -> String {
    parts
        .iter()
        .fold(ClassList::default(), |list, (fragment, condition)| {
            list.with_if(*condition, fragment)
        })
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drops_false_fragments() {
        assert_eq!(
            cn(&[("btn", true), ("btn-active", false), ("btn-wide", true)]),
            "btn btn-wide"
        );
    }

    #[test]
    fn test_normalizes_whitespace() {
        let classes = ClassList::new("  navbar   fixed ").with("\tshadow\n");
        assert_eq!(classes.build(), "navbar fixed shadow");
    }

    #[test]
    fn test_deduplicates_first_wins() {
        let classes = ClassList::new("a b").with("b c a").with_if(true, "d");
        assert_eq!(classes.build(), "a b c d");
    }

    #[test]
    fn test_empty() {
        assert_eq!(ClassList::default().build(), "");
        assert_eq!(cn(&[("hidden", false)]), "");
        assert_eq!(ClassList::new("   ").build(), "");
    }
}
