//! Parsing support shared by the menu value objects

/// Error returned when user or configuration input names no known value
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {kind}: '{input}'")]
pub struct ParseValueError {
    /// What was being parsed ("phase", "action", "rate of fire")
    pub kind: &'static str,
    /// The rejected input
    pub input: String,
}

impl ParseValueError {
    pub fn new(kind: &'static str, input: impl Into<String>) -> Self {
        Self {
            kind,
            input: input.into(),
        }
    }
}

/// Fold a label for comparison: case-insensitive, with `_`, `-` and runs of
/// whitespace treated as a single space.
pub(crate) fn normalize_label(input: &str) -> String {
    input
        .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_label() {
        assert_eq!(normalize_label("Prep Fire"), "prep fire");
        assert_eq!(normalize_label("  PREP_fire "), "prep fire");
        assert_eq!(normalize_label("close-combat"), "close combat");
        assert_eq!(normalize_label(""), "");
    }

    #[test]
    fn test_error_message() {
        let err = ParseValueError::new("phase", "Lunch");
        assert_eq!(err.to_string(), "Unknown phase: 'Lunch'");
    }
}
