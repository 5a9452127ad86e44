//! The editable generated post and its character budget.

use serde::{Deserialize, Serialize};

/// Characters allowed before the post is flagged as over budget.
pub const CHAR_LIMIT: usize = 1200;

/// Characters after which the post is flagged as getting long.
pub const CHAR_WARNING: usize = 700;

/// Budget state shown next to the character count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharBudget {
    Comfortable,
    Warning,
    Over,
}

impl CharBudget {
    #[must_use]
    pub const fn for_count(count: usize) -> Self {
        if count > CHAR_LIMIT {
            Self::Over
        } else if count > CHAR_WARNING {
            Self::Warning
        } else {
            Self::Comfortable
        }
    }
}

/// A generated post. The text may be edited freely; the character count is
/// always derived from the current text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Draft {
    text: String,
}

impl Draft {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text with a manual edit.
    pub fn edit(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Length of the current text in UTF-16 code units, the length the
    /// browser editor reports. Characters outside the BMP count twice.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.text.encode_utf16().count()
    }

    #[must_use]
    pub fn budget(&self) -> CharBudget {
        CharBudget::for_count(self.char_count())
    }

    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_follows_edits() {
        let mut draft = Draft::new("hello");
        assert_eq!(draft.char_count(), 5);

        draft.edit("héllo wörld 🚀");
        assert_eq!(draft.char_count(), draft.text().encode_utf16().count());
        assert_eq!(draft.char_count(), 14);

        draft.edit(String::new());
        assert_eq!(draft.char_count(), 0);
        assert!(draft.is_empty());
    }

    #[test]
    fn test_budget_thresholds() {
        assert_eq!(CharBudget::for_count(0), CharBudget::Comfortable);
        assert_eq!(CharBudget::for_count(700), CharBudget::Comfortable);
        assert_eq!(CharBudget::for_count(701), CharBudget::Warning);
        assert_eq!(CharBudget::for_count(1200), CharBudget::Warning);
        assert_eq!(CharBudget::for_count(1201), CharBudget::Over);

        let draft = Draft::new("x".repeat(900));
        assert_eq!(draft.budget(), CharBudget::Warning);
    }

    #[test]
    fn test_astral_chars_count_twice() {
        let draft = Draft::new("🚀".repeat(350));
        assert_eq!(draft.char_count(), 700);
        assert_eq!(draft.budget(), CharBudget::Comfortable);

        let draft = Draft::new(format!("{}x", "🚀".repeat(350)));
        assert_eq!(draft.char_count(), 701);
        assert_eq!(draft.budget(), CharBudget::Warning);

        let draft = Draft::new("🚀".repeat(700));
        assert_eq!(draft.char_count(), 1400);
        assert_eq!(draft.budget(), CharBudget::Over);
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&Draft::new("post")).unwrap();
        assert_eq!(json, "\"post\"");
    }
}
