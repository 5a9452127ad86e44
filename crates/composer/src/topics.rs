//! The fixed set of content topics a post can be built around.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named content category used to pick fragments and hashtags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Technology,
    Ai,
    Entrepreneurship,
    Leadership,
    Career,
    Trends,
    Branding,
    Projects,
}

impl Topic {
    /// Every topic, in display order.
    pub const ALL: [Topic; 8] = [
        Self::Technology,
        Self::Ai,
        Self::Entrepreneurship,
        Self::Leadership,
        Self::Career,
        Self::Trends,
        Self::Branding,
        Self::Projects,
    ];

    /// Stable identifier used on the wire and in the CLI.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Technology => "technology",
            Self::Ai => "ai",
            Self::Entrepreneurship => "entrepreneurship",
            Self::Leadership => "leadership",
            Self::Career => "career",
            Self::Trends => "trends",
            Self::Branding => "branding",
            Self::Projects => "projects",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Technology => "Technology",
            Self::Ai => "Artificial Intelligence",
            Self::Entrepreneurship => "Entrepreneurship",
            Self::Leadership => "Leadership",
            Self::Career => "Career Tips",
            Self::Trends => "Industry Trends",
            Self::Branding => "Personal Branding",
            Self::Projects => "Project Showcase",
        }
    }

    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Technology => "💻",
            Self::Ai => "🤖",
            Self::Entrepreneurship => "🚀",
            Self::Leadership => "👑",
            Self::Career => "📈",
            Self::Trends => "📊",
            Self::Branding => "✨",
            Self::Projects => "🎯",
        }
    }

    /// Accent colour token used when the topic is highlighted.
    #[must_use]
    pub const fn accent(&self) -> &'static str {
        match self {
            Self::Technology => "blue",
            Self::Ai => "purple",
            Self::Entrepreneurship => "orange",
            Self::Leadership => "yellow",
            Self::Career => "green",
            Self::Trends => "cyan",
            Self::Branding => "magenta",
            Self::Projects => "red",
        }
    }

    /// Parse a topic identifier. Matching is case-insensitive and ignores
    /// surrounding whitespace.
    #[must_use]
    pub fn parse(id: &str) -> Option<Self> {
        let id = id.trim();
        Self::ALL
            .into_iter()
            .find(|topic| topic.id().eq_ignore_ascii_case(id))
    }
}

impl AsRef<str> for Topic {
    fn as_ref(&self) -> &str {
        self.id()
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Toggle `topic` within an ordered selection: remove it when present,
/// append it otherwise.
pub fn toggle(selection: &mut Vec<Topic>, topic: Topic) {
    if let Some(pos) = selection.iter().position(|t| *t == topic) {
        selection.remove(pos);
    } else {
        selection.push(topic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_ids() {
        for topic in Topic::ALL {
            assert_eq!(Topic::parse(topic.id()), Some(topic));
        }
        assert_eq!(Topic::parse("  AI "), Some(Topic::Ai));
        assert_eq!(Topic::parse("business"), None);
    }

    #[test]
    fn test_serde_uses_lowercase_ids() {
        let json = serde_json::to_string(&Topic::Entrepreneurship).unwrap();
        assert_eq!(json, "\"entrepreneurship\"");
        let topic: Topic = serde_json::from_str("\"ai\"").unwrap();
        assert_eq!(topic, Topic::Ai);
    }

    #[test]
    fn test_toggle_keeps_selection_order() {
        let mut selection = vec![];
        toggle(&mut selection, Topic::Career);
        toggle(&mut selection, Topic::Ai);
        toggle(&mut selection, Topic::Technology);
        assert_eq!(selection, vec![Topic::Career, Topic::Ai, Topic::Technology]);

        toggle(&mut selection, Topic::Ai);
        assert_eq!(selection, vec![Topic::Career, Topic::Technology]);

        toggle(&mut selection, Topic::Ai);
        assert_eq!(selection, vec![Topic::Career, Topic::Technology, Topic::Ai]);
    }
}
