//! Fully written sample posts with a personalisable placeholder.

use regex::{NoExpand, Regex};
use std::sync::LazyLock;

use crate::topics::Topic;

pub const TECHNOLOGY_SAMPLE: &str = "Just discovered an amazing new framework that's changing how we build web applications! 🚀\n\nAfter years of wrestling with complex configurations, this tool makes development feel effortless again. Sometimes the best innovations are the ones that simplify our daily workflows.\n\nWhat's your favorite development tool that changed your perspective?\n\n#WebDevelopment #Technology #Innovation #ProductivityTips";

pub const AI_SAMPLE: &str = "AI isn't replacing human creativity - it's amplifying it! 🎨\n\nSpent the morning experimenting with AI-powered design tools, and I'm blown away by how they enhance rather than replace human intuition. The key is knowing when to collaborate with AI and when to trust your own instincts.\n\nThe future belongs to those who can dance between human creativity and artificial intelligence.\n\n#ArtificialIntelligence #Creativity #FutureOfWork #Innovation";

pub const ENTREPRENEURSHIP_SAMPLE: &str = "Failed my first startup at 25. Best thing that ever happened to me. 💪\n\nThat failure taught me more about business, resilience, and customer needs than any MBA could. Every 'no' became a lesson, every setback a stepping stone.\n\nNow running a successful company, and I credit that early failure for everything I know today.\n\nTo all entrepreneurs facing rejection: your breakthrough is one pivot away.\n\n#Entrepreneurship #Failure #GrowthMindset #StartupLife";

/// Phrases swapped for the caller's detail, one per sample.
pub const PLACEHOLDERS: [&str; 3] = [
    "amazing new framework",
    "AI-powered design tools",
    "first startup",
];

static PLACEHOLDER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = PLACEHOLDERS
        .iter()
        .map(|p| regex::escape(p))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&alternation).expect("placeholder pattern is valid")
});

/// The sample post for `topic`; topics without one use the technology
/// sample.
#[must_use]
pub const fn sample_for(topic: Topic) -> &'static str {
    match topic {
        Topic::Ai => AI_SAMPLE,
        Topic::Entrepreneurship => ENTREPRENEURSHIP_SAMPLE,
        _ => TECHNOLOGY_SAMPLE,
    }
}

/// Return the sample post for `primary`, with every placeholder phrase
/// replaced by `custom_detail` when it is non-blank.
pub fn compose_from_sample(primary: Topic, custom_detail: Option<&str>) -> String {
    let sample = sample_for(primary);
    match custom_detail.map(str::trim).filter(|d| !d.is_empty()) {
        Some(detail) => PLACEHOLDER_PATTERN
            .replace_all(sample, NoExpand(detail))
            .into_owned(),
        None => sample.to_string(),
    }
}
