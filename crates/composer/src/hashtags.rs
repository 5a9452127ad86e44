//! Hashtag selection for a set of topics.

use crate::topics::Topic;

/// Maximum number of hashtags appended to a post.
pub const MAX_HASHTAGS: usize = 4;

/// Hashtags taken from each topic before deduplication.
pub const PER_TOPIC: usize = 2;

/// Used when no recognized topic is selected.
pub const FALLBACK_HASHTAGS: [&str; 4] = ["#Business", "#Professional", "#Growth", "#Success"];

/// Candidate hashtags for a topic, most specific first.
#[must_use]
pub const fn candidates(topic: Topic) -> &'static [&'static str] {
    match topic {
        Topic::Technology => &[
            "#Technology",
            "#Innovation",
            "#DigitalTransformation",
            "#TechTrends",
        ],
        Topic::Ai => &[
            "#AI",
            "#ArtificialIntelligence",
            "#MachineLearning",
            "#Innovation",
        ],
        Topic::Entrepreneurship => &[
            "#Entrepreneurship",
            "#StartupLife",
            "#Business",
            "#Innovation",
        ],
        Topic::Leadership => &[
            "#Leadership",
            "#Management",
            "#ProfessionalGrowth",
            "#TeamBuilding",
        ],
        Topic::Career => &[
            "#CareerGrowth",
            "#ProfessionalDevelopment",
            "#CareerTips",
            "#Skills",
        ],
        Topic::Trends => &[
            "#IndustryTrends",
            "#Business",
            "#MarketInsights",
            "#Innovation",
        ],
        Topic::Branding => &[
            "#PersonalBranding",
            "#Marketing",
            "#Brand",
            "#ContentStrategy",
        ],
        Topic::Projects => &[
            "#ProjectManagement",
            "#Productivity",
            "#Success",
            "#Innovation",
        ],
    }
}

/// Select hashtags for `topics` in order.
///
/// Takes up to [`PER_TOPIC`] candidates from each recognized topic, drops
/// duplicates keeping the first occurrence, and caps the result at
/// [`MAX_HASHTAGS`]. Unrecognized ids contribute nothing; when nothing was
/// collected the [`FALLBACK_HASHTAGS`] are returned instead.
pub fn select_hashtags<S: AsRef<str>>(topics: &[S]) -> Vec<&'static str> {
    let collected: Vec<&'static str> = topics
        .iter()
        .filter_map(|id| Topic::parse(id.as_ref()))
        .flat_map(|topic| candidates(topic).iter().take(PER_TOPIC).copied())
        .collect();

    let source: &[&'static str] = if collected.is_empty() {
        &FALLBACK_HASHTAGS
    } else {
        &collected
    };

    let mut selected: Vec<&'static str> = Vec::with_capacity(MAX_HASHTAGS);
    for tag in source {
        if selected.len() == MAX_HASHTAGS {
            break;
        }
        if !selected.contains(tag) {
            selected.push(tag);
        }
    }
    selected
}

/// Space-separated hashtag line for `topics`.
pub fn hashtag_line<S: AsRef<str>>(topics: &[S]) -> String {
    select_hashtags(topics).join(" ")
}
