//! "Current news" posts built from simulated headlines.
//!
//! The headline pools stand in for a real news search: the primary topic is
//! turned into a search query, the query selects a pool, and a dated
//! headline from that pool becomes the body of the post.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::compose::excerpt;
use crate::error::{ComposeError, ComposeResult};
use crate::hashtags::hashtag_line;
use crate::random::{pick, RandomSource};
use crate::request::GenerationRequest;
use crate::topics::Topic;

/// Longest news excerpt carried into a post.
pub const NEWS_EXCERPT_CHARS: usize = 200;

const FALLBACK_KEYWORDS: &[&str] = &["business", "innovation"];

pub const NEWS_HOOKS: [&str; 7] = [
    "🚀 Just came across something fascinating...",
    "💡 Here's what caught my attention today:",
    "🔥 Breaking: This could change everything!",
    "⚡ Quick insight that's worth sharing:",
    "🎯 Something interesting happening in",
    "📈 The latest trends show that",
    "🌟 Exciting development alert!",
];

pub const NEWS_CTAS: [&str; 7] = [
    "What's your take on this?",
    "How do you see this impacting your industry?",
    "What are your thoughts?",
    "Are you seeing similar trends?",
    "How is your organization adapting?",
    "What's been your experience?",
    "Would love to hear your perspective!",
];

/// Search keywords for a topic.
#[must_use]
pub const fn keywords(topic: Topic) -> &'static [&'static str] {
    match topic {
        Topic::Technology => &["tech", "innovation", "AI", "software", "startup"],
        Topic::Ai => &[
            "artificial intelligence",
            "machine learning",
            "AI breakthrough",
            "automation",
        ],
        Topic::Entrepreneurship => &["startup", "business", "entrepreneur", "funding", "IPO"],
        Topic::Leadership => &["management", "leadership", "CEO", "business strategy"],
        Topic::Career => &["job market", "remote work", "career growth", "skills"],
        Topic::Trends => &["industry trends", "market analysis", "business trends"],
        Topic::Branding => &["marketing", "brand strategy", "social media", "advertising"],
        Topic::Projects => &["project management", "collaboration", "productivity"],
    }
}

/// Build the news search query for the primary topic id.
pub fn search_query(primary: Option<&str>, year: i32) -> String {
    let words = primary
        .and_then(Topic::parse)
        .map_or(FALLBACK_KEYWORDS, keywords);
    format!("{} latest news {year}", words.join(" OR "))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Desk {
    Tech,
    Ai,
    Startup,
    Leadership,
    Career,
    General,
}

impl Desk {
    /// Desks in match order; the first whose key occurs in the query wins.
    const KEYED: [(&'static str, Desk); 5] = [
        ("tech", Desk::Tech),
        ("ai", Desk::Ai),
        ("startup", Desk::Startup),
        ("leadership", Desk::Leadership),
        ("career", Desk::Career),
    ];

    fn for_query(query: &str) -> Self {
        let query = query.to_lowercase();
        Self::KEYED
            .iter()
            .find(|(key, _)| query.contains(key))
            .map_or(Self::General, |(_, desk)| *desk)
    }

    fn headlines(self, month: &str, year: i32, day: u32) -> [String; 3] {
        match self {
            Self::Tech => [
                format!("Breaking: Major tech breakthrough in {month} {year} revolutionizes industry standards. New platform achieves 10x performance improvement, setting new benchmarks for scalability and efficiency."),
                format!("Industry Alert: {month} {day} - Emerging technology disrupts traditional business models. Early adopters report 40% productivity gains within first quarter of implementation."),
                format!("Tech Update: Revolutionary software solution launches globally this {month}. Beta users share remarkable results, with 95% reporting improved workflow efficiency."),
            ],
            Self::Ai => [
                format!("AI Milestone: {month} {year} marks historic advancement in artificial intelligence capabilities. New model demonstrates unprecedented accuracy in complex problem-solving tasks."),
                format!("Breaking AI: Latest research reveals game-changing applications in healthcare and finance. {month} {year} study shows 60% improvement in diagnostic accuracy."),
                format!("AI Innovation: Startup unveils groundbreaking machine learning platform this {month}. Early results show remarkable potential for business automation and decision-making."),
            ],
            Self::Startup => [
                format!("Startup Scene: {month} {year} funding round breaks records with $500M raised across 20 companies. Climate tech and AI sectors dominate investor interest."),
                format!("Entrepreneurship: New unicorn emerges in {month} {year}, reaching $1B valuation in just 18 months. Founders share insights on rapid scaling strategies."),
                format!("Innovation Hub: {month} sees surge in B2B startups addressing remote work challenges. Three companies secure Series A funding totaling $75M."),
            ],
            Self::Leadership => [
                format!("Leadership Trends: {month} {year} study reveals evolving management practices. 85% of top executives prioritize employee well-being and flexible work arrangements."),
                format!("Executive Insight: Fortune 500 CEOs share {year} strategies for navigating market uncertainty. Focus shifts to resilient leadership and adaptive decision-making."),
                format!("Management Evolution: {month} research highlights importance of emotional intelligence in modern leadership. Companies investing in leadership development see 25% better retention."),
            ],
            Self::Career => [
                format!("Career Shift: {month} {year} job market shows unprecedented demand for hybrid skills. Remote work capabilities become standard requirement across industries."),
                format!("Professional Growth: New {year} survey reveals top skills for career advancement. Data analysis and digital literacy lead the list of most sought-after competencies."),
                format!("Workforce Evolution: {month} data shows 70% of professionals pursuing continuous learning. Micro-credentials and online certifications gain mainstream adoption."),
            ],
            Self::General => [
                format!("Business Update: {month} {year} brings significant shifts in global market dynamics. Companies embrace innovative strategies to maintain competitive advantage."),
                format!("Market Insight: Latest {year} analysis reveals emerging opportunities across multiple sectors. Digital transformation accelerates as businesses adapt to changing consumer preferences."),
                format!("Industry Focus: {month} highlights importance of sustainable business practices. Organizations investing in green initiatives report improved brand reputation and customer loyalty."),
            ],
        }
    }
}

/// Pick a simulated headline for `query`, dated `today`.
pub fn simulated_news(query: &str, today: NaiveDate, rng: &mut dyn RandomSource) -> String {
    let month = today.format("%B").to_string();
    let desk = Desk::for_query(query);
    let mut headlines = desk.headlines(&month, today.year(), today.day());
    let index = rng.pick_index(headlines.len()) % headlines.len();
    debug!(?desk, index, "Selected simulated headline");
    std::mem::take(&mut headlines[index])
}

/// A generated news post and the query used to find its news.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsPost {
    pub post: String,
    /// Empty when the user's own content replaced the news lookup.
    pub search_query: String,
}

/// Wrap `news` in a hook, the optional personal perspective, a call to
/// action and hashtags for `topics`.
pub fn compose_news_post<S: AsRef<str>>(
    news: &str,
    topics: &[S],
    custom_detail: Option<&str>,
    rng: &mut dyn RandomSource,
) -> String {
    let hook = pick(rng, &NEWS_HOOKS);
    let cta = pick(rng, &NEWS_CTAS);

    let mut post = format!("{hook}\n\n{}\n\n", excerpt(news, NEWS_EXCERPT_CHARS));
    if let Some(detail) = custom_detail.map(str::trim).filter(|d| !d.is_empty()) {
        post.push_str("From my perspective: ");
        post.push_str(detail);
        post.push_str("\n\n");
    }
    post.push_str(cta);
    post.push_str("\n\n");
    post.push_str(&hashtag_line(topics));
    post
}

/// Generate a news post for `request`.
///
/// The user's own content is used as the news body when present; otherwise
/// a headline is simulated from the primary topic's search query.
pub fn generate_news_post(
    request: &GenerationRequest,
    today: NaiveDate,
    rng: &mut dyn RandomSource,
) -> ComposeResult<NewsPost> {
    let (news, search_query) = if let Some(content) = request.content() {
        (content.to_string(), String::new())
    } else if let Some(primary) = request.topics.first() {
        let query = search_query(Some(primary.as_str()), today.year());
        (simulated_news(&query, today, rng), query)
    } else {
        return Err(ComposeError::EmptyRequest);
    };

    let post = compose_news_post(&news, &request.topics, request.detail(), rng);
    Ok(NewsPost { post, search_query })
}
