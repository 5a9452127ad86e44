//! Post composition from topics or from the user's own text.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ComposeError, ComposeResult};
use crate::hashtags::hashtag_line;
use crate::random::{pick, RandomSource, ThreadRandom};
use crate::request::GenerationRequest;
use crate::samples::compose_from_sample;
use crate::templates::{fragments_for, DEFAULT_TOPIC};
use crate::topics::Topic;

/// Closing line used when the user's text has a single line.
pub const DEFAULT_LESSON: &str = "Every challenge is an opportunity to grow.";

/// Longest excerpt quoted in the problem/solution opening.
pub const EXCERPT_CHARS: usize = 100;

const LESSON_HOOK: &str = "Here's what I learned: ";
const LESSON_CTA_GENERIC: &str = "What lessons have shaped your journey? Share your thoughts below! 👇";
const PROBLEM_OUTCOME: &str = "The outcome exceeded my expectations.";
const PROBLEM_CTA: &str = "Have you faced something similar? I'd love to hear how you approached it.";
const INSIGHT_PREFIX: &str = "💡 Key insight: ";
const INSIGHT_CTA: &str = "What insights have shaped your perspective lately?";

/// How a topic-only request is turned into text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopicStrategy {
    /// Assemble random fragments from the topic's template pool.
    #[default]
    Fragments,
    /// Use the topic's fixed sample post.
    Sample,
}

/// Rewriting structure applied to free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentStructure {
    Lesson,
    ProblemSolution,
    Insight,
}

impl ContentStructure {
    pub const ALL: [ContentStructure; 3] = [Self::Lesson, Self::ProblemSolution, Self::Insight];
}

/// Builds posts, drawing every random choice from `R`.
#[derive(Debug, Clone, Default)]
pub struct Composer<R = ThreadRandom> {
    rng: R,
}

impl<R: RandomSource> Composer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Compose a post for `request`.
    ///
    /// Free text takes precedence over topics. Otherwise the first
    /// recognized topic (or the default topic when none is recognized)
    /// drives `strategy`. Invalid requests are rejected before any random
    /// draw.
    pub fn compose(
        &mut self,
        request: &GenerationRequest,
        strategy: TopicStrategy,
    ) -> ComposeResult<String> {
        request.validate()?;

        let topics = request.known_topics();
        if let Some(content) = request.content() {
            return self.compose_from_user_content(content, &topics);
        }

        let primary = topics.first().copied().unwrap_or(DEFAULT_TOPIC);
        debug!(topic = %primary, ?strategy, "Composing from topics");

        Ok(match strategy {
            TopicStrategy::Fragments => self.compose_from_topics(primary, request.detail()),
            TopicStrategy::Sample => compose_from_sample(primary, request.detail()),
        })
    }

    /// Assemble one random fragment per slot for `primary`. A non-blank
    /// `custom_detail` takes the place of the hook.
    pub fn compose_from_topics(&mut self, primary: Topic, custom_detail: Option<&str>) -> String {
        let set = fragments_for(primary);
        let rng: &mut dyn RandomSource = &mut self.rng;

        let opening = pick(rng, set.opening);
        let drawn_hook = pick(rng, set.hook);
        let context = pick(rng, set.context);
        let reflection = pick(rng, set.reflection);
        let cta = pick(rng, set.cta);
        let emoji = pick(rng, set.emoji);

        let hook = custom_detail
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or(drawn_hook);

        let hashtags = hashtag_line(&[primary]);
        format!("{opening} {hook} {context} {emoji}\n\n{reflection}\n\n{cta}\n\n{hashtags}")
    }

    /// Rewrite the user's text into one of the [`ContentStructure`]s and
    /// append hashtags for `topics`.
    pub fn compose_from_user_content(
        &mut self,
        content: &str,
        topics: &[Topic],
    ) -> ComposeResult<String> {
        let lines: Vec<&str> = content
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        if lines.is_empty() {
            return Err(ComposeError::EmptyContent);
        }

        let structure = ContentStructure::ALL
            [self.rng.pick_index(ContentStructure::ALL.len()) % ContentStructure::ALL.len()];
        debug!(?structure, lines = lines.len(), "Rewriting user content");

        let primary = topics.first().copied();
        let mut blocks = structure_blocks(structure, &lines, primary);
        blocks.push(hashtag_line(topics));

        Ok(blocks
            .into_iter()
            .filter(|b| !b.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n"))
    }
}

fn structure_blocks(
    structure: ContentStructure,
    lines: &[&str],
    primary: Option<Topic>,
) -> Vec<String> {
    let first = lines[0];
    match structure {
        ContentStructure::Lesson => {
            let body = if lines.len() > 2 {
                lines[1..lines.len() - 1].join("\n")
            } else {
                String::new()
            };
            let lesson = if lines.len() > 1 {
                lines[lines.len() - 1]
            } else {
                DEFAULT_LESSON
            };
            let cta = match primary {
                Some(topic) => format!(
                    "How has {} shaped your journey? Share your thoughts below! 👇",
                    topic.label().to_lowercase()
                ),
                None => LESSON_CTA_GENERIC.to_string(),
            };
            vec![
                format!("{LESSON_HOOK}{}", first_sentence(first)),
                body,
                lesson.to_string(),
                cta,
            ]
        }
        ContentStructure::ProblemSolution => {
            // Lines past index 2 are not carried into the post.
            let end = lines.len().min(3);
            vec![
                format!(
                    "I recently took on a challenge: {}",
                    excerpt(&lines.join(" "), EXCERPT_CHARS)
                ),
                lines[1..end].join("\n"),
                PROBLEM_OUTCOME.to_string(),
                PROBLEM_CTA.to_string(),
            ]
        }
        ContentStructure::Insight => {
            let focus = primary.map_or_else(
                || "my work".to_string(),
                |topic| topic.label().to_lowercase(),
            );
            vec![
                format!("{INSIGHT_PREFIX}{first}"),
                lines[1..].join("\n"),
                format!("This has completely changed how I think about {focus}."),
                INSIGHT_CTA.to_string(),
            ]
        }
    }
}

/// Text up to and including the first period, or the whole line.
fn first_sentence(line: &str) -> &str {
    match line.find('.') {
        Some(pos) if pos > 0 => &line[..=pos],
        _ => line,
    }
}

/// The first `max` characters of `text`, with an ellipsis when cut.
pub(crate) fn excerpt(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hashtags::FALLBACK_HASHTAGS;
    use crate::random::{ScriptedRandom, SeededRandom};
    use crate::samples::TECHNOLOGY_SAMPLE;
    use crate::templates::FragmentSet;

    fn all_topic_posts(set: &FragmentSet, hook: Option<&str>, hashtags: &str) -> Vec<String> {
        let hooks: Vec<&str> = hook.map_or_else(|| set.hook.to_vec(), |h| vec![h]);
        let mut posts = vec![];
        for opening in set.opening {
            for hook in &hooks {
                for context in set.context {
                    for emoji in set.emoji {
                        for reflection in set.reflection {
                            for cta in set.cta {
                                posts.push(format!(
                                    "{opening} {hook} {context} {emoji}\n\n{reflection}\n\n{cta}\n\n{hashtags}"
                                ));
                            }
                        }
                    }
                }
            }
        }
        posts
    }

    fn hashtag_blocks(post: &str) -> usize {
        post.split("\n\n")
            .filter(|block| {
                !block.is_empty() && block.split(' ').all(|word| word.starts_with('#'))
            })
            .count()
    }

    #[test]
    fn test_topic_post_is_in_fragment_product() {
        let mut composer = Composer::new(SeededRandom::new(7));
        for topic in Topic::ALL {
            let expected = all_topic_posts(fragments_for(topic), None, &hashtag_line(&[topic]));
            for _ in 0..20 {
                let post = composer.compose_from_topics(topic, None);
                assert!(expected.contains(&post), "unexpected post for {topic}: {post}");
                assert_eq!(hashtag_blocks(&post), 1);
            }
        }
    }

    #[test]
    fn test_detail_replaces_hook() {
        let mut composer = Composer::new(SeededRandom::new(11));
        for topic in Topic::ALL {
            let post = composer.compose_from_topics(topic, Some("  our launch week "));
            assert!(post.contains("our launch week"));
            assert!(!fragments_for(topic).hook.iter().any(|h| post.contains(h)));
            let expected = all_topic_posts(
                fragments_for(topic),
                Some("our launch week"),
                &hashtag_line(&[topic]),
            );
            assert!(expected.contains(&post));
            assert_eq!(hashtag_blocks(&post), 1);
        }
    }

    #[test]
    fn test_scripted_draw_gives_exact_post() {
        let mut composer = Composer::new(ScriptedRandom::new([0, 1, 2, 0, 1, 2]));
        let post = composer.compose_from_topics(Topic::Leadership, None);
        assert_eq!(
            post,
            "One of the best leadership lessons I've learned came from \
             stepping back and letting the team own the decision. \
             The quietest person in the room had the answer all along. 🌟\n\n\
             Great leaders don't create followers. They create more leaders.\n\n\
             How do you build trust on a new team?\n\n\
             #Leadership #Management"
        );
        assert_eq!(composer.rng().draws(), 6);
    }

    #[test]
    fn test_empty_request_draws_nothing() {
        let mut composer = Composer::new(ScriptedRandom::default());
        let err = composer
            .compose(&GenerationRequest::default(), TopicStrategy::Fragments)
            .unwrap_err();
        assert_eq!(err, ComposeError::EmptyRequest);
        assert_eq!(composer.rng().draws(), 0);
    }

    #[test]
    fn test_compose_sample_strategy() {
        let mut composer = Composer::new(ScriptedRandom::default());
        let request = GenerationRequest::from_topics(&[Topic::Technology, Topic::Ai]);
        let post = composer.compose(&request, TopicStrategy::Sample).unwrap();
        assert_eq!(post, TECHNOLOGY_SAMPLE);
        assert_eq!(composer.rng().draws(), 0);
    }

    #[test]
    fn test_compose_prefers_user_content() {
        let mut composer = Composer::new(ScriptedRandom::new([2]));
        let request = GenerationRequest::from_topics(&[Topic::Career])
            .with_user_content("Mentoring matters.")
            .with_custom_details("ignored here");
        let post = composer.compose(&request, TopicStrategy::Fragments).unwrap();
        assert!(post.starts_with("💡 Key insight: Mentoring matters."));
        assert!(post.ends_with("#CareerGrowth #ProfessionalDevelopment"));
    }

    #[test]
    fn test_unrecognized_topics_use_default_topic() {
        let mut composer = Composer::new(ScriptedRandom::default());
        let request = GenerationRequest {
            topics: vec!["cooking".into()],
            ..GenerationRequest::default()
        };
        let post = composer.compose(&request, TopicStrategy::Fragments).unwrap();
        assert!(post.ends_with("#Technology #Innovation"));
    }

    #[test]
    fn test_lesson_structure() {
        let mut composer = Composer::new(ScriptedRandom::new([0]));
        let content = "Shipped our first release. It was rough.\nWe cut scope twice.\nTests saved us.\nShip small, ship often.";
        let post = composer
            .compose_from_user_content(content, &[Topic::Projects])
            .unwrap();
        assert_eq!(
            post,
            "Here's what I learned: Shipped our first release.\n\n\
             We cut scope twice.\nTests saved us.\n\n\
             Ship small, ship often.\n\n\
             How has project showcase shaped your journey? Share your thoughts below! 👇\n\n\
             #ProjectManagement #Productivity"
        );
    }

    #[test]
    fn test_lesson_single_line_uses_default_lesson() {
        let mut composer = Composer::new(ScriptedRandom::new([0]));
        let post = composer
            .compose_from_user_content("No period here", &[])
            .unwrap();
        let fallback = FALLBACK_HASHTAGS.join(" ");
        assert_eq!(
            post,
            format!(
                "Here's what I learned: No period here\n\n{DEFAULT_LESSON}\n\n{LESSON_CTA_GENERIC}\n\n{fallback}"
            )
        );
    }

    #[test]
    fn test_problem_solution_drops_lines_after_third() {
        // Lossy by construction: only lines[1..3] reach the body.
        let mut composer = Composer::new(ScriptedRandom::new([1]));
        let content = "Our deploys took an hour\nWe moved to incremental builds\nWe cached dependencies\nWe split the monolith\nWe added canaries";
        let post = composer
            .compose_from_user_content(content, &[Topic::Technology])
            .unwrap();
        assert!(post.contains("We moved to incremental builds\nWe cached dependencies"));
        assert!(!post.contains("\nWe split the monolith"));
        assert!(!post.contains("\nWe added canaries"));
        assert!(post.contains(PROBLEM_OUTCOME));
        assert!(post.contains(PROBLEM_CTA));
        assert!(post.starts_with("I recently took on a challenge: Our deploys took an hour"));
    }

    #[test]
    fn test_problem_solution_excerpt_is_bounded() {
        let mut composer = Composer::new(ScriptedRandom::new([1]));
        let content = "é".repeat(150);
        let post = composer.compose_from_user_content(&content, &[]).unwrap();
        let opening = post.split("\n\n").next().unwrap();
        assert_eq!(
            opening,
            format!("I recently took on a challenge: {}...", "é".repeat(100))
        );
    }

    #[test]
    fn test_insight_structure_references_topic_or_work() {
        let mut composer = Composer::new(ScriptedRandom::new([2, 2]));
        let with_topic = composer
            .compose_from_user_content("Listen first\nThen decide", &[Topic::Leadership])
            .unwrap();
        assert_eq!(
            with_topic,
            "💡 Key insight: Listen first\n\n\
             Then decide\n\n\
             This has completely changed how I think about leadership.\n\n\
             What insights have shaped your perspective lately?\n\n\
             #Leadership #Management"
        );

        let without = composer
            .compose_from_user_content("Listen first", &[])
            .unwrap();
        assert!(without.contains("how I think about my work."));
    }

    #[test]
    fn test_blank_content_rejected() {
        let mut composer = Composer::new(ScriptedRandom::default());
        assert_eq!(
            composer.compose_from_user_content(" \n\t\n", &[]),
            Err(ComposeError::EmptyContent)
        );
        assert_eq!(composer.rng().draws(), 0);
    }

    #[test]
    fn test_excerpt() {
        assert_eq!(excerpt("short", 10), "short");
        assert_eq!(excerpt("abcdef", 3), "abc...");
        assert_eq!(excerpt("abc", 3), "abc");
    }
}
