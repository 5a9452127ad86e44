//! Post composition core.
//!
//! This crate turns a topic selection and optional user text into a
//! social-network post. It has no I/O of its own:
//!
//! - [`Topic`] enumerates the eight supported content categories
//! - [`select_hashtags`] derives a short, deduplicated hashtag list
//! - [`Composer`] assembles posts from template fragments or rewrites the
//!   user's own text, drawing random choices from a [`RandomSource`]
//! - [`compose_from_sample`] personalises a fixed sample post
//! - [`generate_news_post`] wraps a (simulated) news headline into a post
//! - [`Draft`] holds the editable result and its character budget
//!
//! # Usage
//!
//! ```
//! use composer::{Composer, GenerationRequest, SeededRandom, Topic, TopicStrategy};
//!
//! let mut composer = Composer::new(SeededRandom::new(1));
//! let request = GenerationRequest::from_topics(&[Topic::Leadership]);
//! let post = composer.compose(&request, TopicStrategy::Fragments).unwrap();
//! assert!(post.ends_with("#Leadership #Management"));
//! ```

pub mod compose;
pub mod draft;
pub mod error;
pub mod hashtags;
pub mod news;
pub mod random;
pub mod request;
pub mod samples;
pub mod templates;
pub mod topics;

pub use compose::{Composer, ContentStructure, TopicStrategy};
pub use draft::{CharBudget, Draft, CHAR_LIMIT, CHAR_WARNING};
pub use error::{ComposeError, ComposeResult};
pub use hashtags::{hashtag_line, select_hashtags, FALLBACK_HASHTAGS};
pub use news::{generate_news_post, NewsPost};
pub use random::{RandomSource, ScriptedRandom, SeededRandom, ThreadRandom};
pub use request::GenerationRequest;
pub use samples::compose_from_sample;
pub use templates::{fragments_for, FragmentSet};
pub use topics::Topic;
