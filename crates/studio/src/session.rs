//! The authoring session: everything a user has selected, typed and
//! generated, plus the identity connection used for publishing.
//!
//! A session is an owned value driven through `&mut self`, so one session
//! can never run two generations at once. The outside services it talks to
//! are passed in per call rather than stored.

use std::time::Duration;

use composer::{
    topics, CharBudget, Composer, Draft, GenerationRequest, RandomSource, Topic, TopicStrategy,
};
use gateway::{
    Connection, GatewayError, GenerationService, IdentityProvider, NotifyReceipt, Notifier,
    Profile, PublishReceipt, Publisher,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{StudioError, StudioResult};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Session {
    selected_topics: Vec<Topic>,
    custom_detail: String,
    user_content: String,
    strategy: TopicStrategy,
    draft: Draft,
    #[serde(skip_serializing_if = "Option::is_none")]
    search_query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    connection: Option<Connection>,
    #[serde(skip)]
    generating: bool,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ---- selections ---------------------------------------------------------

    pub fn selected_topics(&self) -> &[Topic] {
        &self.selected_topics
    }

    /// Select `topic`, or deselect it when already selected.
    pub fn toggle_topic(&mut self, topic: Topic) {
        topics::toggle(&mut self.selected_topics, topic);
        debug!(topic = %topic, selected = self.selected_topics.len(), "Toggled topic");
    }

    pub fn set_custom_detail(&mut self, detail: impl Into<String>) {
        self.custom_detail = detail.into();
    }

    pub fn set_user_content(&mut self, content: impl Into<String>) {
        self.user_content = content.into();
    }

    pub fn set_strategy(&mut self, strategy: TopicStrategy) {
        self.strategy = strategy;
    }

    /// The generation request described by the current selections.
    pub fn request(&self) -> GenerationRequest {
        let mut request = GenerationRequest::from_topics(&self.selected_topics);
        if !self.user_content.trim().is_empty() {
            request = request.with_user_content(self.user_content.trim());
        }
        if !self.custom_detail.trim().is_empty() {
            request = request.with_custom_details(self.custom_detail.trim());
        }
        request
    }

    // ---- generation ---------------------------------------------------------

    /// True only while a generation future is being driven. Dropping that
    /// future part way clears it again.
    pub fn is_generating(&self) -> bool {
        self.generating
    }

    /// Compose a post locally after `delay`.
    ///
    /// Requests with no topic and no text are rejected before the delay and
    /// before any random draw. The draft is replaced only on success.
    pub async fn generate<R: RandomSource>(
        &mut self,
        composer: &mut Composer<R>,
        delay: Duration,
    ) -> StudioResult<&Draft> {
        let request = self.request();
        request.validate()?;

        let guard = InFlight::start(&mut self.generating);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        let result = composer.compose(&request, self.strategy);
        drop(guard);

        self.draft = Draft::new(result?);
        self.search_query = None;
        info!(
            topics = ?request.topics,
            chars = self.draft.char_count(),
            "Post generated"
        );
        Ok(&self.draft)
    }

    /// Ask `service` for a post; its text is used verbatim.
    pub async fn generate_with(
        &mut self,
        service: &dyn GenerationService,
    ) -> StudioResult<&Draft> {
        let request = self.request();
        request.validate()?;

        let guard = InFlight::start(&mut self.generating);
        let result = service.generate(&request).await;
        drop(guard);

        let generated = result.inspect_err(|e| warn!(error = %e, "Generation failed"))?;
        self.draft = Draft::new(generated.post);
        self.search_query = generated.search_query;
        info!(
            chars = self.draft.char_count(),
            query = self.search_query.as_deref().unwrap_or(""),
            "Post generated by service"
        );
        Ok(&self.draft)
    }

    // ---- draft --------------------------------------------------------------

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// The text to copy, publish or send.
    pub fn post_text(&self) -> &str {
        self.draft.text()
    }

    /// Query used to find the news behind the current draft, if any.
    pub fn search_query(&self) -> Option<&str> {
        self.search_query.as_deref()
    }

    /// Replace the draft with a manual edit.
    pub fn edit(&mut self, text: impl Into<String>) {
        self.draft.edit(text);
    }

    pub fn char_count(&self) -> usize {
        self.draft.char_count()
    }

    pub fn budget(&self) -> CharBudget {
        self.draft.budget()
    }

    // ---- identity -----------------------------------------------------------

    /// Complete the handshake for an authorization `code`.
    pub async fn connect(
        &mut self,
        provider: &dyn IdentityProvider,
        code: &str,
    ) -> StudioResult<&Connection> {
        let connection = provider.connect(code).await?;
        info!(
            name = connection.profile.as_ref().map_or("", |p| p.name.as_str()),
            "Connected"
        );
        Ok(&*self.connection.insert(connection))
    }

    /// Adopt a connection obtained elsewhere.
    pub fn restore_connection(&mut self, connection: Connection) {
        self.connection = Some(connection);
    }

    pub fn disconnect(&mut self) {
        if self.connection.take().is_some() {
            info!("Disconnected");
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connection.is_some()
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.connection.as_ref().and_then(|c| c.profile.as_ref())
    }

    // ---- delivery -----------------------------------------------------------

    /// Publish the current draft. Fails before any request when there is no
    /// connection or nothing to publish.
    pub async fn publish(&self, publisher: &dyn Publisher) -> StudioResult<PublishReceipt> {
        let connection = self.connection.as_ref().ok_or(GatewayError::NotConnected)?;
        if self.post_text().trim().is_empty() {
            return Err(StudioError::validation("Nothing to publish"));
        }

        let receipt = publisher.publish(self.post_text(), connection).await?;
        info!(post_id = %receipt.post_id, "Post published");
        Ok(receipt)
    }

    /// E-mail the current draft to `recipient`.
    pub async fn email(
        &self,
        notifier: &dyn Notifier,
        recipient: &str,
    ) -> StudioResult<NotifyReceipt> {
        let recipient = recipient.trim();
        if recipient.is_empty() {
            return Err(StudioError::validation("Recipient address is required"));
        }
        if self.post_text().trim().is_empty() {
            return Err(StudioError::validation("Nothing to send"));
        }

        let receipt = notifier.notify(self.post_text(), recipient).await?;
        info!(message_id = %receipt.message_id, "Post e-mailed");
        Ok(receipt)
    }
}

/// Holds the generating flag up until dropped, on every exit path.
struct InFlight<'a>(&'a mut bool);

impl<'a> InFlight<'a> {
    fn start(flag: &'a mut bool) -> Self {
        *flag = true;
        Self(flag)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}
