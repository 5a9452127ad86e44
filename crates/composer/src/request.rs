//! Generation requests as they arrive from the session or over the wire.

use serde::{Deserialize, Serialize};

use crate::error::{ComposeError, ComposeResult};
use crate::topics::Topic;

/// A single "generate" action: which topics were selected and what the
/// user typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    /// Selected topic ids, in selection order. Unknown ids are tolerated.
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_details: Option<String>,
}

impl GenerationRequest {
    pub fn from_topics(topics: &[Topic]) -> Self {
        Self {
            topics: topics.iter().map(|t| t.id().to_string()).collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_user_content(mut self, content: impl Into<String>) -> Self {
        self.user_content = Some(content.into());
        self
    }

    #[must_use]
    pub fn with_custom_details(mut self, details: impl Into<String>) -> Self {
        self.custom_details = Some(details.into());
        self
    }

    /// Trimmed free text, if any was given.
    pub fn content(&self) -> Option<&str> {
        non_blank(self.user_content.as_deref())
    }

    /// Trimmed custom detail, if any was given.
    pub fn detail(&self) -> Option<&str> {
        non_blank(self.custom_details.as_deref())
    }

    /// Recognized topics in request order.
    pub fn known_topics(&self) -> Vec<Topic> {
        self.topics.iter().filter_map(|id| Topic::parse(id)).collect()
    }

    /// Reject requests with no topic and no free text.
    pub fn validate(&self) -> ComposeResult<()> {
        if self.topics.is_empty() && self.content().is_none() {
            return Err(ComposeError::EmptyRequest);
        }
        Ok(())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
