//! Blocking MediaWiki API client.
//!
//! Two requests per lookup: a search to resolve the topic to its canonical
//! article title, then a parse call for the article's rendered HTML. Both
//! go through one reusable agent with a timeout. A slow article source
//! blocks the whole query; there is no retry or cancellation at this
//! layer.

use std::time::Duration;

use serde_json::Value;

use factbot_foundation::{Error, FieldLookup, FieldSpec, Result};

use crate::field::extract_field;
use crate::infobox::{clean_text, first_infobox_text};

/// Configuration for the article source.
#[derive(Clone, Debug)]
pub struct WikiConfig {
    /// MediaWiki API endpoint.
    pub api_endpoint: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// User-Agent header sent with every request.
    pub user_agent: String,
}

impl WikiConfig {
    const fn default_timeout() -> u64 {
        10
    }

    fn default_endpoint() -> String {
        "https://en.wikipedia.org/w/api.php".to_string()
    }

    fn default_user_agent() -> String {
        format!("factbot/{} (fact-query chatbot)", env!("CARGO_PKG_VERSION"))
    }
}

impl Default for WikiConfig {
    fn default() -> Self {
        Self {
            api_endpoint: Self::default_endpoint(),
            timeout_secs: Self::default_timeout(),
            user_agent: Self::default_user_agent(),
        }
    }
}

/// The live Wikipedia field lookup.
pub struct WikiClient {
    agent: ureq::Agent,
    config: WikiConfig,
}

impl WikiClient {
    /// Creates a client with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(WikiConfig::default())
    }

    /// Creates a client with the given configuration.
    #[must_use]
    pub fn with_config(config: WikiConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build();

        Self { agent, config }
    }

    /// Resolves a topic to its canonical article title.
    ///
    /// # Errors
    ///
    /// Returns `TopicNotFound` when the search has no results and `Http`
    /// on transport or decoding failure.
    pub fn resolve_title(&self, topic: &str) -> Result<String> {
        let body = self.get_json(&[
            ("action", "query"),
            ("list", "search"),
            ("srsearch", topic),
            ("srlimit", "1"),
            ("format", "json"),
        ])?;

        let results = body
            .pointer("/query/search")
            .and_then(Value::as_array)
            .ok_or_else(|| Error::http("malformed search response"))?;

        results
            .first()
            .and_then(|result| result.get("title"))
            .and_then(Value::as_str)
            .map(ToString::to_string)
            .ok_or_else(|| Error::topic_not_found(topic))
    }

    /// Fetches the rendered HTML of an article.
    ///
    /// # Errors
    ///
    /// Returns `TopicNotFound` when the API reports a missing page and
    /// `Http` on transport or decoding failure.
    pub fn page_html(&self, title: &str) -> Result<String> {
        let body = self.get_json(&[
            ("action", "parse"),
            ("page", title),
            ("prop", "text"),
            ("format", "json"),
            ("formatversion", "2"),
        ])?;

        if body.get("error").is_some() {
            return Err(Error::topic_not_found(title));
        }

        body.pointer("/parse/text")
            .and_then(Value::as_str)
            .map(ToString::to_string)
            .ok_or_else(|| Error::http("malformed parse response"))
    }

    fn get_json(&self, params: &[(&str, &str)]) -> Result<Value> {
        let mut request = self.agent.get(&self.config.api_endpoint);
        for (name, value) in params {
            request = request.query(name, value);
        }

        request
            .call()
            .map_err(|e| Error::http(e.to_string()))?
            .into_json()
            .map_err(|e| Error::http(e.to_string()))
    }
}

impl Default for WikiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldLookup for WikiClient {
    fn lookup_field(&self, topic: &str, field: &FieldSpec) -> Result<String> {
        let title = self.resolve_title(topic)?;
        let html = self.page_html(&title)?;
        let text = clean_text(&first_infobox_text(&html)?);

        extract_field(&text, field)
    }
}
