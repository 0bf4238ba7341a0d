//! Motivational quote shown above every section. Requests go out as they are asked for; when two
//! overlap, whichever finishes last decides what is shown.

use std::sync::{Arc, Mutex, PoisonError};

use anyhow::{bail, Result};
use async_trait::async_trait;
use serde::Deserialize;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

pub const DEFAULT_QUOTE_URL: &str = "https://api.quotable.io/random?tags=inspirational";

/// Text shown in place of a quote when the request fails.
pub const FALLBACK_MESSAGE: &str = "Wisdom loading...";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Quote {
    pub content: String,
    pub author: String,
}

/// Anything able to produce a random quote.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuoteSource: Send + Sync + 'static {
    async fn fetch_quote(&self) -> Result<Quote>;
}

/// [QuoteSource] backed by a JSON endpoint returning `{ "content": .., "author": .. }`.
pub struct HttpQuoteSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpQuoteSource {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl QuoteSource for HttpQuoteSource {
    async fn fetch_quote(&self) -> Result<Quote> {
        debug!("Requesting quote from {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;
        let status = response.status();
        if !status.is_success() {
            bail!("Quote request failed with status {status}");
        }
        Ok(response.json::<Quote>().await?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteState {
    Loading,
    /// Request failed. Rendered as [FALLBACK_MESSAGE] with a hint to retry.
    Error,
    Loaded(Quote),
}

/// Holds the displayed quote. Clones share the same state.
#[derive(Clone)]
pub struct QuoteWidget {
    source: Arc<dyn QuoteSource>,
    state: Arc<Mutex<QuoteState>>,
}

impl QuoteWidget {
    pub fn new(source: Arc<dyn QuoteSource>) -> Self {
        Self {
            source,
            state: Arc::new(Mutex::new(QuoteState::Loading)),
        }
    }

    pub fn state(&self) -> QuoteState {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Requests a new quote and stores the result. Used both for the first request and for
    /// "next quote"/retry.
    pub async fn refresh(&self) {
        self.set_state(QuoteState::Loading);
        let state = match self.source.fetch_quote().await {
            Ok(quote) => QuoteState::Loaded(quote),
            Err(e) => {
                warn!("Failed to fetch quote {e:?}");
                QuoteState::Error
            }
        };
        self.set_state(state);
    }

    /// Runs [QuoteWidget::refresh] in the background. Earlier requests are not cancelled.
    pub fn spawn_refresh(&self) -> JoinHandle<()> {
        let widget = self.clone();
        tokio::spawn(async move { widget.refresh().await })
    }

    fn set_state(&self, state: QuoteState) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = state;
    }
}
