use std::sync::Arc;

use kanal::AsyncSender;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use wordsearch_config::client::ClientConfig;
use wordsearch_core::audio::AudioPlayer;
use wordsearch_core::sequence::RequestSequencer;
use wordsearch_core::transport::LookupTransport;
use wordsearch_core::types::AppEvent;
use wordsearch_core::{ViewState, classify};

/// Owns the search screen state and drives it through the lookup lifecycle.
///
/// Cloning is cheap and every clone shares the same state. Each search runs
/// as its own task; without `discard_stale_responses` the last response to
/// resolve wins, even after a `clear`.
#[derive(Clone)]
pub struct SearchController {
    transport: Arc<dyn LookupTransport>,
    audio: Arc<dyn AudioPlayer>,
    view: Arc<Mutex<ViewState>>,
    query: Arc<Mutex<String>>,
    sequencer: Arc<RequestSequencer>,
    discard_stale: bool,
    observer: Option<AsyncSender<AppEvent>>,
}

impl SearchController {
    pub fn new(
        transport: Arc<dyn LookupTransport>,
        audio: Arc<dyn AudioPlayer>,
        config: &ClientConfig,
    ) -> Self {
        Self {
            transport,
            audio,
            view: Arc::new(Mutex::new(ViewState::idle())),
            query: Arc::new(Mutex::new(String::new())),
            sequencer: Arc::new(RequestSequencer::new()),
            discard_stale: config.discard_stale_responses,
            observer: None,
        }
    }

    /// Publish a `ViewChanged` snapshot to `observer` after every transition
    pub fn with_observer(mut self, observer: AsyncSender<AppEvent>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub async fn view(&self) -> ViewState {
        self.view.lock().await.clone()
    }

    pub async fn query(&self) -> String {
        self.query.lock().await.clone()
    }

    /// Start a search for `query`.
    ///
    /// Returns the handle of the spawned lookup, or `None` when the query is
    /// blank and no request was made.
    pub async fn submit(&self, query: &str) -> Option<JoinHandle<()>> {
        *self.query.lock().await = query.to_string();

        let mut view = self.view.lock().await;
        if query.trim().is_empty() {
            tracing::debug!("[SEARCH] search word is empty");
            view.reject_empty_query();
            let snapshot = view.clone();
            drop(view);
            self.publish(snapshot).await;
            return None;
        }

        let ticket = self.sequencer.next();
        view.begin_loading();
        let snapshot = view.clone();
        drop(view);
        self.publish(snapshot).await;

        tracing::info!("[SEARCH] #{} looking up '{}'", ticket, query);
        let controller = self.clone();
        let query = query.to_string();
        Some(tokio::spawn(async move {
            controller.lookup(ticket, &query).await;
        }))
    }

    /// Run one request and apply its outcome.
    ///
    /// `ticket` is the sequence number handed out by `submit`.
    pub async fn lookup(&self, ticket: u64, query: &str) {
        let response = self.transport.search(query).await;
        match &response {
            Ok(result) => tracing::debug!(
                "[SEARCH] #{} got {} entries (status {:?})",
                ticket,
                result.entries.as_ref().map_or(0, Vec::len),
                result.status_code
            ),
            Err(e) => tracing::warn!("[SEARCH] #{} request failed: {}", ticket, e),
        }
        let outcome = classify(response);

        let mut view = self.view.lock().await;
        if self.discard_stale && self.sequencer.is_stale(ticket) {
            tracing::debug!(
                "[SEARCH] #{} superseded by #{}, dropping response",
                ticket,
                self.sequencer.latest()
            );
            return;
        }

        view.finish(outcome);
        let snapshot = view.clone();
        drop(view);
        self.publish(snapshot).await;
    }

    /// Back to idle. Requests already in flight keep running.
    pub async fn clear(&self) {
        self.query.lock().await.clear();

        let mut view = self.view.lock().await;
        self.sequencer.next();
        view.reset();
        let snapshot = view.clone();
        drop(view);
        self.publish(snapshot).await;
    }

    pub fn play_audio(&self, url: &str) {
        if let Err(e) = self.audio.play(url) {
            tracing::warn!("[AUDIO] {}", e);
        }
    }

    /// Must be called after the view lock is released, a slow observer
    /// would otherwise stall every caller waiting on the view
    async fn publish(&self, snapshot: ViewState) {
        if let Some(observer) = &self.observer
            && let Err(e) = observer.send(AppEvent::ViewChanged(snapshot)).await
        {
            tracing::debug!("view observer gone: {}", e);
        }
    }
}
