//! Top-level application state.
//!
//! Exactly one of idle, loading, ready or failed holds at any time, so a
//! story, an error and a loading indicator can never be shown together.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::client::TextGenerator;
use crate::models::{LoadingProgress, Story};
use crate::story::{GenerationError, GenerationOptions, generate_story};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AppState {
    /// Waiting for an outline.
    #[default]
    Idle,
    Loading(LoadingProgress),
    Ready(Arc<Story>),
    /// Waiting for an outline, with the last failure on display.
    Failed(String),
}

#[derive(Debug, Default)]
pub struct Session {
    state: AppState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, AppState::Loading(_))
    }

    /// `{0, 0}` whenever no generation is running.
    pub fn progress(&self) -> LoadingProgress {
        match self.state {
            AppState::Loading(progress) => progress,
            _ => LoadingProgress::default(),
        }
    }

    pub fn story(&self) -> Option<&Arc<Story>> {
        match &self.state {
            AppState::Ready(story) => Some(story),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            AppState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Enter the loading state. Returns false, leaving the state untouched,
    /// when a generation is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_loading() {
            warn!("Ignoring outline submitted while a story is being generated");
            return false;
        }
        debug!("Starting story generation");
        self.state = AppState::Loading(LoadingProgress::default());
        true
    }

    pub fn report_progress(&mut self, progress: LoadingProgress) {
        if let AppState::Loading(current) = &mut self.state {
            *current = progress;
        }
    }

    /// Leave the loading state with the outcome of the generation.
    pub fn complete(&mut self, result: Result<Story, GenerationError>) {
        self.complete_shared(result.map(Arc::new));
    }

    fn complete_shared(&mut self, result: Result<Arc<Story>, GenerationError>) {
        if !self.is_loading() {
            warn!("Discarding generation result that arrived outside of loading");
            return;
        }
        self.state = match result {
            Ok(story) => {
                info!(pages = story.len(), "Story ready");
                AppState::Ready(story)
            }
            Err(err) => {
                warn!(error = %err, "Story generation failed");
                AppState::Failed(err.user_message())
            }
        };
    }

    /// Run one full submission: begin, generate with progress, complete.
    ///
    /// Returns false without calling the generator when another submission
    /// is still loading.
    pub async fn submit_outline<G>(
        &mut self,
        generator: &G,
        outline: &str,
        options: &GenerationOptions,
    ) -> bool
    where
        G: TextGenerator + ?Sized,
    {
        self.submit_outline_with(generator, outline, options, |_| {})
            .await
    }

    /// Like [`Session::submit_outline`], also passing every progress
    /// notification to `observer`.
    pub async fn submit_outline_with<G, F>(
        &mut self,
        generator: &G,
        outline: &str,
        options: &GenerationOptions,
        mut observer: F,
    ) -> bool
    where
        G: TextGenerator + ?Sized,
        F: FnMut(LoadingProgress),
    {
        if !self.begin() {
            return false;
        }
        let result = generate_story(generator, outline, options, |progress| {
            self.report_progress(progress);
            observer(progress);
        })
        .await;
        self.complete(result);
        true
    }

    /// Discard the current story or error and return to outline entry.
    pub fn reset(&mut self) {
        match self.state {
            AppState::Loading(_) => debug!("Reset ignored while loading"),
            AppState::Idle => {}
            AppState::Ready(_) | AppState::Failed(_) => {
                debug!("Session reset");
                self.state = AppState::Idle;
            }
        }
    }
}
