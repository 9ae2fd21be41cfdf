use std::time::Duration;

use futures_util::future::join_all;
use tracing::{debug, info, instrument};

use crate::client::TextGenerator;
use crate::models::{LoadingProgress, Page, Story};
use crate::story::error::{GenerationError, Result};
use crate::story::image_url::ImageUrlBuilder;
use crate::story::prompt::{DEFAULT_PAGE_COUNT, build_prompt, split_pages};

/// Pacing between "page ready" events. Purely cosmetic.
pub const DEFAULT_PAGE_DELAY: Duration = Duration::from_secs(1);

/// Knobs for one generation run.
#[derive(Debug, Clone)]
pub struct GenerationOptions {
    pub page_count: usize,
    pub page_delay: Duration,
    pub images: ImageUrlBuilder,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            page_count: DEFAULT_PAGE_COUNT,
            page_delay: DEFAULT_PAGE_DELAY,
            images: ImageUrlBuilder::default(),
        }
    }
}

impl GenerationOptions {
    pub fn with_page_delay(mut self, page_delay: Duration) -> Self {
        self.page_delay = page_delay;
        self
    }
}

/// Generate a paginated, illustrated story from an outline.
///
/// The generator is called exactly once. `on_progress` receives `{0, N}` once
/// the page count is known and then `{i + 1, N}` for every page in order,
/// before that page's image URL is built. Any failure discards the pages
/// computed so far.
#[instrument(skip_all, fields(outline_len = outline.len()))]
pub async fn generate_story<G, F>(
    generator: &G,
    outline: &str,
    options: &GenerationOptions,
    mut on_progress: F,
) -> Result<Story>
where
    G: TextGenerator + ?Sized,
    F: FnMut(LoadingProgress),
{
    let prompt = build_prompt(outline, options.page_count);
    let raw = generator.generate(&prompt).await?;

    let texts = split_pages(&raw);
    if texts.is_empty() {
        return Err(GenerationError::EmptyStory);
    }

    let total = texts.len();
    debug!(total, "Story text split into pages");
    on_progress(LoadingProgress::new(0, total));

    let pages = texts.into_iter().enumerate().map(|(index, text)| {
        on_progress(LoadingProgress::new(index + 1, total));
        let image_url = options.images.build(&text);
        let delay = options.page_delay;
        async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            Page::new(text, image_url)
        }
    });
    // Collect first so every progress event fires before any delay is awaited.
    let pending: Vec<_> = pages.collect();
    let pages = join_all(pending).await;

    info!(pages = pages.len(), "Story generated");
    Story::from_pages(pages).ok_or(GenerationError::EmptyStory)
}

#[cfg(test)]
mod tests {
    use std::future::Future;
    use std::sync::Mutex;

    use super::*;

    struct Canned {
        reply: Result<String>,
        prompts: Mutex<Vec<String>>,
    }

    impl Canned {
        fn new(reply: Result<String>) -> Self {
            Self {
                reply,
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    impl TextGenerator for Canned {
        fn generate(&self, prompt: &str) -> impl Future<Output = Result<String>> + Send {
            self.prompts.lock().unwrap().push(prompt.to_string());
            let reply = self.reply.clone();
            async move { reply }
        }
    }

    fn instant() -> GenerationOptions {
        GenerationOptions::default().with_page_delay(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_pages_follow_split_order() {
        let generator = Canned::new(Ok("A\n\nB\n\n  \n\nC".to_string()));
        let story = generate_story(&generator, "abc", &instant(), |_| {})
            .await
            .unwrap();

        let texts: Vec<_> = story.pages().iter().map(Page::text).collect();
        assert_eq!(texts, vec!["A", "B", "C"]);
        assert_eq!(story.pages()[1].image_url(), options_url("B"));
        assert_eq!(generator.prompts.lock().unwrap().len(), 1);
    }

    fn options_url(text: &str) -> String {
        ImageUrlBuilder::default().build(text)
    }

    #[tokio::test]
    async fn test_progress_sequence() {
        let generator = Canned::new(Ok("one\n\ntwo\n\nthree".to_string()));
        let mut seen = Vec::new();
        generate_story(&generator, "count", &instant(), |p| seen.push(p))
            .await
            .unwrap();

        assert_eq!(
            seen,
            vec![
                LoadingProgress::new(0, 3),
                LoadingProgress::new(1, 3),
                LoadingProgress::new(2, 3),
                LoadingProgress::new(3, 3),
            ]
        );
    }

    #[tokio::test]
    async fn test_whitespace_response_is_an_error() {
        let generator = Canned::new(Ok(" \n\n \n".to_string()));
        let mut calls = 0;
        let result = generate_story(&generator, "x", &instant(), |_| calls += 1).await;

        assert_eq!(result, Err(GenerationError::EmptyStory));
        assert_eq!(calls, 0);
    }

    #[tokio::test]
    async fn test_service_error_propagates() {
        let generator = Canned::new(Err(GenerationError::Service("quota exceeded".into())));
        let err = generate_story(&generator, "x", &instant(), |_| {})
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to generate story: quota exceeded");
    }

    #[tokio::test(start_paused = true)]
    async fn test_page_delays_run_concurrently() {
        let generator = Canned::new(Ok("a\n\nb\n\nc\n\nd\n\ne\n\nf".to_string()));
        let started = tokio::time::Instant::now();
        let story = generate_story(&generator, "x", &GenerationOptions::default(), |_| {})
            .await
            .unwrap();

        assert_eq!(story.len(), 6);
        // Six one-second delays awaited jointly take one second, not six.
        assert!(started.elapsed() < Duration::from_secs(2));
    }
}
