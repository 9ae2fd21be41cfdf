use std::future::Future;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use storybook::story::error::Result;
use storybook::{GenerationError, GenerationOptions, Page, Story, TextGenerator};

/// Text generator that answers every prompt with the same canned reply and
/// records what it was asked.
pub struct ScriptedGenerator {
    reply: Result<String>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub fn replying(text: &str) -> Self {
        Self::new(Ok(text.to_string()))
    }

    pub fn failing(error: GenerationError) -> Self {
        Self::new(Err(error))
    }

    fn new(reply: Result<String>) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

impl TextGenerator for ScriptedGenerator {
    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String>> + Send {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        let reply = self.reply.clone();
        async move { reply }
    }
}

/// A model reply with six blank-line separated pages.
pub const SIX_PAGE_REPLY: &str = "Pip the fox found a red balloon.\n\n\
    The balloon tugged Pip into the sky.\n\n\
    Clouds tasted like cold cotton.\n\n\
    A goose offered directions home.\n\n\
    Pip let the balloon go over the meadow.\n\n\
    Back home, Pip told everyone about the sky.";

/// Default options without the cosmetic per-page pause.
pub fn instant_options() -> GenerationOptions {
    GenerationOptions::default().with_page_delay(Duration::ZERO)
}

/// A story of `count` pages named "Page 1", "Page 2", ...
pub fn story_with_pages(count: usize) -> Story {
    let pages = (1..=count)
        .map(|n| {
            let text = format!("Page {n}");
            let url = storybook::build_image_url(&text);
            Page::new(text, url)
        })
        .collect();
    Story::from_pages(pages).expect("Story needs at least one page")
}
