use std::sync::Arc;

use crate::models::{Page, Story};

/// Page-turning state for one displayed story.
#[derive(Debug, Clone)]
pub struct StoryNavigator {
    story: Arc<Story>,
    index: usize,
}

impl StoryNavigator {
    pub fn new(story: Arc<Story>) -> Self {
        Self { story, index: 0 }
    }

    /// Display `story`, going back to the first page if it is a different story.
    pub fn show(&mut self, story: Arc<Story>) {
        if !Arc::ptr_eq(&self.story, &story) {
            self.story = story;
            self.index = 0;
        }
    }

    pub fn story(&self) -> &Arc<Story> {
        &self.story
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn page_count(&self) -> usize {
        self.story.len()
    }

    pub fn current_page(&self) -> &Page {
        // index never leaves [0, len - 1] and a story is never empty
        &self.story.pages()[self.index]
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.page_count()
    }

    /// Returns whether the page changed.
    pub fn next(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Returns whether the page changed.
    pub fn previous(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.index -= 1;
        true
    }

    pub fn label(&self) -> String {
        format!("Page {} of {}", self.index + 1, self.page_count())
    }
}
