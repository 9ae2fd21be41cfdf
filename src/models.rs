/// One page of a generated story: narrative text plus its illustration URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    text: String,
    image_url: String,
}

impl Page {
    pub fn new(text: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            image_url: image_url.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }
}

/// An ordered, non-empty collection of pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Story {
    pages: Vec<Page>,
}

impl Story {
    /// Returns `None` for an empty page list.
    pub fn from_pages(pages: Vec<Page>) -> Option<Self> {
        if pages.is_empty() {
            None
        } else {
            Some(Self { pages })
        }
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Always false for a constructed story, kept for the `len` convention.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadingProgress {
    pub current: usize,
    pub total: usize,
}

impl LoadingProgress {
    pub fn new(current: usize, total: usize) -> Self {
        Self { current, total }
    }

    /// Progress as a fraction in `[0, 1]`; zero while the total is unknown.
    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        (self.current as f32 / self.total as f32).min(1.0)
    }
}
